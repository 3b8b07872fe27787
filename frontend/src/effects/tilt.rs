use super::{css_number, Point, PointerEffect, Transformable};
use crate::config;

/// Rotation around the horizontal (`x`) and vertical (`y`) axes, in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation {
    pub x: f64,
    pub y: f64,
}

impl Rotation {
    pub const LEVEL: Rotation = Rotation { x: 0.0, y: 0.0 };

    /// Maps a fractional pointer position onto `[-max, max]` on both axes.
    /// Pointer below the centre tips the card back, pointer right of the
    /// centre turns it left.
    pub fn from_fraction(fx: f64, fy: f64, max_degrees: f64) -> Self {
        let span = max_degrees * 2.0;
        Rotation {
            x: (fy - 0.5) * span,
            y: -(fx - 0.5) * span,
        }
    }

    pub fn to_css(self, perspective_px: u32) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg)",
            perspective_px,
            css_number(self.x),
            css_number(self.y)
        )
    }
}

pub fn level_transform() -> String {
    Rotation::LEVEL.to_css(config::TILT_PERSPECTIVE_PX)
}

/// 3-D tilt of a single card following the pointer across it.
pub struct Tilt<T> {
    card: T,
    max_degrees: f64,
}

impl<T: Transformable> Tilt<T> {
    pub fn new(card: T) -> Self {
        Self {
            card,
            max_degrees: config::TILT_MAX_DEGREES,
        }
    }

    pub fn rotation_at(&self, at: Point) -> Rotation {
        match self.card.bounds().fraction_of(at) {
            Some((fx, fy)) => Rotation::from_fraction(fx, fy, self.max_degrees),
            None => Rotation::LEVEL,
        }
    }
}

impl<T: Transformable> PointerEffect for Tilt<T> {
    fn pointer_moved(&self, at: Point) {
        let rotation = self.rotation_at(at);
        self.card
            .set_transform(&rotation.to_css(config::TILT_PERSPECTIVE_PX));
    }

    fn pointer_left(&self) {
        self.card.set_transform(&level_transform());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::testing::{FakeElement, FakeSurface};
    use crate::effects::{attach, PointerEvent};

    #[test]
    fn center_is_level() {
        let card = FakeElement::new(50.0, 50.0, 300.0, 200.0);
        let tilt = Tilt::new(card);
        let rotation = tilt.rotation_at(Point { x: 200.0, y: 150.0 });
        assert_eq!(rotation, Rotation { x: 0.0, y: 0.0 });
    }

    #[test]
    fn top_left_corner_reaches_the_maximum() {
        let card = FakeElement::new(50.0, 50.0, 300.0, 200.0);
        let tilt = Tilt::new(card);
        let rotation = tilt.rotation_at(Point { x: 50.0, y: 50.0 });
        assert_eq!(rotation, Rotation { x: -3.0, y: 3.0 });
    }

    #[test]
    fn bottom_right_corner_mirrors_top_left() {
        let rotation = Rotation::from_fraction(1.0, 1.0, 3.0);
        assert_eq!(rotation, Rotation { x: 3.0, y: -3.0 });
    }

    #[test]
    fn level_css_has_no_signed_zero() {
        assert_eq!(
            level_transform(),
            "perspective(800px) rotateX(0.00deg) rotateY(0.00deg)"
        );
        let centered = Rotation::from_fraction(0.5, 0.5, 3.0);
        assert_eq!(centered.to_css(800), level_transform());
    }

    #[test]
    fn move_and_leave_update_the_card() {
        let surface = FakeSurface::default();
        let card = FakeElement::new(0.0, 0.0, 100.0, 100.0);
        let _attached = attach(true, &surface, Tilt::new(card.clone()));

        surface.dispatch(PointerEvent::Move(Point { x: 0.0, y: 0.0 }));
        assert_eq!(
            card.transform().as_deref(),
            Some("perspective(800px) rotateX(-3.00deg) rotateY(3.00deg)")
        );

        surface.dispatch(PointerEvent::Leave);
        assert_eq!(card.transform(), Some(level_transform()));
    }

    #[test]
    fn disabled_tilt_leaves_card_alone() {
        let surface = FakeSurface::default();
        let card = FakeElement::new(0.0, 0.0, 100.0, 100.0);
        let attached = attach(false, &surface, Tilt::new(card.clone()));

        assert!(attached.is_none());
        surface.dispatch(PointerEvent::Move(Point { x: 0.0, y: 0.0 }));
        assert_eq!(card.transform(), None);
    }
}
