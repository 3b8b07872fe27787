use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

use super::{attach, css_number, ElementSurface, Point, PointerEffect, Rect, Transformable};
use crate::config;

pub const MAGNET_REST: &str = "translate(0, 0)";

/// Translation pulling an element with bounds `rect` toward `pointer`.
pub fn pull(rect: Rect, pointer: Point, strength: f64) -> (f64, f64) {
    let center = rect.center();
    (
        (pointer.x - center.x) * strength,
        (pointer.y - center.y) * strength,
    )
}

pub fn translate(dx: f64, dy: f64) -> String {
    format!("translate({}px, {}px)", css_number(dx), css_number(dy))
}

/// Moves every marked element a fraction of the way toward the pointer.
pub struct Magnet<T> {
    elements: Vec<T>,
    strength: f64,
}

impl<T: Transformable> Magnet<T> {
    pub fn new(elements: Vec<T>) -> Self {
        Self::with_strength(elements, config::MAGNET_STRENGTH)
    }

    pub fn with_strength(elements: Vec<T>, strength: f64) -> Self {
        Self { elements, strength }
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<T: Transformable> PointerEffect for Magnet<T> {
    fn pointer_moved(&self, at: Point) {
        for element in &self.elements {
            let (dx, dy) = pull(element.bounds(), at, self.strength);
            element.set_transform(&translate(dx, dy));
        }
    }

    fn pointer_left(&self) {
        for element in &self.elements {
            element.set_transform(MAGNET_REST);
        }
    }
}

/// Document root plus every element currently marked for the magnet.
fn marked_elements() -> Option<(Element, Vec<HtmlElement>)> {
    let document = web_sys::window()?.document()?;
    let root = document.document_element()?;
    let nodes = document.query_selector_all(config::MAGNET_SELECTOR).ok()?;
    let elements = (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect();
    Some((root, elements))
}

/// Runs the magnet over the whole document while `enabled`.
#[hook]
pub fn use_magnet(enabled: bool) {
    use_effect_with_deps(
        move |enabled| {
            let attached = if *enabled {
                marked_elements().and_then(|(root, elements)| {
                    let magnet = Magnet::new(elements);
                    if magnet.is_empty() {
                        return None;
                    }
                    debug!("Magnet attached to {} elements", magnet.elements.len());
                    attach(true, &ElementSurface::new(root.into()), magnet)
                })
            } else {
                None
            };
            move || drop(attached)
        },
        enabled,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::testing::{FakeElement, FakeSurface};
    use crate::effects::{attach, PointerEvent};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn pull_is_five_percent_of_distance_to_center() {
        let rect = Rect { left: 100.0, top: 100.0, width: 200.0, height: 100.0 };
        let (dx, dy) = pull(rect, Point { x: 400.0, y: 50.0 }, 0.05);
        assert!(approx(dx, 10.0));
        assert!(approx(dy, -5.0));
    }

    #[test]
    fn pointer_on_center_does_not_move() {
        let rect = Rect { left: 0.0, top: 0.0, width: 50.0, height: 50.0 };
        let (dx, dy) = pull(rect, rect.center(), 0.05);
        assert_eq!(translate(dx, dy), "translate(0.00px, 0.00px)");
    }

    #[test]
    fn disabled_magnet_registers_nothing() {
        let surface = FakeSurface::default();
        let button = FakeElement::new(0.0, 0.0, 100.0, 40.0);
        let attached = attach(false, &surface, Magnet::new(vec![button.clone()]));

        assert!(attached.is_none());
        assert_eq!(surface.subscribed.get(), 0);
        surface.dispatch(PointerEvent::Move(Point { x: 500.0, y: 500.0 }));
        assert_eq!(button.transform(), None);
    }

    #[test]
    fn move_translates_every_marked_element() {
        let surface = FakeSurface::default();
        let first = FakeElement::new(100.0, 100.0, 200.0, 100.0);
        let second = FakeElement::new(0.0, 0.0, 20.0, 20.0);
        let _attached = attach(
            true,
            &surface,
            Magnet::new(vec![first.clone(), second.clone()]),
        );

        surface.dispatch(PointerEvent::Move(Point { x: 300.0, y: 250.0 }));

        assert_eq!(first.transform().as_deref(), Some("translate(5.00px, 5.00px)"));
        assert_eq!(second.transform().as_deref(), Some("translate(14.50px, 12.00px)"));
    }

    #[test]
    fn leave_resets_to_identity() {
        let surface = FakeSurface::default();
        let button = FakeElement::new(0.0, 0.0, 100.0, 40.0);
        let _attached = attach(true, &surface, Magnet::new(vec![button.clone()]));

        surface.dispatch(PointerEvent::Move(Point { x: 300.0, y: 300.0 }));
        surface.dispatch(PointerEvent::Leave);

        assert_eq!(button.transform().as_deref(), Some(MAGNET_REST));
    }

    #[test]
    fn dropping_detaches_and_resets() {
        let surface = FakeSurface::default();
        let button = FakeElement::new(0.0, 0.0, 100.0, 40.0);
        let attached = attach(true, &surface, Magnet::new(vec![button.clone()]));
        surface.dispatch(PointerEvent::Move(Point { x: 300.0, y: 300.0 }));

        drop(attached);

        assert!(!surface.is_listening());
        assert_eq!(button.transform().as_deref(), Some(MAGNET_REST));
        surface.dispatch(PointerEvent::Move(Point { x: 10.0, y: 10.0 }));
        assert_eq!(button.transform().as_deref(), Some(MAGNET_REST));
    }

    #[test]
    fn repeated_toggles_keep_a_single_subscription() {
        let surface = FakeSurface::default();
        let button = FakeElement::new(0.0, 0.0, 100.0, 40.0);
        for _ in 0..3 {
            let attached = attach(true, &surface, Magnet::new(vec![button.clone()]));
            assert!(surface.is_listening());
            drop(attached);
            assert!(!surface.is_listening());
        }
        assert_eq!(surface.subscribed.get(), 3);
    }
}
