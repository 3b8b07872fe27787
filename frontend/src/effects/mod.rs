//! Pointer-driven visual effects.
//!
//! An effect is attached to a [`PointerSurface`] and receives move/leave
//! events for as long as the returned [`Attached`] guard lives. Dropping the
//! guard unsubscribes and puts every element back at rest.

use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, HtmlElement, MouseEvent};

use crate::listener::Listeners;

pub mod liquid;
pub mod magnet;
pub mod tilt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Bounding box in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn center(&self) -> Point {
        Point {
            x: self.left + self.width / 2.0,
            y: self.top + self.height / 2.0,
        }
    }

    /// Position of `point` relative to the box, (0, 0) top-left and (1, 1)
    /// bottom-right. `None` for a box without area.
    pub fn fraction_of(&self, point: Point) -> Option<(f64, f64)> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        Some((
            (point.x - self.left) / self.width,
            (point.y - self.top) / self.height,
        ))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Move(Point),
    Leave,
}

/// Something whose visual transform an effect may rewrite.
pub trait Transformable {
    fn bounds(&self) -> Rect;
    fn set_transform(&self, transform: &str);
}

impl Transformable for HtmlElement {
    fn bounds(&self) -> Rect {
        let rect = self.get_bounding_client_rect();
        Rect {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }

    fn set_transform(&self, transform: &str) {
        if let Err(err) = self.style().set_property("transform", transform) {
            warn!("Failed to set transform: {:?}", err);
        }
    }
}

pub trait PointerEffect {
    fn pointer_moved(&self, at: Point);

    /// Returns every element to its resting transform.
    fn pointer_left(&self);

    fn handle(&self, event: PointerEvent) {
        match event {
            PointerEvent::Move(at) => self.pointer_moved(at),
            PointerEvent::Leave => self.pointer_left(),
        }
    }
}

pub type PointerHandler = Box<dyn FnMut(PointerEvent)>;

/// Source of pointer events. The subscription stays active until dropped.
pub trait PointerSurface {
    type Subscription;

    fn subscribe(&self, handler: PointerHandler) -> Self::Subscription;
}

/// Mouse events of a single DOM event target.
pub struct ElementSurface {
    target: EventTarget,
}

impl ElementSurface {
    pub fn new(target: EventTarget) -> Self {
        Self { target }
    }
}

impl PointerSurface for ElementSurface {
    type Subscription = Listeners;

    fn subscribe(&self, handler: PointerHandler) -> Listeners {
        let handler = Rc::new(RefCell::new(handler));
        let mut listeners = Listeners::new(self.target.clone());

        let on_move = Rc::clone(&handler);
        listeners.listen("mousemove", move |event| {
            if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                let at = Point {
                    x: f64::from(mouse.client_x()),
                    y: f64::from(mouse.client_y()),
                };
                (on_move.borrow_mut().as_mut())(PointerEvent::Move(at));
            }
        });

        let on_leave = handler;
        listeners.listen("mouseleave", move |_| {
            (on_leave.borrow_mut().as_mut())(PointerEvent::Leave);
        });

        listeners
    }
}

/// A live effect. Dropping it detaches the listeners and resets the effect.
pub struct Attached<E: PointerEffect, S> {
    effect: Rc<E>,
    subscription: Option<S>,
}

impl<E: PointerEffect, S> Drop for Attached<E, S> {
    fn drop(&mut self) {
        self.subscription.take();
        self.effect.pointer_left();
    }
}

/// Subscribes `effect` to `surface` when `enabled`. A disabled effect
/// registers nothing and never touches its elements.
pub fn attach<E, P>(enabled: bool, surface: &P, effect: E) -> Option<Attached<E, P::Subscription>>
where
    E: PointerEffect + 'static,
    P: PointerSurface,
{
    if !enabled {
        return None;
    }
    let effect = Rc::new(effect);
    let handler_effect = Rc::clone(&effect);
    let subscription = surface.subscribe(Box::new(move |event| handler_effect.handle(event)));
    Some(Attached {
        effect,
        subscription: Some(subscription),
    })
}

/// Formats a CSS number, folding `-0` into `0`.
pub(crate) fn css_number(value: f64) -> String {
    format!("{:.2}", value + 0.0)
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;

    #[derive(Clone)]
    pub struct FakeElement {
        pub rect: Rect,
        pub transform: Rc<RefCell<Option<String>>>,
    }

    impl FakeElement {
        pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
            Self {
                rect: Rect { left, top, width, height },
                transform: Rc::new(RefCell::new(None)),
            }
        }

        pub fn transform(&self) -> Option<String> {
            self.transform.borrow().clone()
        }
    }

    impl Transformable for FakeElement {
        fn bounds(&self) -> Rect {
            self.rect
        }

        fn set_transform(&self, transform: &str) {
            *self.transform.borrow_mut() = Some(transform.to_string());
        }
    }

    /// Records subscriptions and lets a test dispatch events by hand.
    #[derive(Default)]
    pub struct FakeSurface {
        pub handler: Rc<RefCell<Option<PointerHandler>>>,
        pub subscribed: Cell<usize>,
    }

    pub struct FakeSubscription(Rc<RefCell<Option<PointerHandler>>>);

    impl Drop for FakeSubscription {
        fn drop(&mut self) {
            self.0.borrow_mut().take();
        }
    }

    impl FakeSurface {
        pub fn dispatch(&self, event: PointerEvent) {
            if let Some(handler) = self.handler.borrow_mut().as_mut() {
                handler(event);
            }
        }

        pub fn is_listening(&self) -> bool {
            self.handler.borrow().is_some()
        }
    }

    impl PointerSurface for FakeSurface {
        type Subscription = FakeSubscription;

        fn subscribe(&self, handler: PointerHandler) -> FakeSubscription {
            self.subscribed.set(self.subscribed.get() + 1);
            *self.handler.borrow_mut() = Some(handler);
            FakeSubscription(Rc::clone(&self.handler))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_of_rect() {
        let rect = Rect { left: 10.0, top: 20.0, width: 100.0, height: 40.0 };
        assert_eq!(rect.center(), Point { x: 60.0, y: 40.0 });
    }

    #[test]
    fn fraction_spans_unit_square() {
        let rect = Rect { left: 10.0, top: 20.0, width: 100.0, height: 40.0 };
        assert_eq!(rect.fraction_of(Point { x: 10.0, y: 20.0 }), Some((0.0, 0.0)));
        assert_eq!(rect.fraction_of(Point { x: 110.0, y: 60.0 }), Some((1.0, 1.0)));
        assert_eq!(rect.fraction_of(Point { x: 60.0, y: 40.0 }), Some((0.5, 0.5)));
    }

    #[test]
    fn empty_rect_has_no_fraction() {
        let rect = Rect { left: 0.0, top: 0.0, width: 0.0, height: 10.0 };
        assert_eq!(rect.fraction_of(Point { x: 0.0, y: 0.0 }), None);
    }

    #[test]
    fn negative_zero_is_printed_without_sign() {
        assert_eq!(css_number(-0.0), "0.00");
        assert_eq!(css_number(-1.234), "-1.23");
    }
}
