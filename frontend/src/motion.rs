use log::{debug, info};
use wasm_bindgen::JsCast;
use web_sys::{MediaQueryList, MediaQueryListEvent};
use yew::prelude::*;

use crate::config;
use crate::listener::Listeners;

/// Missing platform support counts as "motion not reduced".
pub fn resolve(matches: Option<bool>) -> bool {
    matches.unwrap_or(false)
}

pub type ChangeHandler = Box<dyn FnMut(bool)>;

/// A media query whose answer can change while the page is open.
pub trait MediaQuery {
    type Subscription;

    fn matches(&self) -> bool;

    /// Calls `handler` with every new answer until the subscription is dropped.
    fn on_change(&self, handler: ChangeHandler) -> Self::Subscription;
}

impl MediaQuery for MediaQueryList {
    type Subscription = Listeners;

    fn matches(&self) -> bool {
        MediaQueryList::matches(self)
    }

    fn on_change(&self, mut handler: ChangeHandler) -> Listeners {
        let mut listeners = Listeners::new(self.clone().into());
        listeners.listen("change", move |event| {
            if let Some(change) = event.dyn_ref::<MediaQueryListEvent>() {
                handler(change.matches());
            }
        });
        listeners
    }
}

/// Reports the current answer of `query` to `update`, then every change
/// for as long as the returned subscription lives. Without a query full
/// motion is reported once and nothing is registered.
pub fn watch<Q, F>(query: Option<&Q>, update: F) -> Option<Q::Subscription>
where
    Q: MediaQuery,
    F: Fn(bool) + 'static,
{
    match query {
        Some(query) => {
            update(resolve(Some(query.matches())));
            Some(query.on_change(Box::new(move |matches| {
                info!("Reduced motion preference changed: {}", matches);
                update(matches);
            })))
        }
        None => {
            update(resolve(None));
            None
        }
    }
}

fn reduced_motion_query() -> Option<MediaQueryList> {
    web_sys::window()?
        .match_media(config::REDUCED_MOTION_QUERY)
        .ok()
        .flatten()
}

pub fn prefers_reduced_motion() -> bool {
    resolve(reduced_motion_query().map(|query| query.matches()))
}

/// Tracks the reduced-motion preference for the lifetime of the component.
#[hook]
pub fn use_prefers_reduced_motion() -> bool {
    let reduced = use_state(prefers_reduced_motion);

    {
        let reduced = reduced.clone();
        use_effect_with_deps(
            move |_| {
                let query = reduced_motion_query();
                let subscription = watch(query.as_ref(), move |value| reduced.set(value));
                if subscription.is_none() {
                    debug!("matchMedia unavailable, keeping full motion");
                }
                move || drop(subscription)
            },
            (),
        );
    }

    *reduced
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;

    #[derive(Default)]
    struct FakeQuery {
        matches: Cell<bool>,
        handler: Rc<RefCell<Option<ChangeHandler>>>,
        subscribed: Cell<usize>,
    }

    struct FakeSubscription(Rc<RefCell<Option<ChangeHandler>>>);

    impl Drop for FakeSubscription {
        fn drop(&mut self) {
            self.0.borrow_mut().take();
        }
    }

    impl FakeQuery {
        fn change(&self, matches: bool) {
            self.matches.set(matches);
            if let Some(handler) = self.handler.borrow_mut().as_mut() {
                handler(matches);
            }
        }

        fn is_listening(&self) -> bool {
            self.handler.borrow().is_some()
        }
    }

    impl MediaQuery for FakeQuery {
        type Subscription = FakeSubscription;

        fn matches(&self) -> bool {
            self.matches.get()
        }

        fn on_change(&self, handler: ChangeHandler) -> FakeSubscription {
            self.subscribed.set(self.subscribed.get() + 1);
            *self.handler.borrow_mut() = Some(handler);
            FakeSubscription(Rc::clone(&self.handler))
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<bool>>>, impl Fn(bool) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, move |value| sink.borrow_mut().push(value))
    }

    #[test]
    fn absent_capability_means_full_motion() {
        assert!(!resolve(None));
    }

    #[test]
    fn platform_answer_is_passed_through() {
        assert!(resolve(Some(true)));
        assert!(!resolve(Some(false)));
    }

    #[test]
    fn watching_reports_the_current_answer_first() {
        let query = FakeQuery::default();
        query.matches.set(true);
        let (seen, update) = recorder();

        let _subscription = watch(Some(&query), update);

        assert_eq!(*seen.borrow(), vec![true]);
        assert_eq!(query.subscribed.get(), 1);
    }

    #[test]
    fn changes_are_forwarded_while_subscribed() {
        let query = FakeQuery::default();
        let (seen, update) = recorder();
        let _subscription = watch(Some(&query), update);

        query.change(true);
        query.change(false);

        assert_eq!(*seen.borrow(), vec![false, true, false]);
    }

    #[test]
    fn dropping_the_subscription_stops_updates() {
        let query = FakeQuery::default();
        let (seen, update) = recorder();
        let subscription = watch(Some(&query), update);

        drop(subscription);
        query.change(true);

        assert!(!query.is_listening());
        assert_eq!(*seen.borrow(), vec![false]);
    }

    #[test]
    fn missing_query_reports_full_motion_and_registers_nothing() {
        let (seen, update) = recorder();
        let subscription = watch(None::<&FakeQuery>, update);

        assert!(subscription.is_none());
        assert_eq!(*seen.borrow(), vec![false]);
    }
}
