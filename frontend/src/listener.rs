use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

/// Event listeners bound to one target. Dropping the value removes every
/// listener it added, so a component effect can simply return it from its
/// destructor.
pub struct Listeners {
    target: EventTarget,
    bound: Vec<(&'static str, Closure<dyn FnMut(Event)>)>,
}

impl Listeners {
    pub fn new(target: EventTarget) -> Self {
        Self {
            target,
            bound: Vec::new(),
        }
    }

    pub fn listen<F>(&mut self, event: &'static str, callback: F)
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::<dyn FnMut(Event)>::new(callback);
        match self
            .target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            Ok(()) => self.bound.push((event, closure)),
            Err(err) => warn!("Failed to add {} listener: {:?}", event, err),
        }
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        for (event, closure) in self.bound.drain(..) {
            if let Err(err) = self
                .target
                .remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            {
                warn!("Failed to remove {} listener: {:?}", event, err);
            }
        }
        debug!("Listeners released");
    }
}
