use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Disconnects the observer when dropped.
struct Observation {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe_once(element: &Element, threshold: f64, on_visible: Callback<()>) -> Option<Observation> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let visible = entries.iter().any(|entry| {
                entry
                    .dyn_into::<IntersectionObserverEntry>()
                    .map(|entry| entry.is_intersecting())
                    .unwrap_or(false)
            });
            if visible {
                observer.disconnect();
                on_visible.emit(());
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(err) => {
                warn!("IntersectionObserver unavailable: {:?}", err);
                return None;
            }
        };
    observer.observe(element);

    Some(Observation {
        observer,
        _callback: callback,
    })
}

/// Becomes `true` the first time `threshold` of the node is in view and
/// stays that way. Without observer support the node counts as visible.
#[hook]
pub fn use_revealed(node: NodeRef, threshold: f64) -> bool {
    let revealed = use_state(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let on_visible = {
                    let revealed = revealed.clone();
                    Callback::from(move |_| revealed.set(true))
                };
                let observation = node
                    .cast::<Element>()
                    .and_then(|element| observe_once(&element, threshold, on_visible));
                if observation.is_none() {
                    revealed.set(true);
                }
                move || drop(observation)
            },
            (),
        );
    }

    *revealed
}

/// CSS transition delay for the `index`-th card of a staggered row.
pub fn stagger_delay(index: usize) -> String {
    format!("transition-delay: {:.1}s;", index as f64 * 0.1)
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub threshold: f64,
    #[prop_or_default]
    pub delay: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Fades and slides its children in once they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_revealed(node.clone(), props.threshold);

    html! {
        <div
            ref={node}
            class={classes!("reveal", revealed.then_some("revealed"), props.class.clone())}
            style={props.delay.clone()}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_card_has_no_delay() {
        assert_eq!(stagger_delay(0), "transition-delay: 0.0s;");
    }

    #[test]
    fn cards_are_staggered_by_a_tenth() {
        assert_eq!(stagger_delay(1), "transition-delay: 0.1s;");
        assert_eq!(stagger_delay(2), "transition-delay: 0.2s;");
    }
}
