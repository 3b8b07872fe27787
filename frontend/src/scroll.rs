use log::warn;
use yew::prelude::*;

use crate::config;
use crate::listener::Listeners;

/// Vertical page scroll offset in CSS pixels, shared through context.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ScrollPosition(pub f64);

impl ScrollPosition {
    /// Transform for the perspective grid behind the page.
    pub fn grid_transform(self) -> String {
        format!(
            "perspective(1000px) rotateX(45deg) translateY({}px)",
            self.0 * config::GRID_SCROLL_FACTOR
        )
    }
}

fn current_scroll() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

#[derive(Properties, PartialEq)]
pub struct ScrollProviderProps {
    pub children: Children,
}

/// Owns the single scroll subscription of the page.
#[function_component(ScrollProvider)]
pub fn scroll_provider(props: &ScrollProviderProps) -> Html {
    let position = use_state(|| ScrollPosition(current_scroll()));

    {
        let position = position.clone();
        use_effect_with_deps(
            move |_| {
                let listeners = match web_sys::window() {
                    Some(window) => {
                        position.set(ScrollPosition(current_scroll()));
                        let mut listeners = Listeners::new(window.into());
                        listeners.listen("scroll", move |_| {
                            position.set(ScrollPosition(current_scroll()));
                        });
                        Some(listeners)
                    }
                    None => {
                        warn!("No window, scroll position stays at 0");
                        None
                    }
                };
                move || drop(listeners)
            },
            (),
        );
    }

    html! {
        <ContextProvider<ScrollPosition> context={*position}>
            { for props.children.iter() }
        </ContextProvider<ScrollPosition>>
    }
}

#[hook]
pub fn use_scroll_position() -> ScrollPosition {
    use_context::<ScrollPosition>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_starts_untranslated() {
        assert_eq!(
            ScrollPosition::default().grid_transform(),
            "perspective(1000px) rotateX(45deg) translateY(0px)"
        );
    }

    #[test]
    fn grid_moves_a_fifth_of_the_scroll() {
        assert_eq!(
            ScrollPosition(500.0).grid_transform(),
            "perspective(1000px) rotateX(45deg) translateY(100px)"
        );
    }
}
