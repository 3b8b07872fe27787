use web_sys::HtmlElement;
use yew::prelude::*;

use crate::effects::tilt::{level_transform, Tilt};
use crate::effects::{attach, ElementSurface};

#[derive(Properties, PartialEq)]
pub struct TiltCardProps {
    pub title: AttrValue,
    pub level: AttrValue,
    pub enable_tilt: bool,
}

/// Curriculum card that tips toward the pointer.
#[function_component(TiltCard)]
pub fn tilt_card(props: &TiltCardProps) -> Html {
    let card_ref = use_node_ref();

    {
        let card_ref = card_ref.clone();
        use_effect_with_deps(
            move |enabled| {
                let attached = card_ref.cast::<HtmlElement>().and_then(|card| {
                    let surface = ElementSurface::new(card.clone().into());
                    attach(*enabled, &surface, Tilt::new(card))
                });
                move || drop(attached)
            },
            props.enable_tilt,
        );
    }

    html! {
        <div ref={card_ref} class="tilt-card" style={format!("transform: {};", level_transform())}>
            <div class="tilt-card-glow bg-aurora" aria-hidden="true"></div>
            <div class="tilt-card-body">
                <h3>{props.title.clone()}</h3>
                <p class="tilt-card-level">{props.level.clone()}</p>
                <div class="tilt-card-progress">
                    <div aria-hidden="true"></div>
                </div>
                <p class="tilt-card-note">{"Mini-Project & Review inklusive"}</p>
            </div>
        </div>
    }
}
