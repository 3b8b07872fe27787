use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Solid,
    Outline,
}

#[derive(Properties, PartialEq)]
pub struct BadgeProps {
    #[prop_or_default]
    pub variant: BadgeVariant,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[function_component(Badge)]
pub fn badge(props: &BadgeProps) -> Html {
    let variant = match props.variant {
        BadgeVariant::Solid => "badge-solid",
        BadgeVariant::Outline => "badge-outline",
    };

    html! {
        <span class={classes!("badge", variant, props.class.clone())}>
            { for props.children.iter() }
        </span>
    }
}
