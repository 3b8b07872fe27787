use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InputProps {
    pub value: String,
    pub oninput: Callback<InputEvent>,
    #[prop_or_default]
    pub placeholder: AttrValue,
    /// Virtual keyboard hint, omitted when empty.
    #[prop_or_default]
    pub inputmode: AttrValue,
    #[prop_or_default]
    pub aria_label: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Input)]
pub fn input(props: &InputProps) -> Html {
    let inputmode = (!props.inputmode.is_empty()).then(|| props.inputmode.clone());

    html! {
        <input
            class={classes!("text-input", props.class.clone())}
            value={props.value.clone()}
            oninput={props.oninput.clone()}
            placeholder={props.placeholder.clone()}
            inputmode={inputmode}
            aria-label={props.aria_label.clone()}
        />
    }
}
