use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
    Outline,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Ghost => "btn-ghost",
            ButtonVariant::Outline => "btn-outline",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Regular,
    Small,
    Large,
    Icon,
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            ButtonSize::Regular => "btn-md",
            ButtonSize::Small => "btn-sm",
            ButtonSize::Large => "btn-lg",
            ButtonSize::Icon => "btn-icon",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
}

impl ButtonType {
    fn as_str(self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
        }
    }
}

/// Class list of a button. Magnet buttons also carry the aurora border.
pub fn button_classes(
    variant: ButtonVariant,
    size: ButtonSize,
    magnet: bool,
    extra: &Classes,
) -> Classes {
    classes!(
        "btn",
        variant.class(),
        size.class(),
        magnet.then(|| classes!("magnet", "aurora-border")),
        extra.clone()
    )
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    #[prop_or_default]
    pub kind: ButtonType,
    /// Follows the pointer while motion is allowed.
    #[prop_or_default]
    pub magnet: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let class = button_classes(props.variant, props.size, props.magnet, &props.class);

    html! {
        <button type={props.kind.as_str()} class={class} onclick={props.onclick.clone()}>
            { for props.children.iter() }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class_list(variant: ButtonVariant, size: ButtonSize, magnet: bool) -> Vec<String> {
        button_classes(variant, size, magnet, &Classes::new())
            .to_string()
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn defaults_are_primary_and_regular() {
        assert_eq!(
            class_list(ButtonVariant::default(), ButtonSize::default(), false),
            vec!["btn", "btn-primary", "btn-md"]
        );
    }

    #[test]
    fn magnet_marks_the_button() {
        let list = class_list(ButtonVariant::Primary, ButtonSize::Large, true);
        assert!(list.contains(&"magnet".to_string()));
        assert!(list.contains(&"aurora-border".to_string()));
        assert!(list.contains(&"btn-lg".to_string()));
    }

    #[test]
    fn secondary_ghost_outline_map_to_their_classes() {
        assert!(class_list(ButtonVariant::Secondary, ButtonSize::Small, false)
            .contains(&"btn-secondary".to_string()));
        assert!(class_list(ButtonVariant::Ghost, ButtonSize::Icon, false)
            .contains(&"btn-ghost".to_string()));
        assert!(class_list(ButtonVariant::Outline, ButtonSize::Regular, false)
            .contains(&"btn-outline".to_string()));
    }

    #[test]
    fn extra_classes_are_appended() {
        let list = button_classes(
            ButtonVariant::Ghost,
            ButtonSize::Regular,
            false,
            &classes!("nav-secondary"),
        );
        assert!(list.contains("nav-secondary"));
    }
}
