use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SeparatorProps {
    #[prop_or_default]
    pub class: Classes,
}

pub fn separator_classes(extra: &Classes) -> Classes {
    classes!("separator", extra.clone())
}

/// Thin horizontal rule between two blocks.
#[function_component(Separator)]
pub fn separator(props: &SeparatorProps) -> Html {
    html! {
        <div role="separator" class={separator_classes(&props.class)}></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_rule_carries_only_the_base_class() {
        assert_eq!(separator_classes(&Classes::new()).to_string(), "separator");
    }

    #[test]
    fn extra_classes_follow_the_base_class() {
        let classes = separator_classes(&classes!("console-split"));
        assert!(classes.contains("separator"));
        assert!(classes.contains("console-split"));
    }
}
