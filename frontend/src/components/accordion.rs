use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccordionEntry {
    pub value: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
}

/// Single-open, collapsible accordion state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpenEntry(Option<&'static str>);

impl OpenEntry {
    pub fn is_open(self, value: &str) -> bool {
        self.0 == Some(value)
    }

    /// Opens `value`, or collapses it when it is already open.
    pub fn toggled(self, value: &'static str) -> Self {
        if self.is_open(value) {
            OpenEntry(None)
        } else {
            OpenEntry(Some(value))
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AccordionProps {
    pub entries: &'static [AccordionEntry],
}

#[function_component(Accordion)]
pub fn accordion(props: &AccordionProps) -> Html {
    let open = use_state(OpenEntry::default);

    html! {
        <div class="accordion">
            { for props.entries.iter().map(|entry| {
                let is_open = open.is_open(entry.value);
                let toggle = {
                    let open = open.clone();
                    let value = entry.value;
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        open.set(open.toggled(value));
                    })
                };
                html! {
                    <div key={entry.value} class={classes!("accordion-item", is_open.then_some("open"))}>
                        <button
                            class="accordion-trigger"
                            onclick={toggle}
                            aria-expanded={if is_open { "true" } else { "false" }}
                        >
                            <span>{entry.question}</span>
                            <span class="accordion-chevron">{"⌄"}</span>
                        </button>
                        {
                            if is_open {
                                html! { <div class="accordion-content">{entry.answer}</div> }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let open = OpenEntry::default();
        assert!(!open.is_open("beginner"));
    }

    #[test]
    fn opening_another_entry_closes_the_first() {
        let open = OpenEntry::default().toggled("beginner").toggled("zeit");
        assert!(open.is_open("zeit"));
        assert!(!open.is_open("beginner"));
    }

    #[test]
    fn toggling_the_open_entry_collapses_it() {
        let open = OpenEntry::default().toggled("support").toggled("support");
        assert_eq!(open, OpenEntry::default());
    }
}
