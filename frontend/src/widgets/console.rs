use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::separator::Separator;

pub const SAMPLE_INPUT: &str = "print('Hello CodeLumen! ✨')";

const SUCCESS_KEYWORDS: [&str; 3] = ["hello", "console.log", "print"];

/// Canned reply of the hero console. Nothing typed here is ever executed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    Greeting,
    ErrorHint,
    Prompt,
    Listening,
}

impl Feedback {
    /// Classifies input case-insensitively after trimming. Greeting wins over
    /// the error hint, which wins over the empty prompt.
    pub fn classify(input: &str) -> Self {
        let preview = input.trim().to_lowercase();
        if SUCCESS_KEYWORDS.iter().any(|keyword| preview.contains(keyword)) {
            Feedback::Greeting
        } else if preview.contains("error") {
            Feedback::ErrorHint
        } else if preview.is_empty() {
            Feedback::Prompt
        } else {
            Feedback::Listening
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Feedback::Greeting => "Hello CodeLumen! ✨",
            Feedback::ErrorHint => "⚠️ Tipp: Konsolen-Ausgaben funktionieren mit console.log(...) ",
            Feedback::Prompt => "Schreibe einen Ausdruck und tippe Enter.",
            Feedback::Listening => "🤖 Ich höre zu … Probiere console.log('Hi')",
        }
    }
}

pub fn respond(input: &str) -> &'static str {
    Feedback::classify(input).message()
}

#[derive(Properties, PartialEq)]
pub struct HeroConsoleProps {
    pub reduced_motion: bool,
}

#[function_component(HeroConsole)]
pub fn hero_console(props: &HeroConsoleProps) -> Html {
    let input = use_state(|| SAMPLE_INPUT.to_string());
    let output = respond(&input);

    let oninput = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            input.set(target.value());
        })
    };

    html! {
        <div class={classes!("hero-console", (!props.reduced_motion).then(|| "rise-in"))}>
            <div class="hero-console-glow bg-aurora" aria-hidden="true"></div>
            <div class="glass hero-console-panel">
                <div class="hero-console-header">
                    <span>{"Live-Konsole"}</span>
                    <span>{"✨"}</span>
                </div>
                <div class="hero-console-body">
                    <div>
                        <div class="hero-console-label">{"Dein Code"}</div>
                        <div class="hero-console-editor">
                            <input
                                value={(*input).clone()}
                                oninput={oninput}
                                aria-label="Mini Code Editor"
                            />
                        </div>
                    </div>
                    <Separator />
                    <div>
                        <div class="hero-console-label">{"Ausgabe"}</div>
                        <div class="hero-console-output">{output}</div>
                    </div>
                </div>
                <p class="hero-console-tip">
                    {"Tippe "}<span>{"console.log"}</span>{" oder "}<span>{"print"}</span>{" und erlebe sofortiges Feedback."}
                </p>
                {
                    if props.reduced_motion {
                        html! { <p class="hero-console-reduced">{"Animationen reduziert"}</p> }
                    } else {
                        html! {}
                    }
                }
            </div>
            <style>
                {r#"
                .hero-console {
                    position: relative;
                    width: 100%;
                }
                .hero-console.rise-in {
                    animation: rise-in 0.8s ease-out both;
                }
                .hero-console-glow {
                    position: absolute;
                    inset: -1.5rem;
                    border-radius: 36px;
                    opacity: 0.5;
                    filter: blur(48px);
                }
                .hero-console-panel {
                    position: relative;
                    border-radius: 28px;
                    padding: 1.5rem;
                }
                .hero-console-header {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    color: rgba(255, 255, 255, 0.4);
                }
                .hero-console-body {
                    display: grid;
                    gap: 1rem;
                    margin-top: 1rem;
                }
                .hero-console-label {
                    font-size: 0.75rem;
                    color: rgba(255, 255, 255, 0.6);
                }
                .hero-console-editor {
                    margin-top: 0.5rem;
                    border-radius: 0.75rem;
                    background: rgba(0, 0, 0, 0.5);
                    padding: 1rem;
                }
                .hero-console-editor input {
                    width: 100%;
                    background: transparent;
                    border: none;
                    outline: none;
                    color: var(--brand-50);
                    font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
                    font-size: 0.875rem;
                }
                .hero-console-output {
                    margin-top: 0.5rem;
                    border-radius: 0.75rem;
                    border: 1px solid rgba(110, 231, 183, 0.3);
                    background: rgba(16, 185, 129, 0.1);
                    padding: 1rem;
                    font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
                    font-size: 0.875rem;
                    color: #a7f3d0;
                }
                .hero-console-tip {
                    margin-top: 1.5rem;
                    font-size: 0.75rem;
                    color: rgba(255, 255, 255, 0.5);
                }
                .hero-console-tip span {
                    color: #ffffff;
                }
                .hero-console-reduced {
                    margin-top: 0.75rem;
                    font-size: 10px;
                    text-transform: uppercase;
                    letter-spacing: 0.2em;
                    color: rgba(255, 255, 255, 0.3);
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_input_greets() {
        assert_eq!(respond(SAMPLE_INPUT), "Hello CodeLumen! ✨");
    }

    #[test]
    fn success_keywords_match_in_any_case() {
        for input in ["HELLO world", "Console.Log(1)", "  PRINT x  ", "say hello"] {
            assert_eq!(Feedback::classify(input), Feedback::Greeting, "{input}");
        }
    }

    #[test]
    fn greeting_beats_error_hint() {
        assert_eq!(Feedback::classify("print(error)"), Feedback::Greeting);
        assert_eq!(Feedback::classify("Error: hello"), Feedback::Greeting);
    }

    #[test]
    fn error_without_success_keyword_gives_hint() {
        assert_eq!(
            respond("TypeError: x is undefined"),
            "⚠️ Tipp: Konsolen-Ausgaben funktionieren mit console.log(...) "
        );
    }

    #[test]
    fn blank_input_prompts() {
        assert_eq!(respond(""), "Schreibe einen Ausdruck und tippe Enter.");
        assert_eq!(respond("   \t\n"), "Schreibe einen Ausdruck und tippe Enter.");
    }

    #[test]
    fn anything_else_is_listening() {
        assert_eq!(respond("1 + 1"), "🤖 Ich höre zu … Probiere console.log('Hi')");
        assert_eq!(Feedback::classify("console.error"), Feedback::ErrorHint);
        assert_eq!(Feedback::classify("consolelog"), Feedback::Listening);
    }
}
