use log::debug;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::button::{Button, ButtonType};
use crate::components::input::Input;

pub const ANSWER: &str = "42";

/// Status line under the challenge form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizStatus {
    NotTried,
    Correct,
    Empty,
    Almost,
}

impl QuizStatus {
    pub fn check(input: &str) -> Self {
        let answer = input.trim().to_lowercase();
        if answer == ANSWER {
            QuizStatus::Correct
        } else if answer.is_empty() {
            QuizStatus::Empty
        } else {
            QuizStatus::Almost
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            QuizStatus::NotTried => "Noch keinen Versuch gestartet.",
            QuizStatus::Correct => "✅ Perfekt! Du hast die magische Zahl gefunden.",
            QuizStatus::Empty => "⚠️ Bitte gib eine Zahl ein.",
            QuizStatus::Almost => "Fast! Tipp: Die Antwort auf alles ist 42.",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct QuizFormProps {
    pub reduced_motion: bool,
}

/// Mini challenge. Attempts are neither stored nor sent anywhere.
#[function_component(QuizForm)]
pub fn quiz_form(props: &QuizFormProps) -> Html {
    let answer = use_state(String::new);
    let status = use_state(|| QuizStatus::NotTried);

    let oninput = {
        let answer = answer.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            answer.set(target.value());
        })
    };

    let onsubmit = {
        let answer = answer.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let result = QuizStatus::check(&answer);
            debug!("Quiz answer checked: {:?}", result);
            status.set(result);
        })
    };

    html! {
        <form class="glass quiz-form" onsubmit={onsubmit}>
            <div class="quiz-glow bg-aurora" aria-hidden="true"></div>
            <div class="quiz-body">
                <p class="quiz-question">
                    {"Mini-Challenge: Wie lautet die Antwort auf alle Fragen des Universums?"}
                </p>
                <Input
                    value={(*answer).clone()}
                    oninput={oninput}
                    placeholder="Deine Antwort"
                    inputmode="numeric"
                    aria_label="Antwort eingeben"
                />
                <Button kind={ButtonType::Submit} magnet=true class="quiz-submit">
                    {"Antwort prüfen"}
                </Button>
                <p class="quiz-status">{status.message()}</p>
                {
                    if !props.reduced_motion {
                        html! { <div class="quiz-divider"></div> }
                    } else {
                        html! {}
                    }
                }
                <p class="quiz-note">{"Diese Demo speichert keine Eingaben – probiere dich einfach aus."}</p>
            </div>
            <style>
                {r#"
                .quiz-form {
                    position: relative;
                    border-radius: 1.5rem;
                    padding: 1.5rem;
                }
                .quiz-glow {
                    position: absolute;
                    inset: -1rem;
                    border-radius: 30px;
                    opacity: 0.4;
                    filter: blur(48px);
                }
                .quiz-body {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .quiz-question, .quiz-status {
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.7);
                }
                .quiz-submit {
                    width: 100%;
                }
                .quiz-divider {
                    height: 1px;
                    width: 100%;
                    background: linear-gradient(to right, transparent, rgba(255, 255, 255, 0.4), transparent);
                }
                .quiz-note {
                    font-size: 0.75rem;
                    color: rgba(255, 255, 255, 0.4);
                }
                "#}
            </style>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_answer_is_accepted_with_whitespace() {
        for input in ["42", " 42 ", "\t42\n"] {
            assert_eq!(QuizStatus::check(input), QuizStatus::Correct, "{input:?}");
        }
    }

    #[test]
    fn empty_answer_warns() {
        assert_eq!(QuizStatus::check(""), QuizStatus::Empty);
        assert_eq!(QuizStatus::check("   "), QuizStatus::Empty);
        assert_eq!(QuizStatus::Empty.message(), "⚠️ Bitte gib eine Zahl ein.");
    }

    #[test]
    fn wrong_answer_gets_the_hint() {
        assert_eq!(QuizStatus::check("7"), QuizStatus::Almost);
        assert_eq!(QuizStatus::check("4 2"), QuizStatus::Almost);
        assert_eq!(
            QuizStatus::Almost.message(),
            "Fast! Tipp: Die Antwort auf alles ist 42."
        );
    }

    #[test]
    fn initial_status_reports_no_attempt() {
        assert_eq!(QuizStatus::NotTried.message(), "Noch keinen Versuch gestartet.");
    }
}
