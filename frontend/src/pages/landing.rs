use chrono::Datelike;
use log::info;
use yew::prelude::*;

use crate::components::accordion::Accordion;
use crate::components::badge::{Badge, BadgeVariant};
use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::card::Card;
use crate::components::liquid::LiquidSurface;
use crate::components::reveal::{stagger_delay, Reveal};
use crate::components::tilt_card::TiltCard;
use crate::config;
use crate::effects::liquid::LiquidSettings;
use crate::effects::magnet::use_magnet;
use crate::motion::use_prefers_reduced_motion;
use crate::pages::content::{CURRICULUM, FAQ, SOCIAL_PROOF, STEPS};
use crate::scroll::use_scroll_position;
use crate::widgets::console::HeroConsole;
use crate::widgets::quiz::QuizForm;

#[derive(Properties, PartialEq)]
struct MotionProps {
    reduced_motion: bool,
}

#[function_component(AuroraBackdrop)]
fn aurora_backdrop(props: &MotionProps) -> Html {
    let scroll = use_scroll_position();

    html! {
        <div class="backdrop">
            <div class="backdrop-aurora bg-aurora" aria-hidden="true"></div>
            {
                if props.reduced_motion {
                    html! { <div class="backdrop-fill bg-aurora" aria-hidden="true"></div> }
                } else {
                    html! { <LiquidSurface class="backdrop-fill" /> }
                }
            }
            <div
                class={classes!("backdrop-grid", (!props.reduced_motion).then_some("glowing"))}
                style={format!("transform: {};", scroll.grid_transform())}
                aria-hidden="true"
            ></div>
        </div>
    }
}

#[function_component(Navigation)]
fn navigation() -> Html {
    html! {
        <nav class="top-nav">
            <div class="nav-logo">{"CodeLumen"}</div>
            <div class="nav-links">
                <a href="#ablauf">{"Wie es funktioniert"}</a>
                <a href="#curriculum">{"Curriculum"}</a>
                <a href="#faq">{"FAQ"}</a>
            </div>
            <div class="nav-actions">
                <Button variant={ButtonVariant::Ghost} size={ButtonSize::Small} class="nav-overview">{"Kursübersicht"}</Button>
                <Button size={ButtonSize::Small} magnet=true class="nav-start">{"Jetzt starten"}</Button>
            </div>
        </nav>
    }
}

#[function_component(Hero)]
fn hero(props: &MotionProps) -> Html {
    html! {
        <section class="hero">
            <div class="hero-copy">
                <Badge>{"CodeLumen — Dein erstes Licht im Code-Dschungel"}</Badge>
                <h1>{"Coding für Anfänger:innen,"}<br />{"hell beleuchtet."}</h1>
                <p class="hero-lead">
                    {"Lerne Schritt für Schritt mit interaktiven Mini-Lektionen, Live-Konsole und klaren Zielen. Erlebe greifbare Fortschritte innerhalb der ersten 10 Minuten."}
                </p>
                <div class="button-row">
                    <Button size={ButtonSize::Large} magnet=true>{"▶ Live ausprobieren"}</Button>
                    <Button size={ButtonSize::Large} variant={ButtonVariant::Secondary}>{"Mehr erfahren →"}</Button>
                </div>
                <div class="hero-steps">
                    { for STEPS.iter().map(|step| html! {
                        <Reveal key={step.title} threshold={config::REVEAL_STEP_THRESHOLD} class="glass hero-step">
                            <div class="step-icon">{step.icon}</div>
                            <div class="hero-step-title">{step.title}</div>
                            <p>{step.description}</p>
                        </Reveal>
                    }) }
                </div>
            </div>
            <HeroConsole reduced_motion={props.reduced_motion} />
        </section>
    }
}

#[function_component(InteractiveLiquidSection)]
fn interactive_liquid_section(props: &MotionProps) -> Html {
    let settings = LiquidSettings {
        cursor_size: 120.0,
        is_viscous: true,
        viscous: 28.0,
        auto_speed: 0.65,
        auto_intensity: 2.4,
        takeover_duration: 0.35,
        auto_resume_delay: 3500.0,
        auto_ramp_duration: 0.75,
        ..LiquidSettings::default()
    };

    html! {
        <section class="liquid-section">
            <div class="liquid-frame">
                {
                    if props.reduced_motion {
                        html! { <div class="liquid-fill bg-aurora" aria-hidden="true"></div> }
                    } else {
                        html! { <LiquidSurface class="liquid-fill" settings={settings} resolution={0.6} /> }
                    }
                }
                <div class="liquid-shade"></div>
                <div class="liquid-content">
                    <Badge variant={BadgeVariant::Outline} class="aurora-border">{"Interaktive Atmosphäre"}</Badge>
                    <h2>{"Eintauchen, staunen und mit dem Flow lernen."}</h2>
                    <p>
                        {"Die LiquidEther-Fläche reagiert dynamisch auf Mausbewegungen oder läuft automatisch in einer sanften Demo. Verwende sie als immersiven Hintergrund für deinen Hero-Bereich oder wichtige Call-to-Actions."}
                    </p>
                    <div class="button-row centered">
                        <Button size={ButtonSize::Large} magnet=true>{"Live Hintergrund aktivieren"}</Button>
                        <Button size={ButtonSize::Large} variant={ButtonVariant::Outline}>{"Einstellungen ansehen"}</Button>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(HowItWorks)]
fn how_it_works() -> Html {
    html! {
        <section id="ablauf" class="section">
            <div class="section-head">
                <div>
                    <Badge variant={BadgeVariant::Outline} class="aurora-border">{"So läuft's"}</Badge>
                    <h2>{"In drei Schritten zum ersten Projekt"}</h2>
                </div>
                <p>{"Kurze Lektionen, klare Ziele und ein Fokus auf sichtbare Ergebnisse – perfekt, wenn du neben Beruf oder Studium lernen möchtest."}</p>
            </div>
            <div class="three-columns">
                { for STEPS.iter().enumerate().map(|(index, step)| html! {
                    <Reveal
                        key={step.title}
                        threshold={config::REVEAL_CARD_THRESHOLD}
                        delay={stagger_delay(index)}
                        class="glass aurora-border step-card"
                    >
                        <div class="step-icon">{step.icon}</div>
                        <h3>{step.title}</h3>
                        <p>{step.description}</p>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}

#[function_component(LiveDemo)]
fn live_demo(props: &MotionProps) -> Html {
    html! {
        <section class="section live-demo">
            <div>
                <Badge variant={BadgeVariant::Outline}>{"Live-Demo"}</Badge>
                <h2>{"Probiere CodeLumen in 30 Sekunden aus"}</h2>
                <p>{"In jeder Einheit erwartet dich eine kleine Challenge. Tippe die richtige Antwort ein und erhalte direkt Rückmeldung – so lernst du nicht nur theoretisch, sondern praktisch."}</p>
                <ul>
                    <li>{"• Sofortiges Feedback nach jeder Eingabe."}</li>
                    <li>{"• Hinweise, wenn du einmal festhängst."}</li>
                    <li>{"• Erfolgserlebnisse, die motivieren dranzubleiben."}</li>
                </ul>
            </div>
            <Reveal threshold={config::REVEAL_STEP_THRESHOLD}>
                <QuizForm reduced_motion={props.reduced_motion} />
            </Reveal>
        </section>
    }
}

#[function_component(Curriculum)]
fn curriculum(props: &MotionProps) -> Html {
    html! {
        <section id="curriculum" class="section">
            <div class="section-head">
                <div>
                    <Badge variant={BadgeVariant::Outline}>{"Curriculum"}</Badge>
                    <h2>{"Lernpfad mit Tiefgang – ohne Überforderung"}</h2>
                </div>
                <p>{"Jede Sektion endet mit einem Mini-Projekt. Du lernst fokussiert, anwendungsorientiert und in klaren Etappen."}</p>
            </div>
            <div class="three-columns">
                { for CURRICULUM.iter().map(|module| html! {
                    <TiltCard
                        key={module.title}
                        title={module.title}
                        level={module.level}
                        enable_tilt={!props.reduced_motion}
                    />
                }) }
            </div>
        </section>
    }
}

#[function_component(SocialProof)]
fn social_proof() -> Html {
    html! {
        <section class="section">
            <div class="social-proof">
                <div class="social-proof-copy">
                    <Badge variant={BadgeVariant::Outline}>{"Social Proof"}</Badge>
                    <h2>{"Gemeinsam lernen, gemeinsam wachsen"}</h2>
                    <p>{"CodeLumen verbindet motivierte Beginner:innen mit Mentor:innen und einer aktiven Community. Deine Fragen bleiben nicht unbeantwortet – versprochen."}</p>
                </div>
                <div class="stats">
                    { for SOCIAL_PROOF.iter().map(|stat| html! {
                        <Card key={stat.label} class="glass aurora-border stat">
                            <div class="step-icon">{stat.icon}</div>
                            <div class="stat-value">{stat.value}</div>
                            <p class="stat-label">{stat.label}</p>
                        </Card>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Faq)]
fn faq() -> Html {
    html! {
        <section id="faq" class="section narrow">
            <div class="faq-head">
                <Badge variant={BadgeVariant::Outline}>{"FAQ"}</Badge>
                <h2>{"Antworten auf häufige Fragen"}</h2>
                <p>{"Transparenz ist uns wichtig. Hier findest du die Antworten, die Beginner:innen am häufigsten stellen."}</p>
            </div>
            <div class="faq-box">
                <Accordion entries={&FAQ[..]} />
            </div>
        </section>
    }
}

#[function_component(CallToAction)]
fn call_to_action() -> Html {
    html! {
        <section class="section narrow">
            <div class="cta">
                <div class="cta-glow bg-aurora" aria-hidden="true"></div>
                <div class="cta-body">
                    <h2>{"Bereit, dein erstes Licht anzuknipsen?"}</h2>
                    <p>{"Sichere dir deinen Platz und starte mit einem kostenlosen Onboarding inklusive persönlichem Lernfahrplan."}</p>
                    <div class="button-row centered">
                        <Button size={ButtonSize::Large} magnet=true>{"Kostenlos starten"}</Button>
                        <Button size={ButtonSize::Large} variant={ButtonVariant::Secondary}>{"Beratungsgespräch buchen →"}</Button>
                    </div>
                </div>
            </div>
        </section>
    }
}

pub fn copyright(year: i32) -> String {
    format!("© {} CodeLumen. Alle Rechte vorbehalten.", year)
}

#[function_component(Footer)]
fn footer() -> Html {
    let year = chrono::Local::now().year();
    let to_top = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    html! {
        <footer class="footer">
            <p>{copyright(year)}</p>
            <div class="footer-links">
                <a href="#">{"Impressum"}</a>
                <a href="#">{"Datenschutz"}</a>
                <Button variant={ButtonVariant::Ghost} size={ButtonSize::Icon} class="footer-top" onclick={to_top}>{"↑"}</Button>
            </div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let reduced_motion = use_prefers_reduced_motion();
    use_magnet(!reduced_motion);

    {
        use_effect_with_deps(
            move |reduced| {
                info!("Rendering landing page (reduced motion: {})", reduced);
                || ()
            },
            reduced_motion,
        );
    }

    html! {
        <div class="landing-page">
            <AuroraBackdrop reduced_motion={reduced_motion} />
            <header class="layer">
                <Navigation />
                <Hero reduced_motion={reduced_motion} />
            </header>
            <main class="layer sections">
                <InteractiveLiquidSection reduced_motion={reduced_motion} />
                <HowItWorks />
                <LiveDemo reduced_motion={reduced_motion} />
                <Curriculum reduced_motion={reduced_motion} />
                <SocialProof />
                <Faq />
                <CallToAction />
            </main>
            <Footer />
            <style>
                {r#"
                .landing-page {
                    min-height: 100dvh;
                }
                .layer {
                    position: relative;
                    z-index: 10;
                }
                .sections {
                    display: flex;
                    flex-direction: column;
                    gap: 6rem;
                    padding-bottom: 6rem;
                }
                .backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: -10;
                    overflow: hidden;
                }
                .backdrop-aurora {
                    position: absolute;
                    inset: 0;
                    opacity: 0.7;
                    filter: blur(64px);
                }
                .backdrop-fill {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    pointer-events: none;
                }
                .backdrop-grid {
                    position: absolute;
                    inset: 0;
                    opacity: 0.08;
                    background-image: linear-gradient(rgba(255, 255, 255, 0.15) 1px, transparent 1px),
                        linear-gradient(90deg, rgba(255, 255, 255, 0.15) 1px, transparent 1px);
                    background-size: 40px 40px;
                    transform-origin: center top;
                }
                .backdrop-grid.glowing {
                    animation: glow 8s ease-in-out infinite;
                }
                .top-nav {
                    margin: 0 auto;
                    display: flex;
                    max-width: 72rem;
                    align-items: center;
                    justify-content: space-between;
                    padding: 1.25rem 1rem;
                }
                .nav-logo {
                    font-family: Outfit, Inter, sans-serif;
                    font-size: 1.25rem;
                    letter-spacing: 0.025em;
                }
                .nav-links {
                    display: none;
                    gap: 0.75rem;
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.7);
                }
                .nav-links a:hover, .footer-links a:hover {
                    color: #ffffff;
                }
                .nav-actions, .button-row {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    gap: 0.75rem;
                }
                .button-row.centered {
                    justify-content: center;
                }
                .nav-overview {
                    display: none;
                }
                .nav-start {
                    border-radius: 0.75rem;
                    padding: 0.5rem 1.25rem;
                }
                .hero {
                    margin: 0 auto;
                    display: grid;
                    max-width: 72rem;
                    grid-template-columns: 1fr;
                    align-items: center;
                    gap: 3rem;
                    padding: 2rem 1rem 4rem;
                }
                .hero-copy {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .hero h1 {
                    font-size: 2.25rem;
                    line-height: 1.25;
                }
                .hero-lead {
                    font-size: 1.125rem;
                    color: rgba(255, 255, 255, 0.8);
                }
                .hero-steps, .three-columns, .stats {
                    display: grid;
                    gap: 1rem;
                }
                .hero-steps {
                    padding-top: 1.5rem;
                }
                .hero-step {
                    border-radius: 1rem;
                    padding: 1rem;
                }
                .hero-step p, .step-card p {
                    margin-top: 0.5rem;
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.7);
                }
                .hero-step-title {
                    font-weight: 500;
                }
                .step-icon {
                    margin-bottom: 0.75rem;
                    color: var(--brand-300);
                }
                .liquid-frame {
                    position: relative;
                    margin: 0 auto;
                    height: 600px;
                    max-width: 80rem;
                    overflow: hidden;
                    border-radius: 40px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                }
                .liquid-fill {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                }
                .liquid-shade {
                    pointer-events: none;
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, rgba(2, 6, 23, 0.2), rgba(2, 6, 23, 0.1), rgba(2, 6, 23, 0.7));
                }
                .liquid-content {
                    position: relative;
                    z-index: 10;
                    display: flex;
                    height: 100%;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1.5rem;
                    padding: 0 1.5rem;
                    text-align: center;
                    pointer-events: none;
                }
                .liquid-content .btn {
                    pointer-events: auto;
                }
                .liquid-content h2 {
                    max-width: 48rem;
                    font-size: 1.875rem;
                }
                .liquid-content p {
                    max-width: 42rem;
                    color: rgba(255, 255, 255, 0.8);
                }
                .section {
                    margin: 0 auto;
                    width: 100%;
                    max-width: 72rem;
                    padding: 0 1rem;
                }
                .section.narrow {
                    max-width: 56rem;
                }
                .section h2 {
                    margin-top: 1rem;
                    font-size: 1.875rem;
                }
                .section-head {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    margin-bottom: 2.5rem;
                }
                .section-head p, .live-demo p, .social-proof-copy p {
                    max-width: 36rem;
                    color: rgba(255, 255, 255, 0.7);
                }
                .step-card {
                    border-radius: 1.5rem;
                    padding: 1.5rem;
                }
                .live-demo {
                    display: grid;
                    gap: 2.5rem;
                }
                .live-demo ul {
                    margin-top: 1.5rem;
                    padding: 0;
                    list-style: none;
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.6);
                }
                .tilt-card {
                    position: relative;
                    overflow: hidden;
                    border-radius: 1.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.05);
                    padding: 1.5rem;
                    transition: transform 0.15s ease-out;
                    will-change: transform;
                }
                .tilt-card-glow {
                    position: absolute;
                    inset: 0;
                    opacity: 0.2;
                }
                .tilt-card-body {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .tilt-card h3 {
                    font-size: 1.5rem;
                }
                .tilt-card-level {
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.6);
                }
                .tilt-card-progress {
                    height: 0.25rem;
                    width: 6rem;
                    overflow: hidden;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.1);
                }
                .tilt-card-progress div {
                    height: 100%;
                    width: 66%;
                    background: var(--brand-400);
                }
                .tilt-card-note {
                    font-size: 0.75rem;
                    color: rgba(255, 255, 255, 0.5);
                }
                .social-proof {
                    display: grid;
                    gap: 1.5rem;
                    border-radius: 1.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.05);
                    padding: 2rem;
                }
                .stat {
                    border-radius: 1rem;
                    padding: 1.25rem;
                    text-align: center;
                }
                .stat-value {
                    font-size: 1.5rem;
                    font-weight: 600;
                }
                .stat-label {
                    margin-top: 0.25rem;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.25em;
                    color: rgba(255, 255, 255, 0.5);
                }
                .faq-head {
                    text-align: center;
                }
                .faq-head p {
                    margin: 0.75rem auto 0;
                    max-width: 42rem;
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.7);
                }
                .faq-box {
                    margin-top: 2.5rem;
                    border-radius: 1.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.05);
                    padding: 1.5rem;
                }
                .accordion-item {
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                }
                .accordion-trigger {
                    display: flex;
                    width: 100%;
                    align-items: center;
                    justify-content: space-between;
                    padding: 1rem 0;
                    background: none;
                    border: none;
                    color: #ffffff;
                    font-size: 1rem;
                    font-weight: 500;
                    text-align: left;
                    cursor: pointer;
                }
                .accordion-trigger:hover {
                    color: var(--brand-200);
                }
                .accordion-chevron {
                    transition: transform 0.2s;
                }
                .accordion-item.open .accordion-chevron {
                    transform: rotate(180deg);
                }
                .accordion-content {
                    padding-bottom: 1rem;
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.7);
                }
                .cta {
                    position: relative;
                    overflow: hidden;
                    border-radius: 40px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.05);
                    padding: 2.5rem;
                    text-align: center;
                }
                .cta-glow {
                    position: absolute;
                    inset: -2.5rem;
                    opacity: 0.3;
                    filter: blur(64px);
                }
                .cta-body {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .cta-body p {
                    margin: 0 auto;
                    max-width: 42rem;
                    color: rgba(255, 255, 255, 0.7);
                }
                .footer {
                    margin: 4rem auto 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    max-width: 72rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    padding: 2rem 1rem 3rem;
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.5);
                }
                .footer-links {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .footer-top {
                    margin-left: auto;
                }
                @media (min-width: 768px) {
                    .nav-links, .nav-overview {
                        display: inline-flex;
                    }
                    .hero {
                        grid-template-columns: 1fr 1fr;
                    }
                    .hero h1 {
                        font-size: 3.75rem;
                    }
                    .hero-steps, .stats {
                        grid-template-columns: repeat(3, 1fr);
                    }
                    .three-columns {
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                    }
                    .section h2, .liquid-content h2 {
                        font-size: 2.25rem;
                    }
                    .section-head, .footer {
                        flex-direction: row;
                        align-items: flex-end;
                        justify-content: space-between;
                    }
                    .live-demo, .social-proof {
                        grid-template-columns: 1.2fr 1fr;
                        align-items: center;
                    }
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
    fn copyright_carries_the_year() {
        assert_eq!(copyright(2026), "© 2026 CodeLumen. Alle Rechte vorbehalten.");
    }
}
