use log::info;
use stylist::GlobalStyle;

/// Brand tokens, typography and the shared utility classes (`glass`,
/// `aurora-border`, `bg-aurora`, buttons, badges, cards, inputs, reveal).
const THEME: &str = r#"
:root {
    --brand-50: #f1f7ff;
    --brand-100: #e3efff;
    --brand-200: #bfd9ff;
    --brand-300: #9dc3ff;
    --brand-400: #6ea2ff;
    --brand-500: #3f82ff;
    --brand-600: #2d65db;
    --aurora: radial-gradient(40% 60% at 10% 10%, rgba(99, 102, 241, 0.35) 0%, transparent 60%),
        radial-gradient(40% 60% at 90% 20%, rgba(56, 189, 248, 0.35) 0%, transparent 60%),
        radial-gradient(40% 60% at 50% 80%, rgba(236, 72, 153, 0.30) 0%, transparent 60%);
}

* {
    box-sizing: border-box;
}

body {
    margin: 0;
    min-height: 100dvh;
    background: #020617;
    color: #ffffff;
    font-family: Inter, system-ui, sans-serif;
}

::selection {
    background: rgba(110, 162, 255, 0.3);
}

h1, h2, h3 {
    font-family: Outfit, Inter, system-ui, sans-serif;
    margin: 0;
}

a {
    color: inherit;
    text-decoration: none;
}

.bg-aurora {
    background-image: var(--aurora);
}

.glass {
    background: rgba(255, 255, 255, 0.06);
    border: 1px solid rgba(255, 255, 255, 0.1);
    backdrop-filter: blur(16px);
}

.aurora-border {
    box-shadow: 0 0 0 1px rgba(157, 195, 255, 0.35), 0 0 24px rgba(99, 102, 241, 0.25);
}

.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    white-space: nowrap;
    border: none;
    border-radius: 0.375rem;
    font-size: 0.875rem;
    font-weight: 500;
    color: #ffffff;
    cursor: pointer;
    transition: background-color 0.2s, transform 0.15s ease-out;
}

.btn-primary { background: var(--brand-500); }
.btn-primary:hover { background: var(--brand-400); }
.btn-secondary { background: rgba(255, 255, 255, 0.1); }
.btn-secondary:hover { background: rgba(255, 255, 255, 0.2); }
.btn-ghost { background: transparent; }
.btn-ghost:hover { background: rgba(255, 255, 255, 0.1); }
.btn-outline { background: transparent; border: 1px solid rgba(255, 255, 255, 0.2); }
.btn-md { height: 2.5rem; padding: 0.5rem 1rem; }
.btn-sm { height: 2.25rem; padding: 0 0.75rem; }
.btn-lg { height: 2.75rem; padding: 0 1.25rem; border-radius: 0.75rem; font-size: 1rem; }
.btn-icon { height: 2.5rem; width: 2.5rem; }

.badge {
    display: inline-flex;
    width: fit-content;
    align-items: center;
    border-radius: 9999px;
    padding: 0.25rem 0.75rem;
    font-size: 0.75rem;
    font-weight: 500;
}

.badge-solid { background: rgba(255, 255, 255, 0.1); color: rgba(255, 255, 255, 0.8); }
.badge-outline { border: 1px solid rgba(255, 255, 255, 0.2); background: rgba(255, 255, 255, 0.05); }

.card {
    border-radius: 0.75rem;
    border: 1px solid rgba(255, 255, 255, 0.1);
    background: rgba(255, 255, 255, 0.05);
}

.text-input {
    display: flex;
    height: 2.75rem;
    width: 100%;
    border-radius: 0.75rem;
    border: 1px solid rgba(255, 255, 255, 0.1);
    background: rgba(255, 255, 255, 0.1);
    padding: 0 1rem;
    font-size: 0.875rem;
    color: #ffffff;
    outline: none;
}

.text-input:focus-visible {
    border-color: var(--brand-400);
}

.separator {
    height: 1px;
    width: 100%;
    background: rgba(255, 255, 255, 0.1);
}

.reveal {
    opacity: 0;
    transform: translateY(24px);
    transition: opacity 0.6s ease-out, transform 0.6s ease-out;
}

.reveal.revealed {
    opacity: 1;
    transform: translateY(0);
}

.liquid-surface {
    display: block;
    width: 100%;
    height: 100%;
}

@keyframes rise-in {
    from { opacity: 0; transform: translateY(30px); }
    to { opacity: 1; transform: translateY(0); }
}

@keyframes glow {
    0%, 100% { opacity: 0.6; }
    50% { opacity: 1; }
}

@media (prefers-reduced-motion: reduce) {
    .reveal {
        opacity: 1;
        transform: none;
        transition: none;
    }
}
"#;

/// Registers the global theme stylesheet.
pub fn install() -> Result<GlobalStyle, stylist::Error> {
    let style = GlobalStyle::new(THEME)?;
    info!("Theme installed");
    Ok(style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_stylesheet_parses() {
        let parsed = THEME.parse::<stylist::ast::Sheet>();
        assert!(parsed.is_ok(), "{:?}", parsed.err());
    }
}
