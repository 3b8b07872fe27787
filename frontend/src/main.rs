use log::{info, warn};
use yew::prelude::*;

mod config;
mod listener;
mod motion;
mod mount;
mod scroll;
mod theme;
mod effects;
mod components {
    pub mod accordion;
    pub mod badge;
    pub mod button;
    pub mod card;
    pub mod input;
    pub mod liquid;
    pub mod reveal;
    pub mod separator;
    pub mod tilt_card;
}
mod pages {
    pub mod content;
    pub mod landing;
}
mod widgets {
    pub mod console;
    pub mod quiz;
}

use pages::landing::Landing;
use scroll::ScrollProvider;

#[function_component]
fn App() -> Html {
    html! {
        <ScrollProvider>
            <Landing />
        </ScrollProvider>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");

    // The registered stylesheet lives in the global style manager for the rest of the page.
    if let Err(err) = theme::install() {
        warn!("Theme stylesheet rejected: {}", err);
    }

    match mount::root_element(config::MOUNT_ELEMENT_ID) {
        Ok(root) => {
            yew::Renderer::<App>::with_root(root).render();
        }
        Err(err) => {
            gloo_console::error!(format!("Cannot start CodeLumen: {}", err));
            wasm_bindgen::throw_str(&err.to_string());
        }
    }
}
