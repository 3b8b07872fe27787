use log::Level;

/// Id of the element the whole page is mounted into.
pub const MOUNT_ELEMENT_ID: &str = "root";

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Elements carrying this selector follow the pointer.
pub const MAGNET_SELECTOR: &str = ".magnet";
pub const MAGNET_STRENGTH: f64 = 0.05;

pub const TILT_MAX_DEGREES: f64 = 3.0;
pub const TILT_PERSPECTIVE_PX: u32 = 800;

pub const GRID_SCROLL_FACTOR: f64 = 0.2;

pub const REVEAL_CARD_THRESHOLD: f64 = 0.4;
pub const REVEAL_STEP_THRESHOLD: f64 = 0.6;

/// Milliseconds between two liquid surface frames.
pub const LIQUID_TICK_MS: u32 = 16;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
