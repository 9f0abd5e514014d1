use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Router transitions are logged at debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const CONTACT_EMAIL: &str = "hello@logiciancreatives.com";

// Simulated submit round trips, there is no mail backend.
pub const CONTACT_SUBMIT_DELAY_MS: u32 = 2_000;
pub const CONTACT_RESET_DELAY_MS: u32 = 5_000;
pub const NEWSLETTER_SUBMIT_DELAY_MS: u32 = 1_500;
pub const NEWSLETTER_RESET_DELAY_MS: u32 = 4_000;

// Lets the home page mount before scrolling to one of its sections.
pub const ANCHOR_SCROLL_DELAY_MS: u32 = 100;

pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

pub const TESTIMONIAL_ROTATE_MS: u32 = 6_000;
