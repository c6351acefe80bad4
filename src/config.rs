use log::Level;

pub const SITE_NAME: &str = "SkillMentorX";
pub const COMMUNITY_NAME: &str = "SkillMentorX Community";

// Contact handoff
pub const OWNER_NAME: &str = "Chetan";
pub const MESSAGING_BASE: &str = "https://wa.me";
pub const MESSAGING_RECIPIENT: &str = "917838177359";
pub const REDIRECT_STATUS: &str = "Redirecting to WhatsApp...";

// Timings in milliseconds
pub const STARTUP_NAVIGATION_DELAY_MS: u32 = 100;
pub const REDIRECT_DELAY_MS: u32 = 1500;
pub const RIPPLE_DURATION_MS: u32 = 600;
pub const BUTTON_LOADING_MS: u32 = 1000;

pub fn messaging_url() -> String {
    format!("{}/{}", MESSAGING_BASE, MESSAGING_RECIPIENT)
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
