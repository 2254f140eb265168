use log::Level;

#[cfg(debug_assertions)]
pub const LOG_LEVEL: Level = Level::Debug;

#[cfg(not(debug_assertions))]
pub const LOG_LEVEL: Level = Level::Info;

/// Third-party hosted form target for lead submissions.
pub const FORM_ENDPOINT: &str = "https://formspree.io/f/mwpqryap";

/// Backing application id for the authenticated client config.
pub const APP_ID: &str = "6890ab344845fea351f981fa";

pub const SUPPORT_EMAIL: &str = "THERANOTE1@GMAIL.COM";
pub const SUPPORT_PHONE: &str = "050-7722240";
pub const PARTNERSHIP_PHONE: &str = "054-5360353";
pub const WHATSAPP_NUMBER: &str = "972545360353";

pub const BRAND: &str = "TheraNote";

// localStorage keys
pub const ACCESSIBILITY_KEY: &str = "accessibilitySettings";
pub const COOKIE_CONSENT_KEY: &str = "cookieConsent";

pub const COOKIE_BANNER_DELAY_MS: u32 = 1500;

pub const ZOOM_MIN: u16 = 80;
pub const ZOOM_MAX: u16 = 150;
pub const ZOOM_DEFAULT: u16 = 100;
pub const ZOOM_STEP: i16 = 10;

// Animated background tuning
pub const NETWORK_POINTS: usize = 80;
pub const NETWORK_LINK_DISTANCE: f64 = 160.0;
pub const NETWORK_POINT_SPEED: f64 = 0.5;
pub const NETWORK_POINT_RADIUS: f64 = 3.0;
pub const NETWORK_RESIZE_DEBOUNCE_MS: u32 = 100;

pub fn whatsapp_url() -> String {
    format!("https://wa.me/{}", WHATSAPP_NUMBER)
}

pub fn support_phones() -> String {
    format!("{} | {}", SUPPORT_PHONE, PARTNERSHIP_PHONE)
}
