
#[cfg(debug_assertions)]
pub fn payment_redirect_url() -> &'static str {
    "https://www.sandbox.paypal.com/checkoutnow"  // Sandbox checkout when running locally
}

#[cfg(not(debug_assertions))]
pub fn payment_redirect_url() -> &'static str {
    "https://www.paypal.com/checkoutnow"  // Production checkout
}

// Preference store keys
pub const CONSENT_KEY: &str = "cookieConsent";
pub const DARK_MODE_KEY: &str = "darkMode";

pub const SCROLL_THROTTLE_MS: u32 = 100;
pub const LOADING_DELAY_MS: u32 = 1_000;
pub const BADGE_DELAY_MS: u32 = 500;
pub const TOUR_LOAD_DELAY_MS: u32 = 1_000;
pub const PAYMENT_REDIRECT_DELAY_MS: u32 = 1_500;

pub const PROPERTY_NAME: &str = "Villa Paradiso";
pub const CONTACT_EMAIL: &str = "info@villaparadiso.it";
pub const PRIVACY_EMAIL: &str = "privacy@villaparadiso.it";
pub const ADDRESS_LINES: [&str; 3] = ["Via del Mare, 123", "Costa Azzurra, 12345", "Italia"];
pub const OFFICE_HOURS: &str = "Lun - Ven: 9:00 - 18:00";
