use yew::prelude::*;

use crate::consent::ConsentState;

/// Shared with every page through a `ContextProvider`.
#[derive(Clone, PartialEq)]
pub struct SiteContext {
    pub consent: ConsentState,
    pub dark_mode: bool,
    pub on_toggle_dark: Callback<()>,
    pub on_show_gdpr: Callback<()>,
    pub on_show_cookie_settings: Callback<()>,
}

impl SiteContext {
    pub fn theme_class(&self) -> &'static str {
        if self.dark_mode {
            "theme-dark"
        } else {
            "theme-light"
        }
    }
}
