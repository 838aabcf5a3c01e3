use log::{info, warn};

use crate::config;
use crate::consent::{ConsentCategory, ConsentState};
use crate::storage::PreferenceStore;

/// Light/dark theme. The choice is only written to the store while the
/// visitor has opted into preference cookies.
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeController<S> {
    store: S,
    dark: bool,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn load(store: S, consent: &ConsentState) -> Self {
        let dark = if consent.allows(ConsentCategory::Preferences) {
            match store.get(config::DARK_MODE_KEY) {
                Ok(value) => value.as_deref() == Some("true"),
                Err(e) => {
                    warn!("Could not read theme preference: {}", e);
                    false
                }
            }
        } else {
            false
        };
        Self { store, dark }
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn toggle(&mut self, consent: &ConsentState) {
        self.dark = !self.dark;
        if !consent.allows(ConsentCategory::Preferences) {
            return;
        }
        let value = if self.dark { "true" } else { "false" };
        if let Err(e) = self.store.set(config::DARK_MODE_KEY, value) {
            warn!("Theme preference not saved: {}", e);
        }
    }

    /// Drops a stored theme once preference cookies are no longer allowed.
    /// The current session keeps its theme.
    pub fn apply_consent(&self, consent: &ConsentState) {
        if consent.allows(ConsentCategory::Preferences) {
            return;
        }
        match self.store.remove(config::DARK_MODE_KEY) {
            Ok(()) => info!("Preference cookies declined, stored theme cleared"),
            Err(e) => warn!("Could not clear theme preference: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn with_preferences() -> ConsentState {
        let mut consent = ConsentState::necessary_only();
        consent.toggle(ConsentCategory::Preferences);
        consent
    }

    #[test]
    fn dark_mode_survives_reload_with_preference_consent() {
        let store = MemoryStore::new();
        let consent = with_preferences();
        let mut theme = ThemeController::load(store.clone(), &consent);

        theme.toggle(&consent);
        assert!(theme.is_dark());

        let reloaded = ThemeController::load(store, &consent);
        assert!(reloaded.is_dark());
    }

    #[test]
    fn dark_mode_is_lost_without_preference_consent() {
        let store = MemoryStore::new();
        let mut theme = ThemeController::load(store.clone(), &ConsentState::necessary_only());

        theme.toggle(&ConsentState::necessary_only());
        assert!(theme.is_dark());
        assert!(store.is_empty());

        // Granting consent later does not resurrect the unsaved toggle.
        let reloaded = ThemeController::load(store, &ConsentState::all_accepted());
        assert!(!reloaded.is_dark());
    }

    #[test]
    fn toggling_back_to_light_is_persisted() {
        let store = MemoryStore::new();
        let consent = ConsentState::all_accepted();
        let mut theme = ThemeController::load(store.clone(), &consent);
        theme.toggle(&consent);
        theme.toggle(&consent);

        assert_eq!(store.get(config::DARK_MODE_KEY).unwrap().as_deref(), Some("false"));
        assert!(!ThemeController::load(store, &consent).is_dark());
    }

    #[test]
    fn revoking_preferences_clears_stored_theme() {
        let store = MemoryStore::new();
        let consent = with_preferences();
        let mut theme = ThemeController::load(store.clone(), &consent);
        theme.toggle(&consent);

        theme.apply_consent(&ConsentState::necessary_only());

        assert!(theme.is_dark());
        assert_eq!(store.get(config::DARK_MODE_KEY).unwrap(), None);
    }

    #[test]
    fn stored_theme_ignored_when_preferences_declined() {
        let store = MemoryStore::new();
        store.set(config::DARK_MODE_KEY, "true").unwrap();
        let theme = ThemeController::load(store, &ConsentState::necessary_only());
        assert!(!theme.is_dark());
    }
}
