//! Cookie consent: the per-category opt-in vector, its persistence and the
//! banner/settings panel it drives.

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::config;
use crate::storage::{PreferenceStore, StorageError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConsentCategory {
    Necessary,
    Preferences,
    Analytics,
    Marketing,
}

impl ConsentCategory {
    pub const ALL: [ConsentCategory; 4] = [
        ConsentCategory::Necessary,
        ConsentCategory::Preferences,
        ConsentCategory::Analytics,
        ConsentCategory::Marketing,
    ];

    pub fn id(self) -> &'static str {
        match self {
            ConsentCategory::Necessary => "necessary",
            ConsentCategory::Preferences => "preferences",
            ConsentCategory::Analytics => "analytics",
            ConsentCategory::Marketing => "marketing",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ConsentCategory::Necessary => "Necessari",
            ConsentCategory::Preferences => "Preferenze",
            ConsentCategory::Analytics => "Analitici",
            ConsentCategory::Marketing => "Marketing",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ConsentCategory::Necessary => "Cookie necessari per il funzionamento del sito",
            ConsentCategory::Preferences => {
                "Cookie per salvare le tue preferenze e migliorare la tua esperienza"
            }
            ConsentCategory::Analytics => {
                "Cookie che ci aiutano a comprendere come utilizzi il sito"
            }
            ConsentCategory::Marketing => "Cookie utilizzati per scopi pubblicitari e di marketing",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(self, ConsentCategory::Necessary)
    }
}

/// The four-boolean consent vector, serialized as
/// `{"necessary":true,"preferences":..,"analytics":..,"marketing":..}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsentState {
    necessary: bool,
    preferences: bool,
    analytics: bool,
    marketing: bool,
}

impl Default for ConsentState {
    fn default() -> Self {
        Self::necessary_only()
    }
}

impl ConsentState {
    pub fn necessary_only() -> Self {
        Self {
            necessary: true,
            preferences: false,
            analytics: false,
            marketing: false,
        }
    }

    pub fn all_accepted() -> Self {
        Self {
            necessary: true,
            preferences: true,
            analytics: true,
            marketing: true,
        }
    }

    pub fn allows(&self, category: ConsentCategory) -> bool {
        match category {
            ConsentCategory::Necessary => true,
            ConsentCategory::Preferences => self.preferences,
            ConsentCategory::Analytics => self.analytics,
            ConsentCategory::Marketing => self.marketing,
        }
    }

    /// Flips an optional category. Necessary cannot be changed.
    pub fn toggle(&mut self, category: ConsentCategory) {
        match category {
            ConsentCategory::Necessary => {}
            ConsentCategory::Preferences => self.preferences = !self.preferences,
            ConsentCategory::Analytics => self.analytics = !self.analytics,
            ConsentCategory::Marketing => self.marketing = !self.marketing,
        }
    }

    fn normalized(mut self) -> Self {
        self.necessary = true;
        self
    }

    pub fn to_json(&self) -> Result<String, StorageError> {
        serde_json::to_string(&self.normalized()).map_err(|e| StorageError::Serialize(e.to_string()))
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<ConsentState>(raw).map(ConsentState::normalized)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsentDecision {
    Undecided,
    NecessaryOnly,
    Customized,
    AllAccepted,
}

/// The single modal layer. At most one of these is on screen; the banner is
/// not a modal and only shows while this is `Closed`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Overlay {
    Closed,
    CookieSettings,
    GdprInfo,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConsentController<S> {
    store: S,
    state: ConsentState,
    committed: ConsentState,
    decided: bool,
    overlay: Overlay,
}

impl<S: PreferenceStore> ConsentController<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            state: ConsentState::default(),
            committed: ConsentState::default(),
            decided: false,
            overlay: Overlay::Closed,
        }
    }

    /// Restores a previous decision. A missing or unreadable record leaves the
    /// controller undecided so the banner is shown again.
    pub fn load_persisted(&mut self) {
        let raw = match self.store.get(config::CONSENT_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return,
            Err(e) => {
                warn!("Could not read cookie consent: {}", e);
                return;
            }
        };
        match ConsentState::from_json(&raw) {
            Ok(state) => {
                self.state = state;
                self.committed = state;
                self.decided = true;
            }
            Err(e) => warn!("Ignoring malformed cookie consent record: {}", e),
        }
    }

    pub fn state(&self) -> ConsentState {
        self.state
    }

    pub fn is_decided(&self) -> bool {
        self.decided
    }

    pub fn decision(&self) -> ConsentDecision {
        if !self.decided {
            return ConsentDecision::Undecided;
        }
        let c = self.committed;
        match (c.preferences, c.analytics, c.marketing) {
            (true, true, true) => ConsentDecision::AllAccepted,
            (false, false, false) => ConsentDecision::NecessaryOnly,
            _ => ConsentDecision::Customized,
        }
    }

    pub fn banner_visible(&self) -> bool {
        !self.decided
    }

    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    /// The banner stays out of sight while a modal covers the page.
    pub fn shows_banner(&self) -> bool {
        self.banner_visible() && self.overlay == Overlay::Closed
    }

    /// Not persisted until one of the accept/save actions runs.
    pub fn toggle_category(&mut self, category: ConsentCategory) {
        self.state.toggle(category);
    }

    pub fn accept_all(&mut self) {
        self.commit(ConsentState::all_accepted());
    }

    pub fn accept_necessary_only(&mut self) {
        self.commit(ConsentState::necessary_only());
    }

    pub fn save_preferences(&mut self) {
        self.commit(self.state);
    }

    pub fn open_settings(&mut self) {
        self.overlay = Overlay::CookieSettings;
    }

    /// Closes the settings modal without saving; unsaved toggles are dropped.
    pub fn close_settings(&mut self) {
        if self.overlay == Overlay::CookieSettings {
            self.state = self.committed;
            self.overlay = Overlay::Closed;
        }
    }

    /// Replaces whatever modal is open. Leaving the settings modal this way
    /// counts as cancelling it.
    pub fn show_gdpr_info(&mut self) {
        self.close_settings();
        self.overlay = Overlay::GdprInfo;
    }

    pub fn close_gdpr_info(&mut self) {
        if self.overlay == Overlay::GdprInfo {
            self.overlay = Overlay::Closed;
        }
    }

    fn commit(&mut self, state: ConsentState) {
        let state = state.normalized();
        self.state = state;
        self.committed = state;
        self.decided = true;
        self.overlay = Overlay::Closed;
        info!("Cookie consent recorded: {:?}", self.decision());
        if let Err(e) = self.persist() {
            warn!("Cookie consent kept for this session only: {}", e);
        }
    }

    fn persist(&self) -> Result<(), StorageError> {
        let raw = self.committed.to_json()?;
        self.store.set(config::CONSENT_KEY, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }
        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    fn fresh(store: &MemoryStore) -> ConsentController<MemoryStore> {
        let mut consent = ConsentController::new(store.clone());
        consent.load_persisted();
        consent
    }

    #[test]
    fn starts_undecided_with_only_necessary() {
        let consent = fresh(&MemoryStore::new());
        assert_eq!(consent.decision(), ConsentDecision::Undecided);
        assert!(consent.shows_banner());
        assert_eq!(consent.overlay(), Overlay::Closed);
        assert_eq!(consent.state(), ConsentState::necessary_only());
    }

    #[test]
    fn necessary_toggle_is_a_no_op_from_any_state() {
        let starts = [
            ConsentState::necessary_only(),
            ConsentState::all_accepted(),
            {
                let mut s = ConsentState::necessary_only();
                s.toggle(ConsentCategory::Analytics);
                s
            },
        ];
        for start in starts {
            let store = MemoryStore::new();
            store.set(config::CONSENT_KEY, &start.to_json().unwrap()).unwrap();
            let mut consent = fresh(&store);

            consent.toggle_category(ConsentCategory::Necessary);

            assert_eq!(consent.state(), start);
            assert!(consent.state().allows(ConsentCategory::Necessary));
        }
    }

    #[test]
    fn accept_all_survives_reload() {
        let store = MemoryStore::new();
        let mut consent = fresh(&store);
        consent.accept_all();
        assert!(!consent.shows_banner());
        assert_eq!(consent.overlay(), Overlay::Closed);

        let reloaded = fresh(&store);

        for category in ConsentCategory::ALL {
            assert!(reloaded.state().allows(category), "{} lost", category.id());
        }
        assert_eq!(reloaded.decision(), ConsentDecision::AllAccepted);
        assert!(!reloaded.banner_visible());
    }

    #[test]
    fn toggles_are_not_persisted_until_saved() {
        let store = MemoryStore::new();
        let mut consent = fresh(&store);
        consent.open_settings();
        consent.toggle_category(ConsentCategory::Preferences);

        assert!(consent.state().allows(ConsentCategory::Preferences));
        assert_eq!(store.get(config::CONSENT_KEY).unwrap(), None);

        consent.save_preferences();

        let reloaded = fresh(&store);
        assert!(reloaded.state().allows(ConsentCategory::Preferences));
        assert!(!reloaded.state().allows(ConsentCategory::Analytics));
        assert_eq!(reloaded.decision(), ConsentDecision::Customized);
    }

    #[test]
    fn closing_settings_discards_unsaved_toggles() {
        let store = MemoryStore::new();
        let mut consent = fresh(&store);
        consent.accept_necessary_only();
        consent.open_settings();
        assert_eq!(consent.overlay(), Overlay::CookieSettings);
        consent.toggle_category(ConsentCategory::Marketing);

        consent.close_settings();

        assert_eq!(consent.state(), ConsentState::necessary_only());
        assert_eq!(consent.overlay(), Overlay::Closed);
        assert!(!consent.shows_banner());
    }

    #[test]
    fn cancelling_settings_while_undecided_returns_to_banner() {
        let mut consent = fresh(&MemoryStore::new());
        consent.open_settings();
        consent.close_settings();
        assert!(consent.shows_banner());
    }

    #[test]
    fn only_one_modal_is_ever_open() {
        let mut consent = fresh(&MemoryStore::new());
        assert!(consent.shows_banner());

        consent.show_gdpr_info();
        assert_eq!(consent.overlay(), Overlay::GdprInfo);
        assert!(!consent.shows_banner());

        consent.open_settings();
        assert_eq!(consent.overlay(), Overlay::CookieSettings);

        consent.toggle_category(ConsentCategory::Analytics);
        consent.show_gdpr_info();
        assert_eq!(consent.overlay(), Overlay::GdprInfo);
        assert!(!consent.state().allows(ConsentCategory::Analytics));

        consent.close_gdpr_info();
        assert_eq!(consent.overlay(), Overlay::Closed);
        assert!(consent.shows_banner());
    }

    #[test]
    fn closing_the_wrong_modal_is_ignored() {
        let mut consent = fresh(&MemoryStore::new());
        consent.show_gdpr_info();
        consent.close_settings();
        assert_eq!(consent.overlay(), Overlay::GdprInfo);

        consent.open_settings();
        consent.toggle_category(ConsentCategory::Marketing);
        consent.close_gdpr_info();
        assert_eq!(consent.overlay(), Overlay::CookieSettings);
        assert!(consent.state().allows(ConsentCategory::Marketing));
    }

    #[test]
    fn saving_from_settings_closes_every_modal() {
        let mut consent = fresh(&MemoryStore::new());
        consent.open_settings();
        consent.save_preferences();
        assert_eq!(consent.overlay(), Overlay::Closed);
        assert!(!consent.shows_banner());
    }

    #[test]
    fn accept_necessary_overwrites_previous_choice() {
        let store = MemoryStore::new();
        let mut consent = fresh(&store);
        consent.accept_all();
        consent.accept_necessary_only();

        let reloaded = fresh(&store);
        assert_eq!(reloaded.decision(), ConsentDecision::NecessaryOnly);
        assert!(!reloaded.state().allows(ConsentCategory::Marketing));
    }

    #[test]
    fn stored_record_cannot_revoke_necessary() {
        let store = MemoryStore::new();
        store
            .set(
                config::CONSENT_KEY,
                r#"{"necessary":false,"preferences":true,"analytics":false,"marketing":false}"#,
            )
            .unwrap();

        let consent = fresh(&store);

        assert!(consent.state().allows(ConsentCategory::Necessary));
        assert_eq!(consent.state().to_json().unwrap(),
            r#"{"necessary":true,"preferences":true,"analytics":false,"marketing":false}"#);
    }

    #[test]
    fn malformed_record_keeps_banner_visible() {
        let store = MemoryStore::new();
        store.set(config::CONSENT_KEY, "yes please").unwrap();

        let consent = fresh(&store);

        assert!(consent.banner_visible());
        assert_eq!(consent.state(), ConsentState::necessary_only());
    }

    #[test]
    fn partial_record_fills_missing_categories() {
        let state = ConsentState::from_json(r#"{"analytics":true}"#).unwrap();
        assert!(state.allows(ConsentCategory::Analytics));
        assert!(!state.allows(ConsentCategory::Preferences));
        assert!(state.allows(ConsentCategory::Necessary));
    }

    #[test]
    fn storage_failure_still_applies_decision_in_memory() {
        let mut consent = ConsentController::new(BrokenStore);
        consent.load_persisted();
        assert!(consent.banner_visible());

        consent.accept_all();

        assert!(!consent.banner_visible());
        assert!(consent.state().allows(ConsentCategory::Analytics));
    }

    #[test]
    fn only_necessary_is_required() {
        let required: Vec<_> = ConsentCategory::ALL
            .iter()
            .filter(|c| c.is_required())
            .collect();
        assert_eq!(required, vec![&ConsentCategory::Necessary]);
    }
}
