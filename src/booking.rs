//! Booking inquiry form: the draft reservation, its single validation rule,
//! and the hand-off to the payment provider.

use std::str::FromStr;

use chrono::NaiveDate;
use log::info;
use serde::Serialize;
use thiserror::Error;

pub const MIN_GUESTS: u8 = 1;
pub const MAX_GUESTS: u8 = 8;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BookingError {
    #[error("È necessario accettare la Privacy Policy per continuare.")]
    PrivacyConsentRequired,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BookingDraft {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub guests: u8,
    pub name: String,
    pub email: String,
    pub privacy_consent: bool,
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self {
            check_in: None,
            check_out: None,
            guests: MIN_GUESTS,
            name: String::new(),
            email: String::new(),
            privacy_consent: false,
        }
    }
}

impl BookingDraft {
    pub fn summary(&self) -> BookingSummary {
        BookingSummary {
            check_in: self.check_in,
            check_out: self.check_out,
            guests: self.guests,
        }
    }
}

/// Stay details without personal data, safe for analytics.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummary {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub guests: u8,
}

/// An accepted reservation intent, ready for the payment redirect.
#[derive(Clone, Debug, PartialEq)]
pub struct Handoff {
    pub draft: BookingDraft,
    pub summary: BookingSummary,
}

/// Form input names as they appear in the `name` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookingField {
    CheckIn,
    CheckOut,
    Guests,
    Name,
    Email,
    PrivacyConsent,
}

impl BookingField {
    pub fn name(self) -> &'static str {
        match self {
            BookingField::CheckIn => "checkIn",
            BookingField::CheckOut => "checkOut",
            BookingField::Guests => "guests",
            BookingField::Name => "name",
            BookingField::Email => "email",
            BookingField::PrivacyConsent => "privacyConsent",
        }
    }
}

impl FromStr for BookingField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "checkIn" => Ok(BookingField::CheckIn),
            "checkOut" => Ok(BookingField::CheckOut),
            "guests" => Ok(BookingField::Guests),
            "name" => Ok(BookingField::Name),
            "email" => Ok(BookingField::Email),
            "privacyConsent" => Ok(BookingField::PrivacyConsent),
            _ => Err(()),
        }
    }
}

/// Raw value of an input element: text for most inputs, the checked flag for
/// checkboxes.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

impl FieldValue {
    fn as_bool(&self) -> bool {
        match self {
            FieldValue::Checked(checked) => *checked,
            FieldValue::Text(text) => matches!(text.as_str(), "true" | "on"),
        }
    }

    fn into_text(self) -> String {
        match self {
            FieldValue::Text(text) => text,
            FieldValue::Checked(checked) => checked.to_string(),
        }
    }
}

// `<input type="date">` always reports ISO dates, or "" when cleared.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingFormController {
    draft: BookingDraft,
    open: bool,
}

impl BookingFormController {
    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Cancels the inquiry; the draft is discarded.
    pub fn close(&mut self) {
        self.open = false;
        self.draft = BookingDraft::default();
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Applies one input change. Unknown field names are ignored.
    pub fn update_field(&mut self, name: &str, value: FieldValue) {
        let Ok(field) = name.parse::<BookingField>() else {
            return;
        };
        match field {
            BookingField::CheckIn => self.draft.check_in = parse_date(&value.into_text()),
            BookingField::CheckOut => self.draft.check_out = parse_date(&value.into_text()),
            BookingField::Guests => {
                if let Ok(guests) = value.into_text().trim().parse::<i64>() {
                    self.draft.guests = guests.clamp(MIN_GUESTS as i64, MAX_GUESTS as i64) as u8;
                }
            }
            BookingField::Name => self.draft.name = value.into_text(),
            BookingField::Email => self.draft.email = value.into_text(),
            BookingField::PrivacyConsent => self.draft.privacy_consent = value.as_bool(),
        }
    }

    /// Accepts the draft for payment. Without privacy consent the draft and
    /// the open form are left untouched.
    pub fn submit(&mut self) -> Result<Handoff, BookingError> {
        if !self.draft.privacy_consent {
            return Err(BookingError::PrivacyConsentRequired);
        }
        let draft = std::mem::take(&mut self.draft);
        self.open = false;
        info!("Booking inquiry accepted for {} guest(s)", draft.guests);
        Ok(Handoff {
            summary: draft.summary(),
            draft,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> FieldValue {
        FieldValue::Text(value.to_string())
    }

    fn filled_form() -> BookingFormController {
        let mut form = BookingFormController::default();
        form.open();
        form.update_field("checkIn", text("2025-07-12"));
        form.update_field("checkOut", text("2025-07-19"));
        form.update_field("guests", text("4"));
        form.update_field("name", text("Giulia Rossi"));
        form.update_field("email", text("giulia@example.com"));
        form
    }

    #[test]
    fn fields_are_set_from_input_names() {
        let form = filled_form();
        let draft = form.draft();
        assert_eq!(draft.check_in, NaiveDate::from_ymd_opt(2025, 7, 12));
        assert_eq!(draft.check_out, NaiveDate::from_ymd_opt(2025, 7, 19));
        assert_eq!(draft.guests, 4);
        assert_eq!(draft.name, "Giulia Rossi");
        assert_eq!(draft.email, "giulia@example.com");
        assert!(!draft.privacy_consent);
    }

    #[test]
    fn submit_without_consent_keeps_draft_and_form() {
        let mut form = filled_form();
        let before = form.draft().clone();

        for _ in 0..3 {
            assert_eq!(form.submit(), Err(BookingError::PrivacyConsentRequired));
        }

        assert_eq!(form.draft(), &before);
        assert!(form.is_open());
    }

    #[test]
    fn submit_with_consent_hands_off_once_and_clears() {
        let mut form = filled_form();
        form.update_field("privacyConsent", FieldValue::Checked(true));

        let handoff = form.submit().unwrap();

        assert_eq!(handoff.draft.name, "Giulia Rossi");
        assert_eq!(handoff.summary.guests, 4);
        assert!(!form.is_open());
        assert_eq!(form.draft(), &BookingDraft::default());
        // Nothing left to hand off a second time.
        assert_eq!(form.submit(), Err(BookingError::PrivacyConsentRequired));
    }

    #[test]
    fn summary_omits_personal_data() {
        let mut form = filled_form();
        form.update_field("privacyConsent", FieldValue::Checked(true));
        let handoff = form.submit().unwrap();

        let json = serde_json::to_string(&handoff.summary).unwrap();

        assert_eq!(json, r#"{"checkIn":"2025-07-12","checkOut":"2025-07-19","guests":4}"#);
        assert!(!json.contains("Giulia"));
        assert!(!json.contains("example.com"));
    }

    #[test]
    fn checkbox_values_coerce_to_bool() {
        let mut form = BookingFormController::default();
        form.update_field("privacyConsent", text("on"));
        assert!(form.draft().privacy_consent);
        form.update_field("privacyConsent", FieldValue::Checked(false));
        assert!(!form.draft().privacy_consent);
    }

    #[test]
    fn guests_stay_in_range() {
        let mut form = BookingFormController::default();
        form.update_field("guests", text("12"));
        assert_eq!(form.draft().guests, MAX_GUESTS);
        form.update_field("guests", text("0"));
        assert_eq!(form.draft().guests, MIN_GUESTS);
        form.update_field("guests", text("many"));
        assert_eq!(form.draft().guests, MIN_GUESTS);
    }

    #[test]
    fn dates_are_not_validated_beyond_parsing() {
        let mut form = BookingFormController::default();
        // Check-out before check-in is accepted as-is.
        form.update_field("checkIn", text("2025-08-10"));
        form.update_field("checkOut", text("2025-08-01"));
        assert!(form.draft().check_out < form.draft().check_in);

        form.update_field("checkIn", text(""));
        assert_eq!(form.draft().check_in, None);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let mut form = filled_form();
        let before = form.draft().clone();
        form.update_field("phone", text("555"));
        assert_eq!(form.draft(), &before);
    }

    #[test]
    fn cancel_discards_draft() {
        let mut form = filled_form();
        form.toggle();
        assert!(!form.is_open());
        assert_eq!(form.draft(), &BookingDraft::default());
    }

    #[test]
    fn field_names_round_trip() {
        for field in [
            BookingField::CheckIn,
            BookingField::CheckOut,
            BookingField::Guests,
            BookingField::Name,
            BookingField::Email,
            BookingField::PrivacyConsent,
        ] {
            assert_eq!(field.name().parse::<BookingField>(), Ok(field));
        }
    }
}
