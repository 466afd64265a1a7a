use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::countries::{Country, CountryId};
use crate::passport;

/// In-progress personal data for the registration flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrationDraft {
    pub full_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub selected_country: Option<CountryId>,
    pub selected_document_type: Option<String>,
    pub document_number: String,
    pub document_number_valid: bool,
    pub terms_accepted: bool,
}

impl RegistrationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_full_name(&mut self, name: impl Into<String>) {
        self.full_name = name.into();
    }

    pub fn set_date_of_birth(&mut self, date: Option<NaiveDate>) {
        self.date_of_birth = date;
    }

    /// Commits a country. Anything derived from the previous country is
    /// dropped, including the typed document number and its validity.
    pub fn select_country(&mut self, country: CountryId) {
        self.selected_country = Some(country);
        self.selected_document_type = None;
        self.document_number.clear();
        self.document_number_valid = false;
    }

    /// Picks a document type for the current country. Ignored when no country
    /// is selected or the type does not belong to it. Does not revalidate the
    /// document number.
    pub fn select_document_type(&mut self, document_type: &str) -> bool {
        match self.country() {
            Some(country) if country.accepts_document(document_type) => {
                self.selected_document_type = Some(document_type.to_string());
                true
            }
            _ => false,
        }
    }

    /// Stores the typed number and recomputes its validity against the
    /// selected country.
    pub fn set_document_number(&mut self, number: impl Into<String>) {
        self.document_number = number.into();
        self.document_number_valid = match self.selected_country {
            Some(country) => passport::is_valid_passport(&self.document_number, country),
            None => false,
        };
    }

    pub fn set_terms_accepted(&mut self, accepted: bool) {
        self.terms_accepted = accepted;
    }

    pub fn country(&self) -> Option<&'static Country> {
        self.selected_country.map(CountryId::country)
    }

    /// Options for the document-type picker, in table order. Empty until a
    /// country is chosen.
    pub fn document_options(&self) -> &'static [&'static str] {
        self.country().map(|c| c.document_types).unwrap_or(&[])
    }

    pub fn document_type_enabled(&self) -> bool {
        self.selected_country.is_some()
    }

    pub fn document_number_enabled(&self) -> bool {
        self.selected_document_type.is_some()
    }

    pub fn name_is_valid(&self) -> bool {
        is_full_name(&self.full_name)
    }

    pub fn date_of_birth_is_valid(&self, now: DateTime<Utc>) -> bool {
        match self.date_of_birth {
            Some(date) => is_before(date, now),
            None => false,
        }
    }

    /// Submit gate for the personal-data step.
    pub fn is_form_valid(&self, now: DateTime<Utc>) -> bool {
        self.name_is_valid()
            && self.date_of_birth_is_valid(now)
            && self.document_number_valid
            && self.terms_accepted
    }
}

/// At least three characters once trimmed, and a space separating a first
/// and last token.
pub fn is_full_name(name: &str) -> bool {
    let trimmed = name.trim();
    trimmed.chars().count() >= 3 && trimmed.contains(' ')
}

/// The date counts as the start of that day, UTC.
pub fn is_before(date: NaiveDate, now: DateTime<Utc>) -> bool {
    match date.and_hms_opt(0, 0, 0) {
        Some(start) => start.and_utc() < now,
        None => false,
    }
}
