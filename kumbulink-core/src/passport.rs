//! Passport-number format rules keyed by passport locale.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::countries::{Country, CountryId};

/// Anchored passport-number patterns, matched against the normalised number
/// (whitespace removed, upper-cased).
const PASSPORT_RULES: &[(&str, &str)] = &[
    ("AM", r"^[A-Z]{2}\d{7}$"),
    ("AR", r"^[A-Z]{3}\d{6}$"),
    ("AT", r"^[A-Z]\d{7}$"),
    ("AU", r"^[A-Z]\d{7}$"),
    ("BE", r"^[A-Z]{2}\d{6}$"),
    ("BG", r"^\d{9}$"),
    ("BR", r"^[A-Z]{2}\d{6}$"),
    ("CA", r"^(?:[A-Z]{2}\d{6}|[A-Z]\d{6}[A-Z]{2})$"),
    ("CH", r"^[A-Z]\d{7}$"),
    ("CZ", r"^\d{8}$"),
    ("DE", r"^[CFGHJKLMNPRTVWXYZ0-9]{9}$"),
    ("DK", r"^\d{9}$"),
    ("ES", r"^[A-Z0-9]{2}[A-Z0-9]?\d{6}$"),
    ("FI", r"^[A-Z]{2}\d{7}$"),
    ("FR", r"^\d{2}[A-Z]{2}\d{5}$"),
    ("GB", r"^\d{9}$"),
    ("GR", r"^[A-Z]{2}\d{7}$"),
    ("IE", r"^[A-Z0-9]{2}\d{7}$"),
    ("IN", r"^[A-Z]-?\d{7}$"),
    ("IT", r"^[A-Z0-9]{2}\d{7}$"),
    ("JP", r"^[A-Z]{2}\d{7}$"),
    ("LU", r"^[A-Z0-9]{8}$"),
    ("MX", r"^\d{10,11}$"),
    ("MZ", r"^(?:[A-Z]{2}\d{7}|\d{2}[A-Z]{2}\d{5})$"),
    ("NL", r"^[A-Z]{2}[A-Z0-9]{6}\d$"),
    ("PL", r"^[A-Z]{2}\d{7}$"),
    ("PT", r"^[A-Z]\d{6}$"),
    ("RO", r"^\d{8,9}$"),
    ("SE", r"^\d{8}$"),
    ("TR", r"^[A-Z]\d{8}$"),
    ("UA", r"^[A-Z]{2}\d{6}$"),
    ("US", r"^(?:\d{9}|[A-Z]\d{8})$"),
    ("ZA", r"^[TAMD]\d{8}$"),
];

fn rules() -> &'static HashMap<&'static str, Regex> {
    static RULES: OnceLock<HashMap<&'static str, Regex>> = OnceLock::new();
    RULES.get_or_init(|| {
        PASSPORT_RULES
            .iter()
            .filter_map(|(locale, pattern)| match Regex::new(pattern) {
                Ok(regex) => Some((*locale, regex)),
                Err(e) => {
                    log::error!("Invalid passport rule for {}: {}", locale, e);
                    None
                }
            })
            .collect()
    })
}

/// Whether `locale` has a bundled passport rule.
pub fn has_rule(locale: &str) -> bool {
    rules().contains_key(locale.to_ascii_uppercase().as_str())
}

/// Checks `document` against the rule for `locale`. Locales without a rule
/// never validate.
pub fn matches_locale(document: &str, locale: &str) -> bool {
    let normalized: String = document
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();

    if normalized.is_empty() {
        return false;
    }

    rules()
        .get(locale.to_ascii_uppercase().as_str())
        .map(|rule| rule.is_match(&normalized))
        .unwrap_or(false)
}

/// Validates a passport number for the given country.
pub fn is_valid_passport(document: &str, country: CountryId) -> bool {
    matches_locale(document, country.country().passport_locale)
}

/// Same as [`is_valid_passport`] for callers that only hold the display name.
/// Unknown names fail closed.
pub fn is_valid_passport_for_name(document: &str, country_name: &str) -> bool {
    match Country::by_name(country_name) {
        Some(country) => matches_locale(document, country.passport_locale),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countries;

    #[test]
    fn test_all_rules_compile() {
        assert_eq!(rules().len(), PASSPORT_RULES.len());
    }

    #[test]
    fn test_empty_document_is_never_valid() {
        for country in countries::all() {
            assert!(!is_valid_passport("", country.id), "{}", country.name);
            assert!(!is_valid_passport("   ", country.id), "{}", country.name);
            assert!(!is_valid_passport_for_name("", country.name));
        }
    }

    #[test]
    fn test_portuguese_passport() {
        assert!(is_valid_passport("N123456", CountryId::Portugal));
        assert!(is_valid_passport("n 123 456", CountryId::Portugal));
        assert!(!is_valid_passport("N1234567", CountryId::Portugal));
        assert!(!is_valid_passport("1234567", CountryId::Portugal));
    }

    #[test]
    fn test_brazilian_passport() {
        assert!(is_valid_passport("FZ123456", CountryId::Brazil));
        assert!(!is_valid_passport("F1234567", CountryId::Brazil));
    }

    #[test]
    fn test_mozambique_accepts_both_formats() {
        assert!(is_valid_passport("AB1234567", CountryId::Mozambique));
        assert!(is_valid_passport("12AB12345", CountryId::Mozambique));
        assert!(!is_valid_passport("AB1234567X", CountryId::Mozambique));
        assert!(!is_valid_passport("X12AB12345", CountryId::Mozambique));
    }

    #[test]
    fn test_us_and_uk() {
        assert!(is_valid_passport("123456789", CountryId::UnitedStates));
        assert!(is_valid_passport("A12345678", CountryId::UnitedStates));
        assert!(is_valid_passport("123456789", CountryId::UnitedKingdom));
        assert!(!is_valid_passport("A12345678", CountryId::UnitedKingdom));
    }

    #[test]
    fn test_locale_without_rule_fails_closed() {
        assert!(!has_rule("AO"));
        assert!(!is_valid_passport("N1234567", CountryId::Angola));
        assert!(!is_valid_passport("123456789", CountryId::CapeVerde));
    }

    #[test]
    fn test_unknown_country_name_fails_closed() {
        assert!(!is_valid_passport_for_name("N123456", "Atlantis"));
        assert!(is_valid_passport_for_name("N123456", "Portugal"));
    }
}
