use serde::{Deserialize, Serialize};

/// Countries accepted by the registration flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CountryId {
    Angola,
    Brazil,
    CapeVerde,
    France,
    Germany,
    Mozambique,
    Portugal,
    SouthAfrica,
    Spain,
    UnitedKingdom,
    UnitedStates,
}

/// One row of the bundled country reference table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    pub id: CountryId,
    pub name: &'static str,
    pub iso_code: &'static str,
    pub passport_locale: &'static str,
    pub document_types: &'static [&'static str],
}

const PASSPORT: &str = "Passaporte";
const NATIONAL_ID: &str = "Bilhete de Identidade";
const RESIDENCE_PERMIT: &str = "Autorização de Residência";

static COUNTRIES: [Country; 11] = [
    Country {
        id: CountryId::Angola,
        name: "Angola",
        iso_code: "AO",
        passport_locale: "AO",
        document_types: &[PASSPORT, NATIONAL_ID],
    },
    Country {
        id: CountryId::Brazil,
        name: "Brasil",
        iso_code: "BR",
        passport_locale: "BR",
        document_types: &[PASSPORT, "RG", "CNH"],
    },
    Country {
        id: CountryId::CapeVerde,
        name: "Cabo Verde",
        iso_code: "CV",
        passport_locale: "CV",
        document_types: &[PASSPORT, NATIONAL_ID],
    },
    Country {
        id: CountryId::France,
        name: "França",
        iso_code: "FR",
        passport_locale: "FR",
        document_types: &[PASSPORT, "Carte Nationale d'Identité", RESIDENCE_PERMIT],
    },
    Country {
        id: CountryId::Germany,
        name: "Alemanha",
        iso_code: "DE",
        passport_locale: "DE",
        document_types: &[PASSPORT, "Personalausweis", RESIDENCE_PERMIT],
    },
    Country {
        id: CountryId::Mozambique,
        name: "Moçambique",
        iso_code: "MZ",
        passport_locale: "MZ",
        document_types: &[PASSPORT, NATIONAL_ID],
    },
    Country {
        id: CountryId::Portugal,
        name: "Portugal",
        iso_code: "PT",
        passport_locale: "PT",
        document_types: &[PASSPORT, "Cartão de Cidadão", "Título de Residência"],
    },
    Country {
        id: CountryId::SouthAfrica,
        name: "África do Sul",
        iso_code: "ZA",
        passport_locale: "ZA",
        document_types: &[PASSPORT, "Smart ID Card"],
    },
    Country {
        id: CountryId::Spain,
        name: "Espanha",
        iso_code: "ES",
        passport_locale: "ES",
        document_types: &[PASSPORT, "DNI", "NIE"],
    },
    Country {
        id: CountryId::UnitedKingdom,
        name: "Reino Unido",
        iso_code: "GB",
        passport_locale: "GB",
        document_types: &[PASSPORT, "Biometric Residence Permit"],
    },
    Country {
        id: CountryId::UnitedStates,
        name: "Estados Unidos",
        iso_code: "US",
        passport_locale: "US",
        document_types: &[PASSPORT, "Passport Card"],
    },
];

/// The whole table, in `CountryId` variant order. The dropdown lists it as is.
pub fn all() -> &'static [Country] {
    &COUNTRIES
}

impl CountryId {
    pub fn country(self) -> &'static Country {
        // Table rows are in variant order.
        &COUNTRIES[self as usize]
    }
}

impl Country {
    /// Display-name lookup for callers that only hold a name.
    pub fn by_name(name: &str) -> Option<&'static Country> {
        COUNTRIES.iter().find(|c| c.name == name)
    }

    pub fn by_iso_code(code: &str) -> Option<&'static Country> {
        COUNTRIES
            .iter()
            .find(|c| c.iso_code.eq_ignore_ascii_case(code))
    }

    pub fn accepts_document(&self, document_type: &str) -> bool {
        self.document_types.contains(&document_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_id_maps_to_its_own_row() {
        for country in all() {
            assert_eq!(country.id.country(), country);
        }
    }

    #[test]
    fn test_rows_follow_variant_order() {
        for (index, country) in all().iter().enumerate() {
            assert_eq!(country.id as usize, index);
        }
        assert_eq!(all().first().map(|c| c.id), Some(CountryId::Angola));
        assert_eq!(all().last().map(|c| c.id), Some(CountryId::UnitedStates));
    }

    #[test]
    fn test_names_and_codes_are_unique() {
        let names: HashSet<_> = all().iter().map(|c| c.name).collect();
        let codes: HashSet<_> = all().iter().map(|c| c.iso_code).collect();
        assert_eq!(names.len(), all().len());
        assert_eq!(codes.len(), all().len());
    }

    #[test]
    fn test_every_country_offers_a_passport() {
        for country in all() {
            assert_eq!(country.document_types.first(), Some(&"Passaporte"));
        }
    }

    #[test]
    fn test_lookup_by_name_and_code() {
        assert_eq!(Country::by_name("Portugal").map(|c| c.id), Some(CountryId::Portugal));
        assert_eq!(Country::by_iso_code("br").map(|c| c.id), Some(CountryId::Brazil));
        assert!(Country::by_name("Atlantis").is_none());
    }
}
