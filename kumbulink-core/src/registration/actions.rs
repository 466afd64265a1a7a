use chrono::NaiveDate;

use crate::countries::CountryId;

#[derive(Debug, Clone, PartialEq)]
pub enum RegistrationAction {
    // Step control
    NextStep,
    PrevStep,
    Reset,

    // Personal data
    SetFullName(String),
    SetDateOfBirth(Option<NaiveDate>),
    SelectCountry(CountryId),
    SelectDocumentType(String),
    SetDocumentNumber(String),
    SetTermsAccepted(bool),
}

impl RegistrationAction {
    pub fn description(&self) -> &'static str {
        match self {
            RegistrationAction::NextStep => "Advancing to next step",
            RegistrationAction::PrevStep => "Going back to previous step",
            RegistrationAction::Reset => "Resetting registration",
            RegistrationAction::SetFullName(_) => "Updating full name",
            RegistrationAction::SetDateOfBirth(_) => "Updating date of birth",
            RegistrationAction::SelectCountry(_) => "Selecting country",
            RegistrationAction::SelectDocumentType(_) => "Selecting document type",
            RegistrationAction::SetDocumentNumber(_) => "Validating document number",
            RegistrationAction::SetTermsAccepted(_) => "Updating terms acceptance",
        }
    }
}
