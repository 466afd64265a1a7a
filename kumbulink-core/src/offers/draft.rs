use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::model::OfferFields;

/// Form state for publishing a new offer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewOffer {
    pub sender: String,
    pub recipient: String,
    pub source_amount: String,
    pub target_amount: String,
    pub tax: String,
    pub bank: String,
    pub payment_key: String,
}

/// Parses an amount typed with either `,` or `.` as the decimal separator.
pub fn parse_amount(input: &str) -> Option<f64> {
    let normalized = input.trim().replace(' ', "").replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

impl NewOffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn amounts_are_valid(&self) -> bool {
        let positive = |s: &str| parse_amount(s).map(|v| v > 0.0).unwrap_or(false);
        positive(&self.source_amount) && positive(&self.target_amount)
    }

    pub fn tax_is_valid(&self) -> bool {
        self.tax.trim().is_empty() || parse_amount(&self.tax).map(|v| v >= 0.0).unwrap_or(false)
    }

    /// Publish gate for the creation form.
    pub fn is_complete(&self) -> bool {
        let filled = |s: &str| !s.trim().is_empty();
        filled(&self.sender)
            && filled(&self.recipient)
            && filled(&self.bank)
            && filled(&self.payment_key)
            && self.amounts_are_valid()
            && self.tax_is_valid()
    }

    pub fn title(&self) -> String {
        format!(
            "{} {} → {} {}",
            self.source_amount.trim(),
            self.sender.trim(),
            self.target_amount.trim(),
            self.recipient.trim()
        )
    }

    pub fn fields(&self) -> OfferFields {
        let tax = self.tax.trim();
        OfferFields {
            sender: self.sender.trim().to_string(),
            recipient: self.recipient.trim().to_string(),
            source_amount: self.source_amount.trim().to_string(),
            target_amount: self.target_amount.trim().to_string(),
            tax: (!tax.is_empty()).then(|| tax.to_string()),
            bank: self.bank.trim().to_string(),
            payment_key: self.payment_key.trim().to_string(),
        }
    }

    /// Request body for the content API.
    pub fn to_payload(&self) -> Value {
        json!({
            "status": "publish",
            "title": self.title(),
            "acf": self.fields(),
        })
    }
}
