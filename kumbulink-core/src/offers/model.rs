use serde::{Deserialize, Serialize};

/// Custom-field group attached to each offer post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferFields {
    pub sender: String,
    pub recipient: String,
    pub source_amount: String,
    pub target_amount: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax: Option<String>,
    pub bank: String,
    pub payment_key: String,
}

/// One post as returned by the content API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferRecord {
    pub id: u64,
    pub date: String,
    pub acf: OfferFields,
}

/// Flat, read-only offer as rendered by the list and detail pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeOffer {
    pub id: u64,
    pub date: String,
    pub sender: String,
    pub recipient: String,
    pub source_amount: String,
    pub target_amount: String,
    pub tax: Option<String>,
    pub bank: String,
    pub payment_key: String,
}

impl From<OfferRecord> for ExchangeOffer {
    fn from(record: OfferRecord) -> Self {
        let OfferRecord { id, date, acf } = record;
        Self {
            id,
            date,
            sender: acf.sender,
            recipient: acf.recipient,
            source_amount: acf.source_amount,
            target_amount: acf.target_amount,
            tax: acf.tax.filter(|t| !t.trim().is_empty()),
            bank: acf.bank,
            payment_key: acf.payment_key,
        }
    }
}

impl ExchangeOffer {
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }

        [&self.sender, &self.recipient, &self.bank]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }
}

/// Offers whose sender, recipient or bank contain `query`, case-insensitive.
pub fn filter_offers<'a>(offers: &'a [ExchangeOffer], query: &str) -> Vec<&'a ExchangeOffer> {
    offers.iter().filter(|offer| offer.matches(query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_json() -> serde_json::Value {
        serde_json::json!({
            "id": 17,
            "date": "2025-01-20T10:15:00",
            "title": { "rendered": "EUR para AOA" },
            "acf": {
                "sender": "EUR",
                "recipient": "AOA",
                "sourceAmount": "100",
                "targetAmount": "105000",
                "bank": "BAI",
                "paymentKey": "AO06 0040 0000 1234 5678 1012 3"
            }
        })
    }

    #[test]
    fn test_record_maps_verbatim() {
        let record: OfferRecord = serde_json::from_value(record_json()).unwrap();
        let offer = ExchangeOffer::from(record);

        assert_eq!(offer.id, 17);
        assert_eq!(offer.date, "2025-01-20T10:15:00");
        assert_eq!(offer.sender, "EUR");
        assert_eq!(offer.recipient, "AOA");
        assert_eq!(offer.source_amount, "100");
        assert_eq!(offer.target_amount, "105000");
        assert_eq!(offer.bank, "BAI");
        assert_eq!(offer.payment_key, "AO06 0040 0000 1234 5678 1012 3");
        assert_eq!(offer.tax, None);
    }

    #[test]
    fn test_tax_is_kept_when_present() {
        let mut json = record_json();
        json["acf"]["tax"] = serde_json::json!("2.5");
        let offer = ExchangeOffer::from(serde_json::from_value::<OfferRecord>(json).unwrap());
        assert_eq!(offer.tax.as_deref(), Some("2.5"));

        let mut json = record_json();
        json["acf"]["tax"] = serde_json::json!("");
        let offer = ExchangeOffer::from(serde_json::from_value::<OfferRecord>(json).unwrap());
        assert_eq!(offer.tax, None);
    }

    #[test]
    fn test_filter_by_currency_or_bank() {
        let base = ExchangeOffer::from(serde_json::from_value::<OfferRecord>(record_json()).unwrap());
        let other = ExchangeOffer {
            id: 18,
            sender: "BRL".to_string(),
            recipient: "EUR".to_string(),
            bank: "Nubank".to_string(),
            ..base.clone()
        };
        let offers = vec![base, other];

        assert_eq!(filter_offers(&offers, "").len(), 2);
        assert_eq!(filter_offers(&offers, "eur").len(), 2);
        assert_eq!(filter_offers(&offers, "aoa").len(), 1);
        assert_eq!(filter_offers(&offers, " nubank ")[0].id, 18);
        assert!(filter_offers(&offers, "USD").is_empty());
    }
}
