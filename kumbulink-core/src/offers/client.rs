//! HTTP client for the offers collection of the content API.

use serde::de::DeserializeOwned;
use thiserror::Error;

use super::draft::NewOffer;
use super::model::{ExchangeOffer, OfferRecord};
use crate::config::ApiConfig;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Server error: {status}")]
    Status { status: u16, body: String },
    #[error("A session token is required for this request")]
    Unauthenticated,
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Clone)]
pub struct OffersClient {
    base_url: String,
    offers_path: String,
    token: Option<String>,
    client: reqwest::Client,
}

impl OffersClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            offers_path: normalize_path(&config.offers_path),
            token: None,
            client: build_http_client(config),
        }
    }

    /// Attaches the bearer token used for write requests.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn offers_url(&self) -> String {
        format!("{}{}", self.base_url, self.offers_path)
    }

    pub async fn list_offers(&self) -> Result<Vec<ExchangeOffer>> {
        let records: Vec<OfferRecord> = self.get_json(&self.offers_url()).await?;
        log::info!("✅ [HTTP] Loaded {} offers", records.len());
        Ok(records.into_iter().map(ExchangeOffer::from).collect())
    }

    pub async fn get_offer(&self, id: u64) -> Result<ExchangeOffer> {
        let url = format!("{}/{}", self.offers_url(), id);
        let record: OfferRecord = self.get_json(&url).await?;
        Ok(record.into())
    }

    pub async fn create_offer(&self, offer: &NewOffer) -> Result<ExchangeOffer> {
        let token = self.token.as_deref().ok_or(ApiError::Unauthenticated)?;
        let url = self.offers_url();
        log::info!("📤 [HTTP] POST {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(&offer.to_payload())
            .send()
            .await?;

        let record: OfferRecord = read_json(response).await?;
        log::info!("✅ [HTTP] Offer {} published", record.id);
        Ok(record.into())
    }

    async fn get_json<R: DeserializeOwned>(&self, url: &str) -> Result<R> {
        log::debug!("🌐 [HTTP] GET {}", url);
        let response = self.client.get(url).send().await?;
        read_json(response).await
    }
}

async fn read_json<R: DeserializeOwned>(response: reqwest::Response) -> Result<R> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        log::error!("❌ [HTTP] Request failed with status {}", status);
        return Err(ApiError::Status {
            status: status.as_u16(),
            body,
        });
    }

    Ok(serde_json::from_str(&body)?)
}

fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http_client(config: &ApiConfig) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(config.timeout_seconds))
        .connect_timeout(std::time::Duration::from_secs(config.connect_timeout_seconds))
        .build()
        .unwrap_or_else(|e| {
            log::warn!("Falling back to default HTTP client: {}", e);
            reqwest::Client::new()
        })
}

#[cfg(target_arch = "wasm32")]
fn build_http_client(_config: &ApiConfig) -> reqwest::Client {
    reqwest::Client::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_normalization() {
        assert_eq!(normalize_path("anuncios"), "/anuncios");
        assert_eq!(normalize_path("/anuncios/"), "/anuncios");
        assert_eq!(normalize_path(""), "");
    }

    #[test]
    fn test_offers_url_joins_cleanly() {
        let config = ApiConfig {
            base_url: "http://localhost:8888/wp-json/wp/v2/".to_string(),
            offers_path: "anuncios".to_string(),
            ..ApiConfig::default()
        };
        let client = OffersClient::new(&config);
        assert_eq!(client.offers_url(), "http://localhost:8888/wp-json/wp/v2/anuncios");
    }
}
