use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Location of the optional configuration file, relative to the working directory.
pub const CONFIG_FILE: &str = "kumbulink.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub offers_path: String,
    pub timeout_seconds: u64,
    pub connect_timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub name: String,
    pub base_path: String,
    pub token_storage_key: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub app: AppConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: "http://localhost:8888/kumbulink-server/wp-json/wp/v2".to_string(),
            offers_path: "/anuncios".to_string(),
            timeout_seconds: 30,
            connect_timeout_seconds: 10,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            name: "Kumbulink".to_string(),
            base_path: "/Kumbulink".to_string(),
            token_storage_key: "token".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file with environment variable overrides
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self> {
        let path = std::path::Path::new(CONFIG_FILE);
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", CONFIG_FILE))?;
            Self::from_toml_str(&content)?
        } else {
            log::warn!("⚠️ Could not find {}, using defaults", CONFIG_FILE);
            Config::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        log::info!("🔧 API base URL: {}", config.api.base_url);
        Ok(config)
    }

    /// The browser build has no file system or environment; it runs on defaults.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Result<Self> {
        Ok(Config::default())
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).with_context(|| format!("Failed to parse {}", CONFIG_FILE))
    }

    /// Apply overrides looked up through `var`, normally the process environment.
    pub fn apply_overrides<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = var("KUMBULINK_API_URL") {
            self.api.base_url = url;
        }
        if let Some(path) = var("KUMBULINK_OFFERS_PATH") {
            self.api.offers_path = path;
        }
        if let Some(base) = var("KUMBULINK_BASE_PATH") {
            self.app.base_path = base;
        }
        if let Some(timeout) = var("KUMBULINK_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => self.api.timeout_seconds = secs,
                Err(_) => log::warn!("Ignoring invalid KUMBULINK_TIMEOUT_SECS={}", timeout),
            }
        }
    }
}
