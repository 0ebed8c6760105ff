//! Configuration management with TOML, environment variables, and CLI overrides.
//!
//! Credentials come from the `PAAPI_*` environment variables (or a config
//! file); they are validated once, up front, before any signed request is
//! issued.

use crate::paapi::error::PaapiError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Application configuration with layered loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// PA-API access key
    #[serde(default)]
    pub access_key: String,

    /// PA-API secret key
    #[serde(default)]
    pub secret_key: String,

    /// Associates partner tag, e.g. "yourtag-20"
    #[serde(default)]
    pub partner_tag: String,

    /// Marketplace identifier sent in the request payload
    #[serde(default = "default_marketplace")]
    pub marketplace: String,

    /// API host
    #[serde(default = "default_host")]
    pub host: String,

    /// AWS region for the credential scope
    #[serde(default = "default_region")]
    pub region: String,

    /// AWS service name for the credential scope
    #[serde(default = "default_service")]
    pub service: String,

    /// Search category index
    #[serde(default = "default_search_index")]
    pub search_index: String,

    /// Availability filter
    #[serde(default = "default_availability")]
    pub availability: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_s")]
    pub timeout_s: u64,

    /// Base delay between page requests in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Random jitter added to the delay (0 to this value)
    #[serde(default = "default_delay_jitter_ms")]
    pub delay_jitter_ms: u64,

    /// Output format for the search command
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_marketplace() -> String {
    "www.amazon.com".to_string()
}

fn default_host() -> String {
    "webservices.amazon.com".to_string()
}

fn default_region() -> String {
    "us-east-1".to_string()
}

fn default_service() -> String {
    "ProductAdvertisingAPI".to_string()
}

fn default_search_index() -> String {
    "Electronics".to_string()
}

fn default_availability() -> String {
    "Available".to_string()
}

fn default_timeout_s() -> u64 {
    20
}

fn default_delay_ms() -> u64 {
    1000
}

fn default_delay_jitter_ms() -> u64 {
    500
}

impl Default for Config {
    fn default() -> Self {
        Self {
            access_key: String::new(),
            secret_key: String::new(),
            partner_tag: String::new(),
            marketplace: default_marketplace(),
            host: default_host(),
            region: default_region(),
            service: default_service(),
            search_index: default_search_index(),
            availability: default_availability(),
            timeout_s: default_timeout_s(),
            delay_ms: default_delay_ms(),
            delay_jitter_ms: default_delay_jitter_ms(),
            format: OutputFormat::Table,
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        use anyhow::Context;

        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads configuration with fallback to default locations.
    pub fn load(explicit_path: Option<&Path>) -> anyhow::Result<Self> {
        // 1. Explicit path takes precedence
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        // 2. Try current directory
        let local_config = Path::new("config.toml");
        if local_config.exists() {
            debug!("Found config.toml in current directory");
            return Self::from_file(local_config);
        }

        // 3. Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("paapi-search").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        // 4. Return default config
        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Applies `PAAPI_*` environment variable overrides.
    pub fn with_env(mut self) -> Self {
        let vars: [(&str, &mut String); 8] = [
            ("PAAPI_ACCESS_KEY", &mut self.access_key),
            ("PAAPI_SECRET_KEY", &mut self.secret_key),
            ("PAAPI_PARTNER_TAG", &mut self.partner_tag),
            ("PAAPI_MARKETPLACE", &mut self.marketplace),
            ("PAAPI_HOST", &mut self.host),
            ("PAAPI_REGION", &mut self.region),
            ("PAAPI_SEARCH_INDEX", &mut self.search_index),
            ("PAAPI_AVAILABILITY", &mut self.availability),
        ];

        for (name, field) in vars {
            if let Ok(value) = std::env::var(name) {
                let value = value.trim();
                if !value.is_empty() {
                    *field = value.to_string();
                }
            }
        }

        self
    }

    /// Checks that every credential needed for signing is present.
    ///
    /// Called before any network activity; a missing credential is a
    /// configuration error, not a signing error.
    pub fn validate(&self) -> Result<(), PaapiError> {
        if self.access_key.is_empty() {
            return Err(PaapiError::MissingCredential("access_key"));
        }
        if self.secret_key.is_empty() {
            return Err(PaapiError::MissingCredential("secret_key"));
        }
        if self.partner_tag.is_empty() {
            return Err(PaapiError::MissingCredential("partner_tag"));
        }
        Ok(())
    }
}

/// Output format for search results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use: table, json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
