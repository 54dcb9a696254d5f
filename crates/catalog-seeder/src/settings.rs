//! Seeder configuration loaded via OrthoConfig.

use std::time::Duration;

use ortho_config::OrthoConfig;
use reqwest::Url;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
const DEFAULT_PRODUCT_COUNT: usize = 1200;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 5;

/// Configuration values controlling a seeding run.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CATALOG_SEEDER")]
pub struct SeederSettings {
    /// Base URL of the catalogue REST API.
    pub base_url: Option<String>,
    /// Number of products to generate.
    pub product_count: Option<usize>,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: Option<u64>,
    /// Skip the confirmation prompt when products already exist.
    #[ortho_config(default = false)]
    pub assume_yes: bool,
    /// Seed for reproducible product generation.
    pub rng_seed: Option<u64>,
}

/// Errors raised when settings cannot describe a usable run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// The base URL could not be parsed.
    #[error("invalid base URL '{value}': {reason}")]
    InvalidBaseUrl {
        /// Configured value.
        value: String,
        /// Parser diagnostic.
        reason: String,
    },
    /// The base URL cannot carry a path, e.g. `mailto:`.
    #[error("base URL '{value}' cannot be used for HTTP requests")]
    UnsupportedBaseUrl {
        /// Configured value.
        value: String,
    },
    /// A zero request timeout would fail every call.
    #[error("request timeout must be at least one second")]
    ZeroTimeout,
}

impl SeederSettings {
    /// Return the configured base URL text, falling back to the default.
    #[must_use]
    pub fn base_url_text(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Parse the configured base URL.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when the value is not an absolute HTTP-style
    /// URL.
    pub fn base_url(&self) -> Result<Url, SettingsError> {
        let value = self.base_url_text();
        let url = Url::parse(value).map_err(|error| SettingsError::InvalidBaseUrl {
            value: value.to_owned(),
            reason: error.to_string(),
        })?;
        if url.cannot_be_a_base() {
            return Err(SettingsError::UnsupportedBaseUrl {
                value: value.to_owned(),
            });
        }
        Ok(url)
    }

    /// Return the number of products to create, falling back to the default.
    #[must_use]
    pub fn product_count(&self) -> usize {
        self.product_count.unwrap_or(DEFAULT_PRODUCT_COUNT)
    }

    /// Return the per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::ZeroTimeout`] when configured as zero.
    pub fn request_timeout(&self) -> Result<Duration, SettingsError> {
        match self
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
        {
            0 => Err(SettingsError::ZeroTimeout),
            secs => Ok(Duration::from_secs(secs)),
        }
    }
}
