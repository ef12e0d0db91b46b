//! Configuration management and validation
//!
//! Runtime configuration for the snapshot location and the external API
//! endpoints. Defaults match the public services; the TfL credential pair
//! can be overridden through the TFL_APP_ID / TFL_APP_KEY environment
//! variables.

use crate::app::services::transport_api::{
    TflClient, TflConfig, TransportApiClient, TransportApiConfig,
};
use crate::constants::{
    DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_SNAPSHOT_FILE_NAME, DEFAULT_TFL_APP_ID,
    DEFAULT_TFL_APP_KEY, TFL_BASE_URL, TRANSPORT_API_BASE_URL,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// TfL endpoint and credential settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TflSettings {
    pub base_url: String,
    pub app_id: String,
    pub app_key: String,
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Where parse runs persist their snapshot and lookups read it back
    pub snapshot_path: PathBuf,

    /// Base URL for the transportapi.com train endpoints
    pub transport_api_base_url: String,

    /// TfL endpoint and credentials
    pub tfl: TflSettings,

    /// HTTP request timeout in seconds, shared by both clients
    pub http_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot_path: default_snapshot_path(),
            transport_api_base_url: TRANSPORT_API_BASE_URL.to_string(),
            tfl: TflSettings {
                base_url: TFL_BASE_URL.to_string(),
                app_id: DEFAULT_TFL_APP_ID.to_string(),
                app_key: DEFAULT_TFL_APP_KEY.to_string(),
            },
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

/// Default snapshot location under the user cache directory
fn default_snapshot_path() -> PathBuf {
    dirs::cache_dir()
        .map(|dir| dir.join("msn-processor").join(DEFAULT_SNAPSHOT_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SNAPSHOT_FILE_NAME))
}

impl Config {
    /// Build a configuration from defaults plus environment overrides
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(app_id) = std::env::var("TFL_APP_ID") {
            debug!("Using TfL app_id from environment");
            config.tfl.app_id = app_id;
        }
        if let Ok(app_key) = std::env::var("TFL_APP_KEY") {
            debug!("Using TfL app_key from environment");
            config.tfl.app_key = app_key;
        }

        config
    }

    /// Validate configuration values for consistency
    pub fn validate(&self) -> Result<()> {
        if self.http_timeout_secs == 0 {
            return Err(Error::configuration(
                "HTTP timeout must be greater than 0 seconds",
            ));
        }

        if self.tfl.app_id.is_empty() || self.tfl.app_key.is_empty() {
            return Err(Error::configuration(
                "TfL app_id and app_key must not be empty",
            ));
        }

        Ok(())
    }

    /// Build a transportapi.com client from this configuration
    pub fn transport_api_client(&self) -> Result<TransportApiClient> {
        TransportApiClient::new(
            TransportApiConfig::new()
                .with_base_url(self.transport_api_base_url.clone())
                .with_timeout(self.http_timeout_secs),
        )
    }

    /// Build a TfL client from this configuration
    pub fn tfl_client(&self) -> Result<TflClient> {
        TflClient::new(
            TflConfig::new(self.tfl.app_id.clone(), self.tfl.app_key.clone())
                .with_base_url(self.tfl.base_url.clone())
                .with_timeout(self.http_timeout_secs),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.transport_api_base_url, TRANSPORT_API_BASE_URL);
        assert_eq!(config.tfl.base_url, TFL_BASE_URL);
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let mut config = Config::default();
        config.http_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_credentials_are_rejected() {
        let mut config = Config::default();
        config.tfl.app_key = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_clients_build_from_config() {
        let config = Config::default();
        assert!(config.transport_api_client().is_ok());
        assert!(config.tfl_client().is_ok());
    }
}
