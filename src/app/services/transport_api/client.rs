//! transportapi.com train data client
//!
//! Queries the train service timetable and station live departures
//! endpoints. Responses are returned as raw `serde_json::Value` payloads,
//! unmodified, for the caller to print or persist.

use crate::constants::{DEFAULT_HTTP_TIMEOUT_SECS, TRANSPORT_API_BASE_URL};
use crate::{Error, Result};
use chrono::NaiveDate;
use serde_json::Value;
use tracing::debug;

/// Configuration for the transportapi.com client
#[derive(Debug, Clone)]
pub struct TransportApiConfig {
    /// Base URL for the API (defaults to the public transportapi host)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TransportApiConfig {
    /// Create a config with the default public endpoint
    pub fn new() -> Self {
        Self {
            base_url: TRANSPORT_API_BASE_URL.to_string(),
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing)
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for TransportApiConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the transportapi.com UK train endpoints
#[derive(Debug, Clone)]
pub struct TransportApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl TransportApiClient {
    /// Create a new client with the given configuration
    pub fn new(config: TransportApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Get the timetable for a train service, identified by its train UID
    /// (the reservation-system identifier, e.g. "W64533") and running date.
    pub async fn train_timetable(&self, train_uid: &str, date: NaiveDate) -> Result<Value> {
        let url = format!(
            "{}/v3/uk/train/service/train_uid:{}/{}/timetable.json",
            self.base_url,
            train_uid,
            date.format("%Y-%m-%d")
        );

        self.get_json(&url, &[("live", "true")]).await
    }

    /// Get the live departure board for a station, identified by its CRS
    /// code, limited to `limit` services.
    pub async fn live_departures(&self, crs: &str, limit: u32) -> Result<Value> {
        let url = format!(
            "{}/v3/uk/train/station/{}/live.json",
            self.base_url,
            crs.to_uppercase()
        );

        self.get_json(&url, &[("limit", &limit.to_string())]).await
    }

    /// Perform one GET and decode the body as JSON.
    ///
    /// Non-success statuses carry the status code and body back to the
    /// caller; decode failures keep a bounded body snippet for context.
    async fn get_json(&self, url: &str, query: &[(&str, &str)]) -> Result<Value> {
        debug!("GET {}", url);

        let response = self.http.get(url).query(query).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::api_status(status.as_u16(), body));
        }

        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| Error::json_decode(e.to_string(), Some(&body)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = TransportApiConfig::new();
        assert_eq!(config.base_url, TRANSPORT_API_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_HTTP_TIMEOUT_SECS);
    }

    #[test]
    fn config_builder() {
        let config = TransportApiConfig::new()
            .with_base_url("http://localhost:8080")
            .with_timeout(5);

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn client_creation() {
        let client = TransportApiClient::new(TransportApiConfig::new());
        assert!(client.is_ok());
    }

    // Endpoint tests against the live API would require network access;
    // URL composition is covered indirectly by the lookup command tests.
}
