//! TfL unified API client
//!
//! Covers the Line and StopPoint endpoint families: transport modes,
//! severity metadata, lines with routes, line status, stop disruption, and
//! stop search. Every request carries the app_id/app_key pair as query
//! parameters. Status endpoints decode to light typed DTOs so results can
//! be filtered for disruption; metadata endpoints return raw JSON.

use crate::constants::{DEFAULT_HTTP_TIMEOUT_SECS, SEVERITY_OK_CODES, TFL_BASE_URL};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// Configuration for the TfL client
#[derive(Debug, Clone)]
pub struct TflConfig {
    /// Base URL for the API (defaults to the public TfL host)
    pub base_url: String,
    /// Application ID sent with every request
    pub app_id: String,
    /// Application key sent with every request
    pub app_key: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TflConfig {
    /// Create a config with the given credential pair
    pub fn new(app_id: impl Into<String>, app_key: impl Into<String>) -> Self {
        Self {
            base_url: TFL_BASE_URL.to_string(),
            app_id: app_id.into(),
            app_key: app_key.into(),
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

// =============================================================================
// Response Types
// =============================================================================

/// One severity level definition from /Line/Meta/Severity
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeverityCode {
    pub mode_name: String,
    pub severity_level: i64,
    pub description: String,
}

/// A severity level grouped under its transport mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeverityEntry {
    pub level: i64,
    pub description: String,
}

/// A line with its current statuses, from /Line/Mode/{modes}/Status
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub mode_name: String,
    #[serde(default)]
    pub line_statuses: Vec<LineStatus>,
}

/// One status entry on a line
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStatus {
    pub status_severity: i64,
    pub status_severity_description: String,
    #[serde(default)]
    pub reason: Option<String>,
}

impl Line {
    /// Statuses whose severity code is not in the "good service" set
    pub fn disrupted_statuses(&self) -> Vec<&LineStatus> {
        self.line_statuses
            .iter()
            .filter(|status| !SEVERITY_OK_CODES.contains(&status.status_severity))
            .collect()
    }

    /// Whether any status on this line indicates a disruption
    pub fn is_disrupted(&self) -> bool {
        !self.disrupted_statuses().is_empty()
    }
}

/// Keep only lines with at least one non-OK status
pub fn disrupted_only(lines: &[Line]) -> Vec<&Line> {
    lines.iter().filter(|line| line.is_disrupted()).collect()
}

/// Group severity level definitions by their transport mode
pub fn group_severity_by_mode(codes: Vec<SeverityCode>) -> BTreeMap<String, Vec<SeverityEntry>> {
    let mut by_mode: BTreeMap<String, Vec<SeverityEntry>> = BTreeMap::new();

    for code in codes {
        by_mode.entry(code.mode_name).or_default().push(SeverityEntry {
            level: code.severity_level,
            description: code.description,
        });
    }

    by_mode
}

// =============================================================================
// Client
// =============================================================================

/// Client for the TfL unified API
#[derive(Debug, Clone)]
pub struct TflClient {
    http: reqwest::Client,
    base_url: String,
    app_id: String,
    app_key: String,
}

impl TflClient {
    /// Create a new client with the given configuration
    pub fn new(config: TflConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            app_id: config.app_id,
            app_key: config.app_key,
        })
    }

    /// All transport modes known to TfL
    pub async fn modes(&self) -> Result<Value> {
        self.get_json("/Line/Meta/Modes", &[]).await
    }

    /// Severity level definitions, grouped by transport mode
    pub async fn severity_by_mode(&self) -> Result<BTreeMap<String, Vec<SeverityEntry>>> {
        let value = self.get_json("/Line/Meta/Severity", &[]).await?;
        let codes: Vec<SeverityCode> = serde_json::from_value(value)
            .map_err(|e| Error::json_decode(e.to_string(), None))?;
        Ok(group_severity_by_mode(codes))
    }

    /// All lines and their regular-service routes for the given modes,
    /// including the origin and terminus of each route
    pub async fn lines_and_routes(&self, modes: &[String]) -> Result<Value> {
        let path = format!("/Line/Mode/{}/Route", modes.join(","));
        self.get_json(&path, &[("serviceTypes", "Regular")]).await
    }

    /// Current status of every line on the given modes
    pub async fn line_status(&self, modes: &[String]) -> Result<Vec<Line>> {
        let path = format!("/Line/Mode/{}/Status", modes.join(","));
        let value = self.get_json(&path, &[("detail", "true")]).await?;
        serde_json::from_value(value).map_err(|e| Error::json_decode(e.to_string(), None))
    }

    /// Disrupted stop points for one transport mode
    pub async fn stop_disruption(&self, mode: &str) -> Result<Value> {
        let path = format!("/StopPoint/Mode/{mode}/Disruption");
        self.get_json(&path, &[("includeRouteBlockedStops", "true")])
            .await
    }

    /// Search stop points by name
    pub async fn search_stops(&self, name: &str) -> Result<Value> {
        let path = format!("/StopPoint/Search/{}", name.replace(' ', "%20"));
        self.get_json(&path, &[]).await
    }

    /// Perform one GET with the credential pair appended, decoding JSON
    async fn get_json(&self, path: &str, query: &[(&str, &str)]) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .query(query)
            .query(&[
                ("app_id", self.app_id.as_str()),
                ("app_key", self.app_key.as_str()),
            ])
            .send()
            .await?;

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
    use serde_json::json;

    fn sample_lines() -> Vec<Line> {
        serde_json::from_value(json!([
            {
                "id": "thameslink",
                "name": "Thameslink",
                "modeName": "national-rail",
                "lineStatuses": [
                    {"statusSeverity": 10, "statusSeverityDescription": "Good Service"}
                ]
            },
            {
                "id": "northern",
                "name": "Northern",
                "modeName": "tube",
                "lineStatuses": [
                    {"statusSeverity": 10, "statusSeverityDescription": "Good Service"},
                    {
                        "statusSeverity": 6,
                        "statusSeverityDescription": "Severe Delays",
                        "reason": "Signal failure at Bank"
                    }
                ]
            }
        ]))
        .unwrap()
    }

    #[test]
    fn test_disrupted_only_filters_good_service() {
        let lines = sample_lines();
        let disrupted = disrupted_only(&lines);

        assert_eq!(disrupted.len(), 1);
        assert_eq!(disrupted[0].id, "northern");

        let statuses = disrupted[0].disrupted_statuses();
        assert_eq!(statuses.len(), 1);
        assert_eq!(statuses[0].status_severity, 6);
    }

    #[test]
    fn test_severity_ok_codes_are_not_disruptions() {
        // 10, 18, and 19 all count as good service
        let line: Line = serde_json::from_value(json!({
            "id": "dlr",
            "modeName": "dlr",
            "lineStatuses": [
                {"statusSeverity": 18, "statusSeverityDescription": "No Issues"},
                {"statusSeverity": 19, "statusSeverityDescription": "Information"}
            ]
        }))
        .unwrap();

        assert!(!line.is_disrupted());
    }

    #[test]
    fn test_group_severity_by_mode() {
        let codes: Vec<SeverityCode> = serde_json::from_value(json!([
            {"modeName": "tube", "severityLevel": 10, "description": "Good Service"},
            {"modeName": "tube", "severityLevel": 6, "description": "Severe Delays"},
            {"modeName": "dlr", "severityLevel": 10, "description": "Good Service"}
        ]))
        .unwrap();

        let grouped = group_severity_by_mode(codes);

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped["tube"].len(), 2);
        assert_eq!(
            grouped["dlr"][0],
            SeverityEntry {
                level: 10,
                description: "Good Service".to_string()
            }
        );
    }

    #[test]
    fn test_config_builder() {
        let config = TflConfig::new("id", "key")
            .with_base_url("http://localhost:9090")
            .with_timeout(5);

        assert_eq!(config.base_url, "http://localhost:9090");
        assert_eq!(config.app_id, "id");
        assert_eq!(config.app_key, "key");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_client_creation() {
        let client = TflClient::new(TflConfig::new("id", "key"));
        assert!(client.is_ok());
    }
}
