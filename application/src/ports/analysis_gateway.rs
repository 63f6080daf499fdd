//! Analysis Gateway port
//!
//! Defines the interface for talking to the remote analysis service.

use async_trait::async_trait;
use estate_domain::{Query, RawPayload};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while reaching the analysis service.
///
/// Every variant is a transport-level failure: the caller treats them all
/// the same way and never inspects the payload of a failed request.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Server returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Response is not valid JSON: {0}")]
    Decode(String),

    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(String),
}

/// Data-availability report from the service's health endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthReport {
    pub status: String,
    pub message: String,
    pub data_loaded: bool,
    pub total_records: u64,
    pub sample_locations: Vec<String>,
}

impl HealthReport {
    /// Status strings that mean the service is up
    pub const UP_STATUSES: [&'static str; 2] = ["ok", "healthy"];

    /// Up, with its dataset loaded
    pub fn is_healthy(&self) -> bool {
        let status = self.status.trim();
        Self::UP_STATUSES
            .iter()
            .any(|up| status.eq_ignore_ascii_case(up))
            && self.data_loaded
    }
}

/// Gateway for the analysis service
///
/// This port defines how the application layer reaches the service.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait AnalysisGateway: Send + Sync {
    /// Send one query and return the response body exactly as received.
    ///
    /// Must not retry: one call is one request.
    async fn analyze(&self, query: &Query) -> Result<RawPayload, GatewayError>;

    /// Ask the service whether its dataset is loaded
    async fn health(&self) -> Result<HealthReport, GatewayError>;

    /// Endpoint the gateway posts queries to, for display
    fn endpoint(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_report_tolerates_missing_fields() {
        let report: HealthReport = serde_json::from_str(r#"{"status":"ok"}"#).unwrap();
        assert_eq!(report.status, "ok");
        assert!(!report.data_loaded);
        assert!(!report.is_healthy());
        assert!(report.sample_locations.is_empty());
    }

    #[test]
    fn health_report_full_document() {
        let report: HealthReport = serde_json::from_str(
            r#"{
                "status": "ok",
                "message": "API is running",
                "data_loaded": true,
                "total_records": 96,
                "sample_locations": ["Akurdi", "Ambegaon Budruk", "Aundh"]
            }"#,
        )
        .unwrap();
        assert!(report.is_healthy());
        assert_eq!(report.message, "API is running");
        assert_eq!(report.total_records, 96);
        assert_eq!(report.sample_locations.len(), 3);
    }

    #[test]
    fn health_status_values() {
        let report = |status: &str, data_loaded: bool| HealthReport {
            status: status.into(),
            data_loaded,
            ..HealthReport::default()
        };
        assert!(report("ok", true).is_healthy());
        assert!(report("healthy", true).is_healthy());
        assert!(report("OK", true).is_healthy());
        assert!(!report("ok", false).is_healthy());
        assert!(!report("degraded", true).is_healthy());
        assert!(!report("", true).is_healthy());
    }

    #[test]
    fn gateway_error_messages() {
        let err = GatewayError::Status {
            status: 502,
            body: "Bad Gateway".into(),
        };
        assert_eq!(err.to_string(), "Server returned HTTP 502: Bad Gateway");
        assert_eq!(
            GatewayError::Connection("refused".into()).to_string(),
            "Connection error: refused"
        );
    }
}
