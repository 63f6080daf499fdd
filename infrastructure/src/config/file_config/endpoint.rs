//! Endpoint configuration from TOML (`[endpoint]` section)

use crate::http::DEFAULT_ENDPOINT;
use serde::{Deserialize, Serialize};

/// Where the analysis service lives
///
/// # Example
///
/// ```toml
/// [endpoint]
/// url = "http://localhost:8000/api/analyze/"
/// health_url = "http://localhost:8000/api/health/"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEndpointConfig {
    /// Analyze endpoint queries are POSTed to
    pub url: String,
    /// Health endpoint; derived from `url` when unset
    pub health_url: Option<String>,
}

impl Default for FileEndpointConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_ENDPOINT.to_string(),
            health_url: None,
        }
    }
}
