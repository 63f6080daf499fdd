//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly; every section is optional.

mod endpoint;
mod logging;
mod output;
mod tui;

pub use endpoint::FileEndpointConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use tui::FileTuiConfig;

use reqwest::Url;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Problems found by [`FileConfig::validate`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("{field} cannot be empty")]
    EmptyUrl { field: &'static str },

    #[error("{field}: '{value}' is not a valid http(s) URL")]
    InvalidUrl { field: &'static str, value: String },

    #[error("tui.tick_ms cannot be 0")]
    ZeroTick,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Analysis service location
    pub endpoint: FileEndpointConfig,
    /// TUI settings
    pub tui: FileTuiConfig,
    /// Console output settings
    pub output: FileOutputConfig,
    /// Diagnostic log and transcript settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if let Some(issue) = check_url("endpoint.url", &self.endpoint.url) {
            issues.push(issue);
        }
        if let Some(health_url) = &self.endpoint.health_url
            && let Some(issue) = check_url("endpoint.health_url", health_url)
        {
            issues.push(issue);
        }

        if self.tui.tick_ms == 0 {
            issues.push(ConfigValidationError::ZeroTick);
        }

        issues
    }
}

fn check_url(field: &'static str, value: &str) -> Option<ConfigValidationError> {
    if value.trim().is_empty() {
        return Some(ConfigValidationError::EmptyUrl { field });
    }
    match Url::parse(value.trim()) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => None,
        _ => Some(ConfigValidationError::InvalidUrl {
            field,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::DEFAULT_ENDPOINT;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[endpoint]
url = "http://localhost:8000/api/analyze/"
health_url = "http://localhost:8000/api/health/"

[tui]
tick_ms = 200
flash_secs = 3

[output]
color = false

[logging]
transcript = true
log_file = "/tmp/estate-chat.log"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.endpoint.url, "http://localhost:8000/api/analyze/");
        assert_eq!(
            config.endpoint.health_url.as_deref(),
            Some("http://localhost:8000/api/health/")
        );
        assert_eq!(config.tui.tick_ms, 200);
        assert_eq!(config.tui.flash_secs, 3);
        assert!(!config.output.color);
        assert!(config.logging.transcript);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.endpoint.url, DEFAULT_ENDPOINT);
        assert_eq!(config.tui.tick_ms, 250);
        assert!(!config.logging.transcript);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_empty_file_is_default() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_validate_reports_every_issue() {
        let toml_str = r#"
[endpoint]
url = "  "
health_url = "ftp://example.com/health"

[tui]
tick_ms = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.validate(),
            vec![
                ConfigValidationError::EmptyUrl {
                    field: "endpoint.url"
                },
                ConfigValidationError::InvalidUrl {
                    field: "endpoint.health_url",
                    value: "ftp://example.com/health".to_string(),
                },
                ConfigValidationError::ZeroTick,
            ]
        );
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ConfigValidationError::ZeroTick.to_string(),
            "tui.tick_ms cannot be 0"
        );
        assert_eq!(
            ConfigValidationError::InvalidUrl {
                field: "endpoint.url",
                value: "nope".into()
            }
            .to_string(),
            "endpoint.url: 'nope' is not a valid http(s) URL"
        );
    }
}
