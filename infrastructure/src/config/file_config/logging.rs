//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Diagnostic log and conversation transcript settings
///
/// # Example
///
/// ```toml
/// [logging]
/// transcript = true
/// transcript_path = "/tmp/estate-chat.jsonl"
/// log_file = "/tmp/estate-chat.log"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Write a JSONL transcript of the conversation
    pub transcript: bool,
    /// Transcript file; a timestamped file in the data dir when unset
    pub transcript_path: Option<PathBuf>,
    /// Tracing output file for TUI mode; the data dir when unset
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::super::FileConfig;
    use std::path::Path;

    #[test]
    fn test_logging_deserialize() {
        let toml_str = r#"
[logging]
transcript = true
transcript_path = "/tmp/chat.jsonl"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(config.logging.transcript);
        assert_eq!(
            config.logging.transcript_path.as_deref(),
            Some(Path::new("/tmp/chat.jsonl"))
        );
        assert!(config.logging.log_file.is_none());
    }
}
