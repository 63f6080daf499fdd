//! TUI configuration from TOML (`[tui]` section)

use serde::{Deserialize, Serialize};

/// TUI timing configuration
///
/// # Example
///
/// ```toml
/// [tui]
/// tick_ms = 250
/// flash_secs = 5
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTuiConfig {
    /// Redraw interval driving the typing indicator and flash expiry
    pub tick_ms: u64,
    /// How long status-bar flash messages stay visible
    pub flash_secs: u64,
}

impl Default for FileTuiConfig {
    fn default() -> Self {
        Self {
            tick_ms: 250,
            flash_secs: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::FileConfig;

    #[test]
    fn test_tui_partial_override() {
        let toml_str = r#"
[tui]
tick_ms = 100
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.tui.tick_ms, 100);
        assert_eq!(config.tui.flash_secs, 5);
    }
}
