//! Presentation-level configuration
//!
//! Settings for the TUI loop and console output, resolved by the binary from
//! the config file and command-line flags.

use std::time::Duration;

/// TUI timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TuiConfig {
    /// Redraw interval; drives the typing indicator
    pub tick: Duration,
    /// Lifetime of a status-bar flash message
    pub flash: Duration,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(250),
            flash: Duration::from_secs(5),
        }
    }
}

impl TuiConfig {
    pub fn from_millis_and_secs(tick_ms: u64, flash_secs: u64) -> Self {
        Self {
            tick: Duration::from_millis(tick_ms.max(1)),
            flash: Duration::from_secs(flash_secs),
        }
    }
}

/// Console output configuration for one-shot mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// Enable colored terminal output
    pub color: bool,
    /// Print the bot entry as JSON instead of formatted text
    pub json: bool,
    /// Show a spinner while the query is pending
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            json: false,
            show_progress: true,
        }
    }
}
