//! Spinner shown while a one-shot query is pending

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Reports query progress on stderr with an animated spinner
pub struct QuerySpinner {
    bar: ProgressBar,
}

impl QuerySpinner {
    /// Start spinning with `message`
    pub fn start(message: impl Into<String>) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::style());
        bar.set_message(message.into());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    /// A spinner that draws nothing (for `--quiet` and `--json`)
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
    }

    /// Remove the spinner from the terminal
    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}
