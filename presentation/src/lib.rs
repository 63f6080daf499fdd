//! Presentation layer for estate-chat
//!
//! This crate contains the CLI definition, the console formatter and
//! spinner for one-shot queries, and the interactive TUI.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use config::{OutputConfig, TuiConfig};
pub use output::console::ConsoleFormatter;
pub use progress::spinner::QuerySpinner;
pub use tui::TuiApp;
