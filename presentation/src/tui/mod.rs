//! TUI (Text User Interface) module for estate-chat
//!
//! A full-screen chat with the analysis service built on ratatui:
//! conversation cards with charts and tables, a vim-like input box, and a
//! status bar.

mod app;
mod event;
mod mode;
mod state;
mod widgets;

pub use app::TuiApp;
pub use event::TuiEvent;
pub use mode::{InputMode, KeyAction};
pub use state::{SUGGESTIONS, TuiState};
