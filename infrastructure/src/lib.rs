//! Infrastructure layer for estate-chat
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading.

pub mod config;
pub mod http;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileEndpointConfig, FileLoggingConfig,
    FileOutputConfig, FileTuiConfig,
};
pub use http::{DEFAULT_ENDPOINT, HttpAnalysisGateway};
pub use logging::JsonlConversationLogger;
