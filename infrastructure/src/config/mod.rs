//! Configuration file loading for estate-chat
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `ESTATE_CHAT_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./estate-chat.toml` or `./.estate-chat.toml`
//! 4. Global: `$XDG_CONFIG_HOME/estate-chat/config.toml`
//! 5. Default values
//!
//! Command-line flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileEndpointConfig, FileLoggingConfig, FileOutputConfig,
    FileTuiConfig,
};
pub use loader::{APP_DIR, ConfigLoader, ENV_PREFIX};
