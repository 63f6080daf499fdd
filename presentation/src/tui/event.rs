//! TUI event types
//!
//! Events delivered to the TUI select! loop from spawned tasks.

use estate_application::GatewayError;
use estate_domain::RawPayload;

/// Events sent back to the TUI event loop
#[derive(Debug)]
pub enum TuiEvent {
    /// The outstanding analysis request finished
    QueryResolved(Result<RawPayload, GatewayError>),
}
