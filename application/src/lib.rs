//! Application layer for estate-chat
//!
//! This crate contains the session state, use cases, and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod session;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    analysis_gateway::{AnalysisGateway, GatewayError, HealthReport},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
};
pub use session::{DispatchState, Session};
pub use use_cases::check_health::CheckHealthUseCase;
pub use use_cases::dispatch_query::{DispatchOutcome, DispatchQueryUseCase, PendingQuery};
