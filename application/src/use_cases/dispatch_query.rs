//! Dispatch Query use case.
//!
//! Drives one query through its lifecycle: `Idle → Pending → Idle`.
//!
//! The lifecycle is split so that a front end can await the network call
//! outside its event loop:
//!
//! 1. [`begin`](DispatchQueryUseCase::begin) validates the input buffer,
//!    appends the user entry, clears the buffer and marks the session
//!    pending. It hands back a [`PendingQuery`] ticket.
//! 2. [`request`](DispatchQueryUseCase::request) performs exactly one call
//!    to the analysis service. It does not touch the session.
//! 3. [`complete`](DispatchQueryUseCase::complete) consumes the ticket and
//!    the call's outcome, appends the bot entry and returns to idle.
//!
//! [`submit`](DispatchQueryUseCase::submit) runs all three in sequence.

use crate::ports::analysis_gateway::{AnalysisGateway, GatewayError};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::session::Session;
use estate_domain::util::ellipsize;
use estate_domain::{BotReply, DomainError, Entry, Query, RawPayload};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Proof that a query is in flight.
///
/// Only [`DispatchQueryUseCase::begin`] creates one, and
/// [`DispatchQueryUseCase::complete`] consumes it, so every accepted query
/// gets exactly one bot entry.
#[derive(Debug)]
pub struct PendingQuery {
    query: Query,
    started: Instant,
}

impl PendingQuery {
    pub fn query(&self) -> &Query {
        &self.query
    }
}

/// How a dispatch ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The service answered and its payload was appended
    Answered,
    /// The request failed; the connectivity-error reply was appended
    ConnectivityError,
}

/// Use case for dispatching queries to the analysis service.
pub struct DispatchQueryUseCase {
    gateway: Arc<dyn AnalysisGateway>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl Clone for DispatchQueryUseCase {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            conversation_logger: self.conversation_logger.clone(),
        }
    }
}

impl DispatchQueryUseCase {
    pub fn new(gateway: Arc<dyn AnalysisGateway>) -> Self {
        Self {
            gateway,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn endpoint(&self) -> &str {
        self.gateway.endpoint()
    }

    /// Start dispatching the session's input buffer.
    ///
    /// Rejections leave the session untouched: no entry, no request, and
    /// the buffer keeps its contents.
    pub fn begin(&self, session: &mut Session) -> Result<PendingQuery, DomainError> {
        if session.is_pending() {
            debug!("Submission ignored: a query is already pending");
            return Err(DomainError::QueryPending);
        }

        let Some(query) = Query::try_new(session.input()) else {
            debug!("Submission ignored: empty query");
            return Err(DomainError::EmptyQuery);
        };

        info!("Dispatching query: {}", ellipsize(query.text(), 100));
        session.start_dispatch(Entry::user(query.text()));

        self.conversation_logger.log(ConversationEvent::new(
            ConversationEvent::USER_QUERY,
            serde_json::json!({ "text": query.text() }),
        ));

        Ok(PendingQuery {
            query,
            started: Instant::now(),
        })
    }

    /// Send one query to the analysis service.
    pub async fn request(&self, query: &Query) -> Result<RawPayload, GatewayError> {
        self.gateway.analyze(query).await
    }

    /// Finish a dispatch with the outcome of its request.
    pub fn complete(
        &self,
        session: &mut Session,
        pending: PendingQuery,
        outcome: Result<RawPayload, GatewayError>,
    ) -> DispatchOutcome {
        let elapsed = pending.started.elapsed();

        match outcome {
            Ok(payload) => {
                let reply = payload.normalize();
                info!(
                    "Analysis received in {:.1?}: {} chart points, {} rows",
                    elapsed,
                    reply.series().len(),
                    reply.rows().len()
                );
                debug!("Chart kind: {}", reply.chart_kind());

                self.conversation_logger.log(ConversationEvent::new(
                    ConversationEvent::BOT_REPLY,
                    serde_json::json!({
                        "query": pending.query.text(),
                        "elapsed_ms": elapsed.as_millis() as u64,
                        "reply": reply,
                    }),
                ));

                session.finish_dispatch(Entry::bot(reply));
                DispatchOutcome::Answered
            }
            Err(e) => {
                warn!("Analysis request failed after {:.1?}: {}", elapsed, e);

                self.conversation_logger.log(ConversationEvent::new(
                    ConversationEvent::TRANSPORT_ERROR,
                    serde_json::json!({
                        "query": pending.query.text(),
                        "elapsed_ms": elapsed.as_millis() as u64,
                        "error": e.to_string(),
                    }),
                ));

                session.finish_dispatch(Entry::bot(BotReply::connectivity_error()));
                DispatchOutcome::ConnectivityError
            }
        }
    }

    /// Dispatch the input buffer and wait for the reply.
    pub async fn submit(&self, session: &mut Session) -> Result<DispatchOutcome, DomainError> {
        let pending = self.begin(session)?;
        let outcome = self.request(pending.query()).await;
        Ok(self.complete(session, pending, outcome))
    }
}
