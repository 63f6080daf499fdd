//! Core domain concepts shared across all subdomains.
//!
//! - [`query::Query`] — a validated, non-blank analysis query
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod query;
