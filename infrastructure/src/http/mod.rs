//! HTTP adapters for the analysis service.
//!
//! Provides [`HttpAnalysisGateway`], which implements the
//! [`AnalysisGateway`](estate_application::AnalysisGateway) port with `reqwest`.

mod gateway;

pub use gateway::{DEFAULT_ENDPOINT, HttpAnalysisGateway, derive_health_url};
