//! Analysis results domain.
//!
//! - [`payload::RawPayload`] — an untyped service response and its normalizer
//! - [`record::Record`] — one loosely-typed chart point or table row
//! - [`chart::ChartKind`] — which chart a reply asks for
//! - [`visualization::Visualization`] — chart selection and axis binding
//! - [`table::TableView`] — the fixed-column data table

pub mod chart;
pub mod payload;
pub mod record;
pub mod table;
pub mod visualization;
