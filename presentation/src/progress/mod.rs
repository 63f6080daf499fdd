//! Progress indicators for console mode

pub mod spinner;
