//! # linkmind-observability
//!
//! Structured logging for the audit pipeline.

pub mod tracing_setup;

pub use tracing_setup::{events, init_tracing, init_tracing_with_filter};
