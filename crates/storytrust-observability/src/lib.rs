//! # storytrust-observability
//!
//! Tracing subscriber setup plus the structured events and spans emitted
//! around ledger aggregation, engine evaluation, and alerting.

pub mod tracing_setup;

pub use tracing_setup::{events, init_tracing, init_tracing_with_filter};
