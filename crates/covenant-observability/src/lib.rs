//! # covenant-observability
//!
//! Structured logging for the covenant core: subscriber setup and the named
//! events every component emits.

pub mod tracing_setup;

pub use tracing_setup::events;
pub use tracing_setup::{init_tracing, init_tracing_from_config, init_tracing_with_filter};
