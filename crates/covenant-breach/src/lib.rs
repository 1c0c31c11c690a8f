//! # covenant-breach
//!
//! Per-breach and per-agent bookkeeping that sits beside the trust graph:
//!
//! - [`lifecycle`]: the linear investigation lifecycle of one breach, with
//!   optional per-state timeouts
//! - [`offender`]: windowed repeat offender analysis over each agent's
//!   breach history

pub mod lifecycle;
pub mod offender;

pub use lifecycle::BreachStateMachine;
pub use offender::RepeatOffenderDetector;
