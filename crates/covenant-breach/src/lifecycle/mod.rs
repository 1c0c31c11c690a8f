//! Breach investigation lifecycle.
//!
//! `detected → confirmed → remediated → recovered`, one step at a time. Steps
//! are taken explicitly by an actor or, when a state has a timeout, by
//! polling [`BreachStateMachine::check_timeouts`].

mod state_machine;
pub mod timeouts;

pub use state_machine::BreachStateMachine;
