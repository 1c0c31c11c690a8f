//! # covenant-graph
//!
//! The trust graph of one covenant domain. Agents are nodes; an edge
//! `from → to` records that `to` depends on `from`. A verified breach
//! attestation downgrades the violator and propagates a milder consequence,
//! level by level, to everything that transitively depends on it.
//!
//! ## Modules
//!
//! - [`engine`]: `TrustGraph`, the public entry point
//! - [`graph`]: petgraph-backed node and edge storage
//! - [`propagation`]: breadth-first breach propagation
//! - [`traversal`]: read-only reachability queries
//! - [`listeners`]: ordered breach listener registry

pub mod engine;
pub mod graph;
pub mod listeners;
pub mod propagation;
pub mod traversal;

pub use engine::TrustGraph;
pub use listeners::{BreachListener, ListenerRegistry};
