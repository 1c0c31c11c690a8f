pub mod indexed;

pub use indexed::{IndexedTrustGraph, NodeState};
