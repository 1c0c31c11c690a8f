/// Breach lifecycle errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LifecycleError {
    /// The requested transition is not the next step of the linear lifecycle.
    #[error("invalid transition for breach {breach_id}: {from} -> {to}")]
    InvalidTransition {
        breach_id: String,
        from: String,
        to: String,
    },
}
