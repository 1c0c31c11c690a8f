mod argument_error;
mod config_error;
mod graph_error;
mod lifecycle_error;

pub use argument_error::ArgumentError;
pub use config_error::ConfigError;
pub use graph_error::GraphError;
pub use lifecycle_error::LifecycleError;

/// Top-level error for every covenant operation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CovenantError {
    #[error(transparent)]
    ConfigError(#[from] ConfigError),

    #[error(transparent)]
    ArgumentError(#[from] ArgumentError),

    #[error(transparent)]
    GraphError(#[from] GraphError),

    #[error(transparent)]
    LifecycleError(#[from] LifecycleError),
}

impl CovenantError {
    /// True for the expected, recoverable protocol errors: an invalid lifecycle
    /// transition or a rejected attestation.
    pub fn is_protocol_error(&self) -> bool {
        matches!(
            self,
            CovenantError::GraphError(GraphError::InvalidAttestation { .. })
                | CovenantError::LifecycleError(LifecycleError::InvalidTransition { .. })
        )
    }
}

pub type CovenantResult<T> = Result<T, CovenantError>;
