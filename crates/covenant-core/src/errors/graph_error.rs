/// Trust graph errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    /// The verification collaborator returned `false` or failed. Nothing in
    /// the graph was mutated.
    #[error("invalid attestation {attestation_id}: {reason}")]
    InvalidAttestation {
        attestation_id: String,
        reason: String,
    },
}
