pub mod attestation;
pub mod breach_event;
pub mod identity;
pub mod lifecycle;
pub mod offender;
pub mod severity;
pub mod trust_node;
pub mod trust_status;

pub use attestation::BreachAttestation;
pub use breach_event::BreachEvent;
pub use identity::IdentityHash;
pub use lifecycle::{BreachState, EvidenceItem, Transition};
pub use offender::{BreachRecord, OffenderProfile, PenaltyLevel};
pub use severity::Severity;
pub use trust_node::{Edge, GraphSnapshot, TrustNode};
pub use trust_status::{status_for_severity, worse_status, TrustStatus};

/// Error returned when parsing one of the model enums from its name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}
