use serde::{Deserialize, Serialize};

use super::{IdentityHash, TrustStatus};

/// One node touched by a single `process_breach` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreachEvent {
    pub affected_agent: IdentityHash,
    pub previous_status: TrustStatus,
    pub new_status: TrustStatus,
    /// 0 for the violator itself, 1 for a direct dependent, and so on.
    pub propagation_depth: usize,
    pub causing_attestation_id: String,
    /// Continuous trust loss at this depth under the graph's degradation model.
    pub trust_loss: f64,
}

impl BreachEvent {
    pub fn status_changed(&self) -> bool {
        self.previous_status != self.new_status
    }
}
