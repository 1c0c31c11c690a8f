use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{IdentityHash, TrustStatus};

/// Owned view of one agent in the trust graph.
///
/// Values of this type are always copies; mutating one never reaches back
/// into the graph it was read from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrustNode {
    pub identity_hash: IdentityHash,
    pub status: TrustStatus,
    /// Agents that depend on this one, in registration order.
    pub dependents: Vec<IdentityHash>,
    /// Agents this one depends on, in registration order.
    pub dependencies: Vec<IdentityHash>,
    pub breach_count: u64,
    pub last_breach_at: Option<DateTime<Utc>>,
}

/// `from` is a dependency of `to`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub from: IdentityHash,
    pub to: IdentityHash,
}

/// Serializable export of a whole trust graph.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<TrustNode>,
    pub edges: Vec<Edge>,
}

impl GraphSnapshot {
    pub fn node(&self, id: &str) -> Option<&TrustNode> {
        self.nodes.iter().find(|n| n.identity_hash.as_str() == id)
    }
}
