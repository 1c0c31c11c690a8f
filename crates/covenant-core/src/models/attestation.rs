//! Signed breach attestations, produced upstream and consumed read-only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{IdentityHash, Severity};

/// A signed claim that `violator` broke `constraint` of covenant `covenant_id`.
///
/// The trust graph only ever borrows an attestation; it never mutates one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreachAttestation {
    /// Attestation identifier, carried into every resulting breach event.
    pub id: String,
    pub covenant_id: String,
    pub violator: IdentityHash,
    /// The constraint that was violated, in the upstream constraint language.
    pub constraint: String,
    pub severity: Severity,
    pub action: String,
    pub resource: String,
    /// Content address of the supporting evidence bundle.
    pub evidence_hash: String,
    pub reporter_public_key: String,
    pub reporter_signature: String,
    pub affected_covenants: Vec<String>,
    pub reported_at: DateTime<Utc>,
}

impl BreachAttestation {
    /// BLAKE3 content address over the signed fields (everything except `id`
    /// and the signature itself). Each field is length-prefixed so adjacent
    /// fields cannot be re-split into a colliding encoding.
    pub fn content_id(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        let reported_at = self.reported_at.to_rfc3339();
        let fields: [&str; 9] = [
            &self.covenant_id,
            self.violator.as_str(),
            &self.constraint,
            self.severity.name(),
            &self.action,
            &self.resource,
            &self.evidence_hash,
            &self.reporter_public_key,
            &reported_at,
        ];
        for field in fields {
            hasher.update(&(field.len() as u64).to_le_bytes());
            hasher.update(field.as_bytes());
        }
        hasher.update(&(self.affected_covenants.len() as u64).to_le_bytes());
        for covenant in &self.affected_covenants {
            hasher.update(&(covenant.len() as u64).to_le_bytes());
            hasher.update(covenant.as_bytes());
        }
        hasher.finalize().to_hex().to_string()
    }
}
