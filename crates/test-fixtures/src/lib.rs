//! Shared fixtures for covenant integration tests: attestation builders,
//! verifier doubles, and graph-shape helpers.

use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, Duration, TimeZone, Utc};
use covenant_core::errors::{CovenantResult, GraphError};
use covenant_core::models::{BreachAttestation, BreachRecord, IdentityHash, Severity};
use covenant_core::traits::AttestationVerifier;

/// Fixed reference instant so tests never depend on the wall clock.
pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// `epoch() + days`.
pub fn days_after_epoch(days: i64) -> DateTime<Utc> {
    epoch() + Duration::days(days)
}

/// Build an attestation against `violator` with sensible defaults.
pub fn attestation(violator: &str, severity: Severity) -> BreachAttestation {
    AttestationBuilder::new(violator, severity).build()
}

/// Fluent builder for [`BreachAttestation`].
pub struct AttestationBuilder {
    inner: BreachAttestation,
    derive_id: bool,
}

impl AttestationBuilder {
    pub fn new(violator: &str, severity: Severity) -> Self {
        Self {
            inner: BreachAttestation {
                id: String::new(),
                covenant_id: "covenant-1".to_string(),
                violator: IdentityHash::from(violator),
                constraint: "deny write on '/secrets/**'".to_string(),
                severity,
                action: "write".to_string(),
                resource: "/secrets/api-key".to_string(),
                evidence_hash: "evidence-0".to_string(),
                reporter_public_key: "reporter-pk".to_string(),
                reporter_signature: "reporter-sig".to_string(),
                affected_covenants: vec!["covenant-1".to_string()],
                reported_at: epoch(),
            },
            derive_id: true,
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.inner.id = id.to_string();
        self.derive_id = false;
        self
    }

    pub fn reported_at(mut self, at: DateTime<Utc>) -> Self {
        self.inner.reported_at = at;
        self
    }

    pub fn resource(mut self, resource: &str) -> Self {
        self.inner.resource = resource.to_string();
        self
    }

    pub fn action(mut self, action: &str) -> Self {
        self.inner.action = action.to_string();
        self
    }

    pub fn evidence_hash(mut self, hash: &str) -> Self {
        self.inner.evidence_hash = hash.to_string();
        self
    }

    pub fn build(mut self) -> BreachAttestation {
        if self.derive_id {
            self.inner.id = self.inner.content_id();
        }
        self.inner
    }
}

/// Breach record at `epoch() + days`.
pub fn record_at(days: i64, severity: Severity, resource: &str, action: &str) -> BreachRecord {
    BreachRecord::new(severity, days_after_epoch(days), resource, action)
}

/// Verifier that always answers the same way.
#[derive(Debug, Clone, Copy)]
pub struct StaticVerifier(pub bool);

impl StaticVerifier {
    pub fn accept() -> Self {
        Self(true)
    }

    pub fn reject() -> Self {
        Self(false)
    }
}

impl AttestationVerifier for StaticVerifier {
    async fn verify(&self, _attestation: &BreachAttestation) -> CovenantResult<bool> {
        Ok(self.0)
    }
}

/// Verifier whose collaborator always fails (e.g. key service unreachable).
#[derive(Debug, Clone, Default)]
pub struct FailingVerifier;

impl AttestationVerifier for FailingVerifier {
    async fn verify(&self, attestation: &BreachAttestation) -> CovenantResult<bool> {
        Err(GraphError::InvalidAttestation {
            attestation_id: attestation.id.clone(),
            reason: "key service unavailable".to_string(),
        }
        .into())
    }
}

/// Accepts only attestations whose signature equals `"reporter-sig"` and
/// counts every call.
#[derive(Debug, Default)]
pub struct CountingVerifier {
    calls: AtomicUsize,
}

impl CountingVerifier {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl AttestationVerifier for CountingVerifier {
    async fn verify(&self, attestation: &BreachAttestation) -> CovenantResult<bool> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(attestation.reporter_signature == "reporter-sig")
    }
}

/// Verifier that yields to the scheduler before answering, so tests can
/// observe the suspension point inside breach processing.
#[derive(Debug, Clone, Copy, Default)]
pub struct YieldingVerifier;

impl AttestationVerifier for YieldingVerifier {
    async fn verify(&self, _attestation: &BreachAttestation) -> CovenantResult<bool> {
        tokio::task::yield_now().await;
        Ok(true)
    }
}

/// Edges of a linear chain `ids[0] → ids[1] → …` (each depends on the previous).
pub fn chain_edges<'a>(ids: &[&'a str]) -> Vec<(&'a str, &'a str)> {
    ids.windows(2).map(|w| (w[0], w[1])).collect()
}

/// Edges of a diamond: `top → left → bottom` and `top → right → bottom`.
pub fn diamond_edges() -> Vec<(&'static str, &'static str)> {
    vec![
        ("top", "left"),
        ("top", "right"),
        ("left", "bottom"),
        ("right", "bottom"),
    ]
}
