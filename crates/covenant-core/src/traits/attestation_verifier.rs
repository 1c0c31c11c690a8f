//! AttestationVerifier: the signature-verification capability the trust
//! graph is built around.
//!
//! The covenant core never performs signature cryptography itself. A host
//! injects an implementation of this trait; the graph treats `Ok(false)` and
//! `Err(_)` alike as a rejected attestation.

use std::sync::Arc;

use crate::errors::CovenantResult;
use crate::models::BreachAttestation;

#[allow(async_fn_in_trait)]
pub trait AttestationVerifier: Send + Sync {
    /// Check the reporter's signature over the attestation.
    async fn verify(&self, attestation: &BreachAttestation) -> CovenantResult<bool>;
}

impl<T: AttestationVerifier> AttestationVerifier for Arc<T> {
    async fn verify(&self, attestation: &BreachAttestation) -> CovenantResult<bool> {
        (**self).verify(attestation).await
    }
}

impl<T: AttestationVerifier> AttestationVerifier for Box<T> {
    async fn verify(&self, attestation: &BreachAttestation) -> CovenantResult<bool> {
        (**self).verify(attestation).await
    }
}
