mod attestation_verifier;

pub use attestation_verifier::AttestationVerifier;
