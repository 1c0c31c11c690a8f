//! # covenant-core
//!
//! Foundation crate for the covenant trust engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CovenantConfig;
pub use errors::{CovenantError, CovenantResult};
pub use models::{BreachAttestation, BreachEvent, IdentityHash, Severity, TrustStatus};
pub use traits::AttestationVerifier;
