//! # covenant-decay
//!
//! The two continuous models of the covenant core:
//! exponential degradation of a breach's consequence with hop distance, and
//! logistic recovery of trust with elapsed time.

pub mod degradation;
pub mod recovery;

pub use degradation::ExponentialDegradation;
pub use recovery::RecoveryModel;
