//! Repeat offender detection.
//!
//! The detector keeps each agent's raw breach records and derives an
//! [`OffenderProfile`](covenant_core::models::OffenderProfile) on demand.
//! Only breaches inside the sliding window count towards the penalty.

pub mod analysis;
mod detector;

pub use detector::RepeatOffenderDetector;
