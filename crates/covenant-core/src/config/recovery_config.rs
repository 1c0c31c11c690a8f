use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Logistic recovery curve parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecoveryConfig {
    /// Asymptotic recovery fraction. Must be in (0, 1].
    pub max_recovery: f64,
    /// Logistic steepness per millisecond. Must be finite and > 0.
    pub steepness: f64,
    /// Elapsed time at which half of `max_recovery` is restored. Must be > 0.
    pub midpoint_ms: f64,
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            max_recovery: defaults::DEFAULT_MAX_RECOVERY,
            steepness: defaults::DEFAULT_STEEPNESS,
            midpoint_ms: defaults::DEFAULT_MIDPOINT_MS,
        }
    }
}

impl RecoveryConfig {
    pub fn new(max_recovery: f64, steepness: f64, midpoint_ms: f64) -> Self {
        Self {
            max_recovery,
            steepness,
            midpoint_ms,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.max_recovery > 0.0 && self.max_recovery <= 1.0) {
            return Err(ConfigError::invalid(
                "recovery.max_recovery",
                self.max_recovery,
                "must be in (0, 1]",
            ));
        }
        if !(self.steepness.is_finite() && self.steepness > 0.0) {
            return Err(ConfigError::invalid(
                "recovery.steepness",
                self.steepness,
                "must be finite and greater than 0",
            ));
        }
        if !(self.midpoint_ms.is_finite() && self.midpoint_ms > 0.0) {
            return Err(ConfigError::invalid(
                "recovery.midpoint_ms",
                self.midpoint_ms,
                "must be finite and greater than 0",
            ));
        }
        Ok(())
    }
}
