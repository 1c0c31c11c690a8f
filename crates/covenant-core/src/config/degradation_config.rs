use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Exponential degradation parameters: `loss(d) = base_loss × e^(−lambda × d)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DegradationConfig {
    /// Loss at hop distance 0. Must be in (0, 1].
    pub base_loss: f64,
    /// Decay rate per hop. Must be finite and > 0.
    pub lambda: f64,
}

impl Default for DegradationConfig {
    fn default() -> Self {
        Self {
            base_loss: defaults::DEFAULT_BASE_LOSS,
            lambda: defaults::DEFAULT_LAMBDA,
        }
    }
}

impl DegradationConfig {
    pub fn new(base_loss: f64, lambda: f64) -> Self {
        Self { base_loss, lambda }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_loss > 0.0 && self.base_loss <= 1.0) {
            return Err(ConfigError::invalid(
                "degradation.base_loss",
                self.base_loss,
                "must be in (0, 1]",
            ));
        }
        if !(self.lambda.is_finite() && self.lambda > 0.0) {
            return Err(ConfigError::invalid(
                "degradation.lambda",
                self.lambda,
                "must be finite and greater than 0",
            ));
        }
        Ok(())
    }
}
