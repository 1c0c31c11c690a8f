use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;
use crate::models::BreachState;

/// Per-state timeouts for the breach lifecycle. `None` or `0` disables the
/// timeout for that state. `recovered` is terminal and has no timeout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifecycleConfig {
    pub detected_timeout_ms: Option<u64>,
    pub confirmed_timeout_ms: Option<u64>,
    pub remediated_timeout_ms: Option<u64>,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            detected_timeout_ms: defaults::DEFAULT_DETECTED_TIMEOUT_MS,
            confirmed_timeout_ms: defaults::DEFAULT_CONFIRMED_TIMEOUT_MS,
            remediated_timeout_ms: defaults::DEFAULT_REMEDIATED_TIMEOUT_MS,
        }
    }
}

impl LifecycleConfig {
    /// The enabled timeout for `state`, if any.
    pub fn timeout_for(&self, state: BreachState) -> Option<Duration> {
        let ms = match state {
            BreachState::Detected => self.detected_timeout_ms,
            BreachState::Confirmed => self.confirmed_timeout_ms,
            BreachState::Remediated => self.remediated_timeout_ms,
            BreachState::Recovered => None,
        }?;
        if ms == 0 {
            return None;
        }
        i64::try_from(ms).ok().map(Duration::milliseconds)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("lifecycle.detected_timeout_ms", self.detected_timeout_ms),
            ("lifecycle.confirmed_timeout_ms", self.confirmed_timeout_ms),
            ("lifecycle.remediated_timeout_ms", self.remediated_timeout_ms),
        ];
        for (field, value) in fields {
            if let Some(ms) = value {
                // chrono durations are bounded by i64 milliseconds.
                if i64::try_from(ms).is_err() {
                    return Err(ConfigError::invalid(field, ms, "exceeds i64::MAX milliseconds"));
                }
            }
        }
        Ok(())
    }
}
