use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Repeat offender thresholds. Thresholds count recent breaches and must be
/// strictly increasing: warning < restriction < revocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OffenderConfig {
    pub warning_threshold: u32,
    pub restriction_threshold: u32,
    pub revocation_threshold: u32,
    /// Sliding window for "recent" breaches. Default: 30 days.
    pub window_ms: Option<u64>,
    /// Multiplier applied to the penalty score while escalating. Default: 1.5.
    pub escalation_weight: Option<f64>,
}

impl Default for OffenderConfig {
    fn default() -> Self {
        Self {
            warning_threshold: defaults::DEFAULT_WARNING_THRESHOLD,
            restriction_threshold: defaults::DEFAULT_RESTRICTION_THRESHOLD,
            revocation_threshold: defaults::DEFAULT_REVOCATION_THRESHOLD,
            window_ms: None,
            escalation_weight: None,
        }
    }
}

impl OffenderConfig {
    pub fn new(warning: u32, restriction: u32, revocation: u32) -> Self {
        Self {
            warning_threshold: warning,
            restriction_threshold: restriction,
            revocation_threshold: revocation,
            ..Self::default()
        }
    }

    pub fn with_window_ms(mut self, window_ms: u64) -> Self {
        self.window_ms = Some(window_ms);
        self
    }

    pub fn with_escalation_weight(mut self, weight: f64) -> Self {
        self.escalation_weight = Some(weight);
        self
    }

    pub fn effective_window_ms(&self) -> u64 {
        self.window_ms.unwrap_or(defaults::DEFAULT_WINDOW_MS)
    }

    pub fn window(&self) -> Duration {
        // validate() guarantees the window fits in i64 milliseconds.
        Duration::milliseconds(i64::try_from(self.effective_window_ms()).unwrap_or(i64::MAX))
    }

    pub fn effective_escalation_weight(&self) -> f64 {
        self.escalation_weight
            .unwrap_or(defaults::DEFAULT_ESCALATION_WEIGHT)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.warning_threshold == 0 {
            return Err(ConfigError::invalid(
                "offender.warning_threshold",
                self.warning_threshold,
                "must be greater than 0",
            ));
        }
        if !(self.warning_threshold < self.restriction_threshold
            && self.restriction_threshold < self.revocation_threshold)
        {
            return Err(ConfigError::InvalidOrdering {
                details: format!(
                    "thresholds must satisfy warning < restriction < revocation, got {} / {} / {}",
                    self.warning_threshold, self.restriction_threshold, self.revocation_threshold
                ),
            });
        }
        let window = self.effective_window_ms();
        if window == 0 || i64::try_from(window).is_err() {
            return Err(ConfigError::invalid(
                "offender.window_ms",
                window,
                "must be greater than 0 and at most i64::MAX",
            ));
        }
        let weight = self.effective_escalation_weight();
        if !(weight.is_finite() && weight >= 1.0) {
            return Err(ConfigError::invalid(
                "offender.escalation_weight",
                weight,
                "must be finite and at least 1.0",
            ));
        }
        Ok(())
    }
}
