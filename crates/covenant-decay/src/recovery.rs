//! RecoveryModel: logistic restoration of trust after a penalty period.
//!
//! ```text
//! fraction(t) = max_recovery / (1 + e^(−steepness × (t − midpoint)))
//! ```
//!
//! Recovery is slow at first, fastest around `midpoint`, and saturates at
//! `max_recovery`. `compute_recovery` shapes this curve per agent:
//!
//! - historical reliability scales the steepness linearly from 25% (never
//!   reliable) to 100% (always reliable) of the configured value
//! - the breach severity caps the result (critical 0.4, high 0.6,
//!   medium 0.8, low 1.0)
//! - the result is proportional to the trust held before the breach

use covenant_core::config::RecoveryConfig;
use covenant_core::constants::{RELIABILITY_STEEPNESS_CEILING, RELIABILITY_STEEPNESS_FLOOR};
use covenant_core::errors::{ArgumentError, CovenantResult};
use covenant_core::models::Severity;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct RecoveryModel {
    max_recovery: f64,
    steepness: f64,
    midpoint_ms: f64,
}

impl RecoveryModel {
    /// Build a model from validated parameters.
    ///
    /// # Examples
    ///
    /// ```
    /// use covenant_core::config::RecoveryConfig;
    /// use covenant_decay::RecoveryModel;
    ///
    /// let model = RecoveryModel::new(&RecoveryConfig::new(0.9, 0.001, 10_000.0)).unwrap();
    /// let half = model.recovery_fraction(10_000.0).unwrap();
    /// assert!((half - 0.45).abs() < 1e-12);
    /// ```
    pub fn new(config: &RecoveryConfig) -> CovenantResult<Self> {
        config.validate()?;
        Ok(Self {
            max_recovery: config.max_recovery,
            steepness: config.steepness,
            midpoint_ms: config.midpoint_ms,
        })
    }

    pub fn max_recovery(&self) -> f64 {
        self.max_recovery
    }

    pub fn steepness(&self) -> f64 {
        self.steepness
    }

    pub fn midpoint_ms(&self) -> f64 {
        self.midpoint_ms
    }

    /// Fraction of trust restored after `elapsed_ms` (finite, ≥ 0).
    pub fn recovery_fraction(&self, elapsed_ms: f64) -> CovenantResult<f64> {
        let t = ArgumentError::check_non_negative("elapsed_ms", elapsed_ms)?;
        Ok(self.logistic(self.steepness, t))
    }

    /// Trust restored to an agent after `elapsed_ms`, in `[0, 1]`.
    pub fn compute_recovery(
        &self,
        pre_breach_trust: f64,
        severity: Severity,
        historical_reliability: f64,
        elapsed_ms: f64,
    ) -> CovenantResult<f64> {
        let trust = ArgumentError::check_unit_interval("pre_breach_trust", pre_breach_trust)?;
        let reliability =
            ArgumentError::check_unit_interval("historical_reliability", historical_reliability)?;
        let t = ArgumentError::check_non_negative("elapsed_ms", elapsed_ms)?;

        let steepness = self.adjusted_steepness(reliability);
        let fraction = self.logistic(steepness, t);
        let recovered = (fraction * severity.recovery_ceiling() * trust).clamp(0.0, 1.0);

        debug!(
            severity = %severity,
            reliability,
            elapsed_ms = t,
            adjusted_steepness = steepness,
            recovered,
            "recovery computed"
        );
        Ok(recovered)
    }

    /// Elapsed time at which `recovery_fraction` first reaches `target_fraction`.
    ///
    /// Returns 0 for non-positive targets (and for targets already met at
    /// time 0), `f64::INFINITY` for targets the curve never reaches. A NaN
    /// target yields NaN.
    pub fn time_to_recover(&self, target_fraction: f64) -> f64 {
        if target_fraction.is_nan() {
            return f64::NAN;
        }
        if target_fraction <= 0.0 {
            return 0.0;
        }
        if target_fraction >= self.max_recovery {
            return f64::INFINITY;
        }
        let t = self.midpoint_ms - (self.max_recovery / target_fraction - 1.0).ln() / self.steepness;
        t.max(0.0)
    }

    /// Reliability 0 → 25% of the configured steepness, reliability 1 → 100%.
    pub fn adjusted_steepness(&self, historical_reliability: f64) -> f64 {
        let span = RELIABILITY_STEEPNESS_CEILING - RELIABILITY_STEEPNESS_FLOOR;
        self.steepness * (RELIABILITY_STEEPNESS_FLOOR + span * historical_reliability)
    }

    fn logistic(&self, steepness: f64, elapsed_ms: f64) -> f64 {
        self.max_recovery / (1.0 + (-steepness * (elapsed_ms - self.midpoint_ms)).exp())
    }
}

impl Default for RecoveryModel {
    fn default() -> Self {
        let config = RecoveryConfig::default();
        Self {
            max_recovery: config.max_recovery,
            steepness: config.steepness,
            midpoint_ms: config.midpoint_ms,
        }
    }
}
