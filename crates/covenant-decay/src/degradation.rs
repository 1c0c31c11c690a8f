//! ExponentialDegradation: how much of a breach's consequence reaches an
//! agent `d` hops away from the violator.
//!
//! ```text
//! loss(d) = base_loss × e^(−lambda × d)
//! ```
//!
//! With `base_loss = 0.8`, `lambda = 1.0`:
//! - Distance 0: 0.8
//! - Distance 1: 0.2943
//! - Distance 2: 0.1083
//! - Distance 3: 0.0398

use covenant_core::config::DegradationConfig;
use covenant_core::errors::{ArgumentError, CovenantResult};

/// Stateless exponential decay of trust loss with hop distance.
#[derive(Debug, Clone, PartialEq)]
pub struct ExponentialDegradation {
    base_loss: f64,
    lambda: f64,
}

impl ExponentialDegradation {
    /// Build a model from validated parameters.
    ///
    /// # Examples
    ///
    /// ```
    /// use covenant_core::config::DegradationConfig;
    /// use covenant_decay::ExponentialDegradation;
    ///
    /// let model = ExponentialDegradation::new(&DegradationConfig::new(0.8, 1.0)).unwrap();
    /// let loss = model.compute_loss(1.0).unwrap();
    /// assert!((loss - 0.2943).abs() < 1e-4);
    ///
    /// assert!(ExponentialDegradation::new(&DegradationConfig::new(0.0, 1.0)).is_err());
    /// ```
    pub fn new(config: &DegradationConfig) -> CovenantResult<Self> {
        config.validate()?;
        Ok(Self {
            base_loss: config.base_loss,
            lambda: config.lambda,
        })
    }

    pub fn base_loss(&self) -> f64 {
        self.base_loss
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Loss at `hop_distance` (finite, ≥ 0, fractional allowed).
    pub fn compute_loss(&self, hop_distance: f64) -> CovenantResult<f64> {
        let d = ArgumentError::check_non_negative("hop_distance", hop_distance)?;
        Ok(self.loss_unchecked(d))
    }

    /// `max(0, current_trust − loss(hop_distance))`.
    pub fn degrade(&self, current_trust: f64, hop_distance: f64) -> CovenantResult<f64> {
        let trust = ArgumentError::check_unit_interval("current_trust", current_trust)?;
        let loss = self.compute_loss(hop_distance)?;
        Ok((trust - loss).max(0.0))
    }

    /// Loss at an integer hop distance. Infallible: every `usize` is a valid hop.
    pub fn loss_at_hop(&self, hop: usize) -> f64 {
        self.loss_unchecked(hop as f64)
    }

    /// Loss at every integer hop from 0 through `max_hops`, strictly decreasing.
    pub fn profile(&self, max_hops: u32) -> Vec<f64> {
        (0..=max_hops as usize).map(|d| self.loss_at_hop(d)).collect()
    }

    /// Largest hop distance whose loss is still at least `threshold`.
    ///
    /// `floor(−ln(threshold / base_loss) / lambda)`, or 0 when the loss at the
    /// violator itself is already below `threshold`. Fails when the radius is
    /// too large for a `u64`, which only happens with a vanishing `lambda`.
    pub fn effective_radius(&self, threshold: f64) -> CovenantResult<u64> {
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(ArgumentError::OutOfRange {
                parameter: "threshold",
                value: threshold,
                expected: "a value in (0, 1]",
            }
            .into());
        }
        if self.base_loss < threshold {
            return Ok(0);
        }
        let radius = (-(threshold / self.base_loss).ln() / self.lambda).floor();
        // threshold == base_loss computes as -0.0; normalize to canonical zero.
        let radius = if radius == 0.0 { 0.0 } else { radius };
        // 2^64 is the first float past u64::MAX; `as` would saturate silently.
        if radius >= u64::MAX as f64 {
            return Err(ArgumentError::OutOfRange {
                parameter: "threshold",
                value: threshold,
                expected: "a threshold whose radius fits in u64",
            }
            .into());
        }
        // Floating error at an exact integer boundary can land one hop past
        // the last qualifying distance.
        let hops = radius as u64;
        if hops > 0 && self.loss_unchecked(hops as f64) < threshold {
            return Ok(hops - 1);
        }
        Ok(hops)
    }

    pub(crate) fn loss_unchecked(&self, hop_distance: f64) -> f64 {
        self.base_loss * (-self.lambda * hop_distance).exp()
    }
}

impl Default for ExponentialDegradation {
    fn default() -> Self {
        let config = DegradationConfig::default();
        Self {
            base_loss: config.base_loss,
            lambda: config.lambda,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(base_loss: f64, lambda: f64) -> ExponentialDegradation {
        ExponentialDegradation::new(&DegradationConfig::new(base_loss, lambda)).unwrap()
    }

    #[test]
    fn radius_at_threshold_equal_to_base_loss_is_zero() {
        let m = model(0.5, 2.0);
        let r = m.effective_radius(0.5).unwrap();
        assert_eq!(r, 0);
    }

    #[test]
    fn radius_never_overshoots_an_exact_boundary() {
        // loss(2) == 0.8 e^-2 exactly in real arithmetic.
        let m = model(0.8, 1.0);
        let threshold = m.loss_unchecked(2.0);
        let r = m.effective_radius(threshold).unwrap();
        assert!(m.loss_unchecked(r as f64) >= threshold);
        assert!(r == 1 || r == 2);
    }

    #[test]
    fn default_matches_default_config() {
        let m = ExponentialDegradation::default();
        assert_eq!(m.base_loss(), 0.8);
        assert_eq!(m.lambda(), 1.0);
    }
}
