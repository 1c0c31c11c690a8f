//! Timeout evaluation for lifecycle states.

use chrono::{DateTime, Duration, Utc};

use covenant_core::config::LifecycleConfig;
use covenant_core::constants::TIMEOUT_EVIDENCE_KIND;
use covenant_core::models::{BreachState, EvidenceItem};

/// True when `elapsed` in `state` is strictly past its configured timeout.
/// Always false for states without a timeout.
pub fn has_expired(config: &LifecycleConfig, state: BreachState, elapsed: Duration) -> bool {
    config
        .timeout_for(state)
        .is_some_and(|timeout| elapsed > timeout)
}

/// Synthetic evidence attached to a timeout-driven transition.
pub fn timeout_evidence(state: BreachState, entered_at: DateTime<Utc>, elapsed: Duration) -> EvidenceItem {
    EvidenceItem::new(
        TIMEOUT_EVIDENCE_KIND,
        format!(
            "{state} timed out after {}ms (entered {})",
            elapsed.num_milliseconds(),
            entered_at.to_rfc3339()
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_is_strict() {
        let config = LifecycleConfig {
            detected_timeout_ms: Some(1_000),
            ..LifecycleConfig::default()
        };
        assert!(!has_expired(&config, BreachState::Detected, Duration::milliseconds(1_000)));
        assert!(has_expired(&config, BreachState::Detected, Duration::milliseconds(1_001)));
    }

    #[test]
    fn zero_or_missing_timeout_never_expires() {
        let config = LifecycleConfig {
            detected_timeout_ms: Some(0),
            confirmed_timeout_ms: None,
            remediated_timeout_ms: None,
        };
        let forever = Duration::days(10_000);
        assert!(!has_expired(&config, BreachState::Detected, forever));
        assert!(!has_expired(&config, BreachState::Confirmed, forever));
        assert!(!has_expired(&config, BreachState::Recovered, forever));
    }
}
