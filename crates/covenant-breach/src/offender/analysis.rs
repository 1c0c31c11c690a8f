//! Pure scoring functions over a slice of breach records.

use std::collections::HashMap;

use covenant_core::config::OffenderConfig;
use covenant_core::constants::ESCALATION_MIN_POINTS;
use covenant_core::models::{BreachRecord, PenaltyLevel};

/// Penalty for `recent` breaches. Each threshold is inclusive.
pub fn penalty_for(config: &OffenderConfig, recent: usize) -> PenaltyLevel {
    let recent = u64::try_from(recent).unwrap_or(u64::MAX);
    if recent >= u64::from(config.revocation_threshold) {
        PenaltyLevel::Revocation
    } else if recent >= u64::from(config.restriction_threshold) {
        PenaltyLevel::Restriction
    } else if recent >= u64::from(config.warning_threshold) {
        PenaltyLevel::Warning
    } else {
        PenaltyLevel::None
    }
}

/// True if the last three breaches by time have strictly rising severity weight.
pub fn is_escalating(recent: &[&BreachRecord]) -> bool {
    if recent.len() < ESCALATION_MIN_POINTS {
        return false;
    }
    let mut ordered: Vec<&BreachRecord> = recent.to_vec();
    ordered.sort_by_key(|r| r.timestamp);
    ordered[ordered.len() - ESCALATION_MIN_POINTS..]
        .windows(2)
        .all(|w| w[0].severity.weight() < w[1].severity.weight())
}

/// Sum of severity weights, scaled by `escalation_weight` when escalating.
pub fn penalty_score(recent: &[&BreachRecord], escalating: bool, escalation_weight: f64) -> f64 {
    let base: f64 = recent.iter().map(|r| f64::from(r.severity.weight())).sum();
    if escalating {
        base * escalation_weight
    } else {
        base
    }
}

/// Most frequent `"resource:action"`; the first pattern seen wins a tie.
pub fn dominant_pattern(recent: &[&BreachRecord]) -> Option<String> {
    // pattern → (index of first occurrence, count)
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    for (i, record) in recent.iter().enumerate() {
        counts.entry(record.pattern()).or_insert((i, 0)).1 += 1;
    }
    counts
        .into_iter()
        .max_by(|(_, (first_a, count_a)), (_, (first_b, count_b))| {
            count_a.cmp(count_b).then(first_b.cmp(first_a))
        })
        .map(|(pattern, _)| pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use covenant_core::models::Severity;

    fn rec(minutes: i64, severity: Severity, resource: &str) -> BreachRecord {
        let base = Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
        BreachRecord::new(severity, base + Duration::minutes(minutes), resource, "write")
    }

    #[test]
    fn escalation_uses_time_order_not_insertion_order() {
        let records = [
            rec(3, Severity::Critical, "r"),
            rec(1, Severity::Low, "r"),
            rec(2, Severity::Medium, "r"),
        ];
        let refs: Vec<&BreachRecord> = records.iter().collect();
        assert!(is_escalating(&refs));
    }

    #[test]
    fn escalation_needs_strict_increase() {
        let records = [
            rec(1, Severity::Low, "r"),
            rec(2, Severity::Medium, "r"),
            rec(3, Severity::Medium, "r"),
        ];
        let refs: Vec<&BreachRecord> = records.iter().collect();
        assert!(!is_escalating(&refs));
        assert!(!is_escalating(&refs[..2]));
    }

    #[test]
    fn escalation_only_looks_at_last_three() {
        let records = [
            rec(1, Severity::Critical, "r"),
            rec(2, Severity::Low, "r"),
            rec(3, Severity::Medium, "r"),
            rec(4, Severity::High, "r"),
        ];
        let refs: Vec<&BreachRecord> = records.iter().collect();
        assert!(is_escalating(&refs));
    }

    #[test]
    fn dominant_pattern_tie_goes_to_first_seen() {
        let records = [
            rec(1, Severity::Low, "b"),
            rec(2, Severity::Low, "a"),
            rec(3, Severity::Low, "a"),
            rec(4, Severity::Low, "b"),
        ];
        let refs: Vec<&BreachRecord> = records.iter().collect();
        assert_eq!(dominant_pattern(&refs).as_deref(), Some("b:write"));
        assert_eq!(dominant_pattern(&[]), None);
    }

    #[test]
    fn dominant_pattern_over_many_distinct_patterns() {
        let mut records: Vec<BreachRecord> = (0..5_000)
            .map(|i| rec(i, Severity::Low, &format!("/r{i}")))
            .collect();
        // Three-way tie at two occurrences each; "/r4000" was seen first.
        for resource in ["/r4500", "/r4000", "/r4999"] {
            records.push(rec(6_000, Severity::Low, resource));
        }
        let refs: Vec<&BreachRecord> = records.iter().collect();
        assert_eq!(dominant_pattern(&refs).as_deref(), Some("/r4000:write"));

        records.push(rec(7_000, Severity::Low, "/r4999"));
        let refs: Vec<&BreachRecord> = records.iter().collect();
        assert_eq!(dominant_pattern(&refs).as_deref(), Some("/r4999:write"));
    }

    #[test]
    fn penalty_thresholds_are_inclusive() {
        let config = OffenderConfig::new(2, 4, 7);
        assert_eq!(penalty_for(&config, 1), PenaltyLevel::None);
        assert_eq!(penalty_for(&config, 2), PenaltyLevel::Warning);
        assert_eq!(penalty_for(&config, 4), PenaltyLevel::Restriction);
        assert_eq!(penalty_for(&config, 7), PenaltyLevel::Revocation);
        assert_eq!(penalty_for(&config, 70), PenaltyLevel::Revocation);
    }
}
