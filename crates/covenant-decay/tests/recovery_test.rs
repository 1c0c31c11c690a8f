use covenant_core::config::RecoveryConfig;
use covenant_core::models::Severity;
use covenant_decay::RecoveryModel;

fn model(max_recovery: f64, steepness: f64, midpoint_ms: f64) -> RecoveryModel {
    RecoveryModel::new(&RecoveryConfig::new(max_recovery, steepness, midpoint_ms)).unwrap()
}

#[test]
fn construction_rejects_invalid_parameters() {
    for (max, k, mid) in [
        (0.0, 0.01, 100.0),
        (1.1, 0.01, 100.0),
        (0.5, 0.0, 100.0),
        (0.5, -0.1, 100.0),
        (0.5, 0.01, 0.0),
        (0.5, 0.01, -5.0),
        (0.5, f64::NAN, 100.0),
    ] {
        assert!(
            RecoveryModel::new(&RecoveryConfig::new(max, k, mid)).is_err(),
            "accepted max={max}, steepness={k}, midpoint={mid}"
        );
    }
}

#[test]
fn fraction_is_half_of_max_at_midpoint() {
    for (max, k, mid) in [(1.0, 0.01, 1_000.0), (0.7, 0.5, 20.0), (0.3, 1e-6, 5e6)] {
        let m = model(max, k, mid);
        let half = m.recovery_fraction(mid).unwrap();
        assert!((half - max / 2.0).abs() < 1e-12);
    }
}

#[test]
fn fraction_is_near_zero_at_start_and_near_max_late() {
    let m = model(0.9, 0.01, 1_000.0);
    assert!(m.recovery_fraction(0.0).unwrap() < 1e-4);
    let late = m.recovery_fraction(10_000.0).unwrap();
    assert!(late <= 0.9);
    assert!((late - 0.9).abs() < 1e-6);
}

#[test]
fn fraction_rejects_negative_elapsed() {
    let m = model(1.0, 0.01, 1_000.0);
    assert!(m.recovery_fraction(-1.0).is_err());
    assert!(m.recovery_fraction(f64::NAN).is_err());
}

#[test]
fn time_to_recover_inverts_fraction() {
    let m = model(0.8, 0.002, 5_000.0);
    for t in [1_000.0, 3_000.0, 5_000.0, 7_500.0, 9_000.0] {
        let fraction = m.recovery_fraction(t).unwrap();
        let back = m.time_to_recover(fraction);
        assert!((back - t).abs() < 1e-6 * t.max(1.0), "t={t}, back={back}");
    }
}

#[test]
fn time_to_recover_boundaries() {
    let m = model(0.8, 0.002, 5_000.0);
    assert_eq!(m.time_to_recover(0.0), 0.0);
    assert_eq!(m.time_to_recover(-0.3), 0.0);
    assert_eq!(m.time_to_recover(0.8), f64::INFINITY);
    assert_eq!(m.time_to_recover(0.95), f64::INFINITY);
    assert!(m.time_to_recover(f64::NAN).is_nan());
}

#[test]
fn time_to_recover_floors_at_zero_for_targets_met_immediately() {
    // Shallow curve: fraction(0) is well above zero.
    let m = model(1.0, 0.0001, 100.0);
    let at_zero = m.recovery_fraction(0.0).unwrap();
    assert_eq!(m.time_to_recover(at_zero / 2.0), 0.0);
}

#[test]
fn severity_ceilings_order_recovery() {
    let m = model(1.0, 0.01, 1_000.0);
    let at = |severity| m.compute_recovery(1.0, severity, 0.8, 5_000.0).unwrap();
    let critical = at(Severity::Critical);
    let high = at(Severity::High);
    let medium = at(Severity::Medium);
    let low = at(Severity::Low);
    assert!(critical < high);
    assert!(high < medium);
    assert!(medium < low);
}

#[test]
fn recovery_scales_with_pre_breach_trust() {
    let m = model(1.0, 0.01, 1_000.0);
    let full = m.compute_recovery(1.0, Severity::Low, 1.0, 2_000.0).unwrap();
    let half = m.compute_recovery(0.5, Severity::Low, 1.0, 2_000.0).unwrap();
    assert!((half - full / 2.0).abs() < 1e-12);
    assert_eq!(m.compute_recovery(0.0, Severity::Low, 1.0, 2_000.0).unwrap(), 0.0);
}

#[test]
fn reliable_agents_recover_faster_after_midpoint_and_slower_before() {
    let m = model(1.0, 0.01, 1_000.0);
    let after = 1_500.0;
    let before = 500.0;
    let reliable_after = m.compute_recovery(1.0, Severity::Low, 1.0, after).unwrap();
    let unreliable_after = m.compute_recovery(1.0, Severity::Low, 0.0, after).unwrap();
    assert!(reliable_after > unreliable_after);

    let reliable_before = m.compute_recovery(1.0, Severity::Low, 1.0, before).unwrap();
    let unreliable_before = m.compute_recovery(1.0, Severity::Low, 0.0, before).unwrap();
    assert!(reliable_before < unreliable_before);
}

#[test]
fn adjusted_steepness_interpolates_linearly() {
    let m = model(1.0, 0.04, 1_000.0);
    assert!((m.adjusted_steepness(0.0) - 0.01).abs() < 1e-15);
    assert!((m.adjusted_steepness(1.0) - 0.04).abs() < 1e-15);
    assert!((m.adjusted_steepness(0.5) - 0.025).abs() < 1e-15);
}

#[test]
fn compute_recovery_rejects_out_of_range_inputs() {
    let m = model(1.0, 0.01, 1_000.0);
    assert!(m.compute_recovery(1.2, Severity::Low, 0.5, 10.0).is_err());
    assert!(m.compute_recovery(0.5, Severity::Low, -0.1, 10.0).is_err());
    assert!(m.compute_recovery(0.5, Severity::Low, 0.5, -10.0).is_err());
}
