use chrono::{TimeZone, Utc};
use covenant_core::models::*;
use proptest::prelude::*;

fn arb_ranked_status() -> impl Strategy<Value = TrustStatus> {
    prop_oneof![
        Just(TrustStatus::Trusted),
        Just(TrustStatus::Degraded),
        Just(TrustStatus::Restricted),
        Just(TrustStatus::Revoked),
    ]
}

fn arb_any_status() -> impl Strategy<Value = TrustStatus> {
    prop_oneof![arb_ranked_status(), Just(TrustStatus::Unknown)]
}

#[test]
fn severity_floors_map_to_statuses() {
    assert_eq!(status_for_severity(Severity::Critical), TrustStatus::Revoked);
    assert_eq!(status_for_severity(Severity::High), TrustStatus::Restricted);
    assert_eq!(status_for_severity(Severity::Medium), TrustStatus::Degraded);
    assert_eq!(status_for_severity(Severity::Low), TrustStatus::Trusted);
}

#[test]
fn milder_walks_down_to_trusted_then_stops() {
    let mut chain = vec![TrustStatus::Revoked];
    while let Some(next) = chain.last().and_then(|s| s.milder()) {
        chain.push(next);
    }
    assert_eq!(
        chain,
        vec![
            TrustStatus::Revoked,
            TrustStatus::Restricted,
            TrustStatus::Degraded,
            TrustStatus::Trusted,
        ]
    );
    assert_eq!(TrustStatus::Unknown.milder(), None);
}

#[test]
fn unknown_is_never_produced_by_merge() {
    assert_eq!(
        worse_status(TrustStatus::Unknown, TrustStatus::Degraded),
        TrustStatus::Degraded
    );
    assert_eq!(
        worse_status(TrustStatus::Unknown, TrustStatus::Unknown),
        TrustStatus::Trusted
    );
}

#[test]
fn severity_weights_and_ceilings_are_ordered() {
    assert_eq!(Severity::Critical.weight(), 4);
    assert_eq!(Severity::High.weight(), 3);
    assert_eq!(Severity::Medium.weight(), 2);
    assert_eq!(Severity::Low.weight(), 1);

    assert!(Severity::Critical.recovery_ceiling() < Severity::High.recovery_ceiling());
    assert!(Severity::High.recovery_ceiling() < Severity::Medium.recovery_ceiling());
    assert!(Severity::Medium.recovery_ceiling() < Severity::Low.recovery_ceiling());
}

#[test]
fn enums_parse_their_display_names() {
    for status in TrustStatus::ALL {
        assert_eq!(status.to_string().parse::<TrustStatus>().unwrap(), status);
    }
    for severity in Severity::ALL {
        assert_eq!(severity.to_string().parse::<Severity>().unwrap(), severity);
    }
    for state in BreachState::ALL {
        assert_eq!(state.to_string().parse::<BreachState>().unwrap(), state);
    }
    for level in PenaltyLevel::ALL {
        assert_eq!(level.to_string().parse::<PenaltyLevel>().unwrap(), level);
    }
    let err = "catastrophic".parse::<Severity>().unwrap_err();
    assert_eq!(err.to_string(), "unknown severity: catastrophic");
}

#[test]
fn serde_uses_snake_case_names() {
    assert_eq!(serde_json::to_string(&TrustStatus::Revoked).unwrap(), "\"revoked\"");
    assert_eq!(serde_json::to_string(&PenaltyLevel::Restriction).unwrap(), "\"restriction\"");
    assert_eq!(serde_json::to_string(&BreachState::Remediated).unwrap(), "\"remediated\"");
    let id: IdentityHash = serde_json::from_str("\"abc\"").unwrap();
    assert_eq!(id, IdentityHash::from("abc"));
}

#[test]
fn breach_state_is_linear() {
    assert_eq!(BreachState::Detected.next(), Some(BreachState::Confirmed));
    assert_eq!(BreachState::Confirmed.next(), Some(BreachState::Remediated));
    assert_eq!(BreachState::Remediated.next(), Some(BreachState::Recovered));
    assert!(BreachState::Recovered.is_terminal());
}

#[test]
fn breach_record_pattern_and_fresh_ids() {
    let ts = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    let a = BreachRecord::new(Severity::Low, ts, "db", "write");
    let b = BreachRecord::new(Severity::Low, ts, "db", "write");
    assert_eq!(a.pattern(), "db:write");
    assert_ne!(a.breach_id, b.breach_id);
}

fn sample_attestation() -> BreachAttestation {
    BreachAttestation {
        id: "att-1".to_string(),
        covenant_id: "cov-1".to_string(),
        violator: IdentityHash::from("agent-a"),
        constraint: "deny write on '/secrets/**'".to_string(),
        severity: Severity::High,
        action: "write".to_string(),
        resource: "/secrets/key".to_string(),
        evidence_hash: "ev".to_string(),
        reporter_public_key: "pk".to_string(),
        reporter_signature: "sig".to_string(),
        affected_covenants: vec!["cov-1".to_string()],
        reported_at: Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap(),
    }
}

#[test]
fn content_id_is_stable_and_ignores_id_and_signature() {
    let a = sample_attestation();
    let mut b = a.clone();
    b.id = "other".to_string();
    b.reporter_signature = "other-sig".to_string();
    assert_eq!(a.content_id(), b.content_id());
    assert_eq!(a.content_id().len(), 64);

    let mut c = a.clone();
    c.severity = Severity::Critical;
    assert_ne!(a.content_id(), c.content_id());
}

#[test]
fn content_id_separates_adjacent_fields() {
    let mut a = sample_attestation();
    a.action = "wr".to_string();
    a.resource = "ite/x".to_string();
    let mut b = sample_attestation();
    b.action = "write".to_string();
    b.resource = "/x".to_string();
    assert_ne!(a.content_id(), b.content_id());
}

proptest! {
    #[test]
    fn worse_status_is_commutative(a in arb_any_status(), b in arb_any_status()) {
        prop_assert_eq!(worse_status(a, b), worse_status(b, a));
    }

    #[test]
    fn worse_status_is_idempotent(a in arb_ranked_status(), b in arb_ranked_status()) {
        let merged = worse_status(a, b);
        prop_assert_eq!(worse_status(merged, b), merged);
        prop_assert_eq!(worse_status(a, a), a);
    }

    #[test]
    fn worse_status_never_improves(a in arb_ranked_status(), b in arb_ranked_status()) {
        let merged = worse_status(a, b);
        prop_assert!(!a.is_worse_than(merged));
        prop_assert!(!b.is_worse_than(merged));
        prop_assert_ne!(merged, TrustStatus::Unknown);
    }
}
