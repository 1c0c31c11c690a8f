use covenant_core::errors::*;

#[test]
fn argument_checks_accept_valid_values() {
    assert_eq!(ArgumentError::check_unit_interval("x", 0.0).unwrap(), 0.0);
    assert_eq!(ArgumentError::check_unit_interval("x", 1.0).unwrap(), 1.0);
    assert_eq!(ArgumentError::check_non_negative("x", 3.5).unwrap(), 3.5);
    assert_eq!(ArgumentError::check_not_blank("x", " a ").unwrap(), " a ");
}

#[test]
fn argument_checks_reject_invalid_values() {
    assert!(ArgumentError::check_unit_interval("x", 1.01).is_err());
    assert!(ArgumentError::check_unit_interval("x", f64::NAN).is_err());
    assert!(ArgumentError::check_non_negative("x", -0.1).is_err());
    assert!(ArgumentError::check_non_negative("x", f64::INFINITY).is_err());
    assert_eq!(
        ArgumentError::check_not_blank("agent_id", "   ").unwrap_err(),
        ArgumentError::Blank { parameter: "agent_id" }
    );
}

#[test]
fn error_messages_are_descriptive() {
    let err = CovenantError::from(LifecycleError::InvalidTransition {
        breach_id: "b-1".to_string(),
        from: "detected".to_string(),
        to: "remediated".to_string(),
    });
    assert_eq!(
        err.to_string(),
        "invalid transition for breach b-1: detected -> remediated"
    );

    let err = CovenantError::from(ArgumentError::OutOfRange {
        parameter: "hop_distance",
        value: -1.0,
        expected: "a finite value >= 0",
    });
    assert!(err.to_string().contains("hop_distance"));
}

#[test]
fn protocol_errors_are_distinguished() {
    let invalid = CovenantError::from(GraphError::InvalidAttestation {
        attestation_id: "a".to_string(),
        reason: "signature rejected".to_string(),
    });
    assert!(invalid.is_protocol_error());

    let arg = CovenantError::from(ArgumentError::Blank { parameter: "actor" });
    assert!(!arg.is_protocol_error());
}

#[test]
fn every_error_is_a_comparable_value() {
    let errors = [
        CovenantError::from(ConfigError::FileNotFound {
            path: "covenant.toml".to_string(),
        }),
        CovenantError::from(ArgumentError::Blank { parameter: "actor" }),
        CovenantError::from(GraphError::InvalidAttestation {
            attestation_id: "a".to_string(),
            reason: "signature rejected".to_string(),
        }),
        CovenantError::from(LifecycleError::InvalidTransition {
            breach_id: "b-1".to_string(),
            from: "recovered".to_string(),
            to: "detected".to_string(),
        }),
    ];
    for err in &errors {
        assert_eq!(&err.clone(), err);
    }
    assert_ne!(errors[0], errors[1]);
}
