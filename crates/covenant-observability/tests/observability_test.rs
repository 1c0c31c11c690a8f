use covenant_core::config::ObservabilityConfig;
use covenant_observability::{events, init_tracing_from_config, init_tracing_with_filter};

#[test]
fn repeated_initialization_is_harmless() {
    init_tracing_with_filter("debug");
    init_tracing_with_filter("info");
    init_tracing_from_config(&ObservabilityConfig::default());
}

#[test]
fn events_can_be_emitted_without_a_subscriber() {
    events::breach_processed("att-1", "agent-a", "critical", 3);
    events::status_changed("agent-b", "trusted", "restricted", 1);
    events::attestation_rejected("att-2", "signature rejected");
    events::status_reset("agent-a", "revoked", "trusted");
    events::lifecycle_transition("b-1", "detected", "confirmed", "auditor");
    events::lifecycle_timeout("b-1", "confirmed", 61_000);
    events::offender_flagged("agent-a", "warning", 2, false);
}

#[test]
fn events_are_captured_by_a_scoped_subscriber() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        events::offender_flagged("agent-z", "revocation", 9, true);
    });
}
