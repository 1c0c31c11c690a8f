//! Structured log events for key trust operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a completed breach propagation.
pub fn breach_processed(attestation_id: &str, violator: &str, severity: &str, events: usize) {
    tracing::info!(
        event = "breach_processed",
        attestation_id = %attestation_id,
        violator = %violator,
        severity = %severity,
        events = events,
        "breach processed"
    );
}

/// Log a trust status change on one node.
pub fn status_changed(agent: &str, previous: &str, new: &str, depth: usize) {
    tracing::debug!(
        event = "status_changed",
        agent = %agent,
        previous = %previous,
        new = %new,
        depth = depth,
        "trust status changed"
    );
}

/// Log an attestation the verifier rejected or failed on.
pub fn attestation_rejected(attestation_id: &str, reason: &str) {
    tracing::warn!(
        event = "attestation_rejected",
        attestation_id = %attestation_id,
        reason = %reason,
        "attestation rejected"
    );
}

/// Log an administrative status override.
pub fn status_reset(agent: &str, previous: &str, new: &str) {
    tracing::info!(
        event = "status_reset",
        agent = %agent,
        previous = %previous,
        new = %new,
        "trust status reset"
    );
}

/// Log a breach lifecycle transition.
pub fn lifecycle_transition(breach_id: &str, from: &str, to: &str, actor: &str) {
    tracing::info!(
        event = "lifecycle_transition",
        breach_id = %breach_id,
        from = %from,
        to = %to,
        actor = %actor,
        "breach lifecycle transition"
    );
}

/// Log a timeout-driven lifecycle transition.
pub fn lifecycle_timeout(breach_id: &str, state: &str, elapsed_ms: i64) {
    tracing::warn!(
        event = "lifecycle_timeout",
        breach_id = %breach_id,
        state = %state,
        elapsed_ms = elapsed_ms,
        "breach lifecycle timeout fired"
    );
}

/// Log an agent whose analysis produced a penalty.
pub fn offender_flagged(agent_id: &str, penalty: &str, recent: usize, escalating: bool) {
    tracing::warn!(
        event = "offender_flagged",
        agent_id = %agent_id,
        penalty = %penalty,
        recent = recent,
        escalating = escalating,
        "repeat offender flagged"
    );
}
