//! Breadth-first breach propagation.
//!
//! The violator takes the severity floor merged into its current status. Each
//! further hop takes a floor one level milder than the hop before it; once
//! that floor would be `trusted` the walk stops. A node is visited at most
//! once per breach, so diamonds, duplicate edges and cycles are all safe.

use std::collections::{HashSet, VecDeque};

use covenant_core::models::{
    status_for_severity, worse_status, BreachAttestation, BreachEvent, TrustStatus,
};
use covenant_decay::ExponentialDegradation;
use covenant_observability::tracing_setup::events;
use petgraph::stable_graph::NodeIndex;

use crate::graph::IndexedTrustGraph;
use crate::listeners::ListenerRegistry;

/// Apply a verified attestation to `graph`.
///
/// Returns events ordered by non-decreasing depth. The violator always gets
/// an event; dependents only when their status actually changed. Listeners
/// see each event right after its node was updated.
pub fn propagate(
    graph: &mut IndexedTrustGraph,
    attestation: &BreachAttestation,
    degradation: &ExponentialDegradation,
    listeners: &ListenerRegistry,
) -> Vec<BreachEvent> {
    let floor = status_for_severity(attestation.severity);
    let origin = graph.ensure_node(&attestation.violator);
    let mut emitted = Vec::new();

    let (previous, new_status) = match graph.graph.node_weight_mut(origin) {
        Some(state) => {
            let previous = state.status;
            state.status = worse_status(previous, floor);
            state.breach_count = state.breach_count.saturating_add(1);
            state.last_breach_at = Some(attestation.reported_at);
            (previous, state.status)
        }
        None => return emitted,
    };
    emit(
        &mut emitted,
        listeners,
        BreachEvent {
            affected_agent: attestation.violator.clone(),
            previous_status: previous,
            new_status,
            propagation_depth: 0,
            causing_attestation_id: attestation.id.clone(),
            trust_loss: degradation.loss_at_hop(0),
        },
    );

    let mut visited = HashSet::new();
    visited.insert(origin);

    let mut queue: VecDeque<(NodeIndex, usize, TrustStatus)> = VecDeque::new();
    queue.push_back((origin, 0, floor));

    while let Some((current, depth, current_floor)) = queue.pop_front() {
        let target = match current_floor.milder() {
            Some(TrustStatus::Trusted) | None => continue,
            Some(target) => target,
        };
        let next_depth = depth + 1;

        for dependent in graph.dependents(current) {
            if !visited.insert(dependent) {
                continue;
            }
            if let Some(event) = apply_floor(graph, dependent, target, next_depth, attestation, degradation) {
                emit(&mut emitted, listeners, event);
            }
            queue.push_back((dependent, next_depth, target));
        }
    }

    emitted
}

/// Merge `target` into one dependent. `Some(event)` only if its status moved.
fn apply_floor(
    graph: &mut IndexedTrustGraph,
    idx: NodeIndex,
    target: TrustStatus,
    depth: usize,
    attestation: &BreachAttestation,
    degradation: &ExponentialDegradation,
) -> Option<BreachEvent> {
    let state = graph.graph.node_weight_mut(idx)?;
    let previous = state.status;
    let merged = worse_status(previous, target);
    if merged == previous {
        return None;
    }
    state.status = merged;
    Some(BreachEvent {
        affected_agent: state.identity_hash.clone(),
        previous_status: previous,
        new_status: merged,
        propagation_depth: depth,
        causing_attestation_id: attestation.id.clone(),
        trust_loss: degradation.loss_at_hop(depth),
    })
}

fn emit(emitted: &mut Vec<BreachEvent>, listeners: &ListenerRegistry, event: BreachEvent) {
    if event.status_changed() {
        events::status_changed(
            event.affected_agent.as_str(),
            event.previous_status.name(),
            event.new_status.name(),
            event.propagation_depth,
        );
    }
    listeners.notify(&event);
    emitted.push(event);
}
