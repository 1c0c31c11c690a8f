//! Trust graph engine: owns the node and edge set of one trust domain and
//! applies verified breach attestations to it.

use covenant_core::config::{CovenantConfig, DegradationConfig};
use covenant_core::errors::{ArgumentError, CovenantResult, GraphError};
use covenant_core::models::{BreachAttestation, BreachEvent, GraphSnapshot, IdentityHash, TrustNode, TrustStatus};
use covenant_core::traits::AttestationVerifier;
use covenant_decay::ExponentialDegradation;
use covenant_observability::tracing_setup::events;
use tracing::{debug, instrument};

use crate::graph::IndexedTrustGraph;
use crate::listeners::{BreachListener, ListenerRegistry};
use crate::{propagation, traversal};

/// In-memory trust graph for one covenant domain.
///
/// Mutation goes through `&mut self`; hosts sharing one graph across tasks
/// wrap it in a single lock.
pub struct TrustGraph<V: AttestationVerifier> {
    graph: IndexedTrustGraph,
    verifier: V,
    degradation: ExponentialDegradation,
    listeners: ListenerRegistry,
}

impl<V: AttestationVerifier> TrustGraph<V> {
    /// Empty graph using the default degradation model.
    pub fn new(verifier: V) -> Self {
        Self::with_degradation(verifier, ExponentialDegradation::default())
    }

    pub fn with_degradation(verifier: V, degradation: ExponentialDegradation) -> Self {
        Self {
            graph: IndexedTrustGraph::new(),
            verifier,
            degradation,
            listeners: ListenerRegistry::new(),
        }
    }

    /// Build from the `[degradation]` section of a full configuration.
    pub fn from_config(verifier: V, config: &CovenantConfig) -> CovenantResult<Self> {
        Self::from_degradation_config(verifier, &config.degradation)
    }

    pub fn from_degradation_config(verifier: V, config: &DegradationConfig) -> CovenantResult<Self> {
        let degradation = ExponentialDegradation::new(config)?;
        Ok(Self::with_degradation(verifier, degradation))
    }

    /// Record that `child` depends on `parent`. Creates either node if it is
    /// new; registering an existing edge again changes nothing.
    pub fn register_dependency(&mut self, parent: &str, child: &str) {
        let parent_idx = self.graph.ensure_node(&IdentityHash::from(parent));
        let child_idx = self.graph.ensure_node(&IdentityHash::from(child));
        if self.graph.add_dependency(parent_idx, child_idx) {
            debug!(parent, child, "dependency registered");
        }
    }

    /// Verify `attestation` and propagate its consequences.
    ///
    /// Fails with [`GraphError::InvalidAttestation`] when the verifier says no
    /// or errors; the graph is untouched in that case.
    #[instrument(skip_all, fields(attestation_id = %attestation.id, violator = %attestation.violator, severity = %attestation.severity))]
    pub async fn process_breach(
        &mut self,
        attestation: &BreachAttestation,
    ) -> CovenantResult<Vec<BreachEvent>> {
        let reason = match self.verifier.verify(attestation).await {
            Ok(true) => None,
            Ok(false) => Some("signature verification failed".to_string()),
            Err(e) => Some(e.to_string()),
        };
        if let Some(reason) = reason {
            events::attestation_rejected(&attestation.id, &reason);
            return Err(GraphError::InvalidAttestation {
                attestation_id: attestation.id.clone(),
                reason,
            }
            .into());
        }

        let emitted = propagation::propagate(
            &mut self.graph,
            attestation,
            &self.degradation,
            &self.listeners,
        );
        events::breach_processed(
            &attestation.id,
            attestation.violator.as_str(),
            attestation.severity.name(),
            emitted.len(),
        );
        Ok(emitted)
    }

    /// Current status, or `unknown` when no node exists for `id`.
    pub fn get_status(&self, id: &str) -> TrustStatus {
        self.graph
            .state(id)
            .map(|s| s.status)
            .unwrap_or(TrustStatus::Unknown)
    }

    pub fn is_trusted(&self, id: &str) -> bool {
        self.get_status(id) == TrustStatus::Trusted
    }

    /// Transitive dependents of `id`, breadth-first, excluding `id`.
    pub fn get_dependents(&self, id: &str) -> Vec<IdentityHash> {
        traversal::transitive_dependents(&self.graph, id)
    }

    /// Direct dependencies of `id` only.
    pub fn get_dependencies(&self, id: &str) -> Vec<IdentityHash> {
        traversal::direct_dependencies(&self.graph, id)
    }

    /// Administrative override of a node's status. Leaves breach history alone.
    ///
    /// Returns `Ok(false)` when `id` has no node. `unknown` is reserved for
    /// absent nodes and cannot be assigned.
    pub fn reset_status(&mut self, id: &str, status: TrustStatus) -> CovenantResult<bool> {
        if status == TrustStatus::Unknown {
            return Err(ArgumentError::Unsupported {
                parameter: "status",
                value: status.to_string(),
                reason: "reserved for absent nodes",
            }
            .into());
        }
        let Some(state) = self.graph.state_mut(id) else {
            return Ok(false);
        };
        let previous = state.status;
        state.status = status;
        events::status_reset(id, previous.name(), status.name());
        Ok(true)
    }

    pub fn on_breach(&mut self, listener: BreachListener) {
        self.listeners.add(listener);
    }

    /// Remove the first registration of `listener`. Returns false if it was
    /// never registered.
    pub fn off_breach(&mut self, listener: &BreachListener) -> bool {
        self.listeners.remove(listener)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Owned copy of one node.
    pub fn get_node(&self, id: &str) -> Option<TrustNode> {
        self.graph
            .get_node(id)
            .and_then(|idx| self.graph.snapshot_node(idx))
    }

    /// Owned copy of the whole graph.
    pub fn export(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self.graph.snapshot_nodes(),
            edges: self.graph.snapshot_edges(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn degradation(&self) -> &ExponentialDegradation {
        &self.degradation
    }
}

impl<V: AttestationVerifier + std::fmt::Debug> std::fmt::Debug for TrustGraph<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrustGraph")
            .field("nodes", &self.graph.node_count())
            .field("edges", &self.graph.edge_count())
            .field("verifier", &self.verifier)
            .field("degradation", &self.degradation)
            .field("listeners", &self.listeners)
            .finish()
    }
}
