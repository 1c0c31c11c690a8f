use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use covenant_core::config::LifecycleConfig;
use covenant_core::constants::SYSTEM_ACTOR;
use covenant_core::errors::{ArgumentError, CovenantResult, LifecycleError};
use covenant_core::models::{BreachState, EvidenceItem, Transition};
use covenant_observability::tracing_setup::events;

use super::timeouts;

/// Lifecycle record of a single breach investigation.
///
/// Transitions are append-only; the entry time of every visited state is kept
/// so the investigation can be reconstructed afterwards.
#[derive(Debug, Clone)]
pub struct BreachStateMachine {
    breach_id: String,
    state: BreachState,
    entered_at: BTreeMap<BreachState, DateTime<Utc>>,
    transitions: Vec<Transition>,
    config: LifecycleConfig,
}

impl BreachStateMachine {
    /// Start a lifecycle in `detected`, entered now.
    pub fn new(breach_id: &str, config: LifecycleConfig) -> CovenantResult<Self> {
        Self::new_at(breach_id, config, Utc::now())
    }

    /// Start a lifecycle in `detected`, entered at `now`.
    pub fn new_at(breach_id: &str, config: LifecycleConfig, now: DateTime<Utc>) -> CovenantResult<Self> {
        ArgumentError::check_not_blank("breach_id", breach_id)?;
        config.validate()?;
        let mut entered_at = BTreeMap::new();
        entered_at.insert(BreachState::Detected, now);
        debug!(breach_id, "breach lifecycle opened");
        Ok(Self {
            breach_id: breach_id.to_string(),
            state: BreachState::Detected,
            entered_at,
            transitions: Vec::new(),
            config,
        })
    }

    pub fn breach_id(&self) -> &str {
        &self.breach_id
    }

    pub fn current_state(&self) -> BreachState {
        self.state
    }

    /// The only state a transition may target next, `None` once recovered.
    pub fn next_state(&self) -> Option<BreachState> {
        self.state.next()
    }

    pub fn is_resolved(&self) -> bool {
        self.state == BreachState::Recovered
    }

    pub fn transition(
        &mut self,
        to: BreachState,
        actor: &str,
        evidence: Vec<EvidenceItem>,
    ) -> CovenantResult<()> {
        self.transition_at(to, actor, evidence, Utc::now())
    }

    /// Move to `to`, which must be exactly the next state.
    ///
    /// On error nothing is recorded.
    pub fn transition_at(
        &mut self,
        to: BreachState,
        actor: &str,
        evidence: Vec<EvidenceItem>,
        now: DateTime<Utc>,
    ) -> CovenantResult<()> {
        ArgumentError::check_not_blank("actor", actor)?;
        if self.state.next() != Some(to) {
            return Err(LifecycleError::InvalidTransition {
                breach_id: self.breach_id.clone(),
                from: self.state.to_string(),
                to: to.to_string(),
            }
            .into());
        }
        self.commit(to, actor, evidence, now);
        Ok(())
    }

    pub fn check_timeouts(&mut self, actor_override: Option<&str>) -> CovenantResult<Option<BreachState>> {
        self.check_timeouts_at(Utc::now(), actor_override)
    }

    /// Advance one step if the current state has outlived its timeout.
    ///
    /// The step is attributed to `actor_override`, or the system actor when
    /// none is given, and carries timeout evidence.
    pub fn check_timeouts_at(
        &mut self,
        now: DateTime<Utc>,
        actor_override: Option<&str>,
    ) -> CovenantResult<Option<BreachState>> {
        let actor = match actor_override {
            Some(actor) => ArgumentError::check_not_blank("actor_override", actor)?,
            None => SYSTEM_ACTOR,
        };
        let Some(next) = self.state.next() else {
            return Ok(None);
        };
        let elapsed = self.time_in_current_state_at(now);
        if !timeouts::has_expired(&self.config, self.state, elapsed) {
            return Ok(None);
        }

        let entered_at = self.entered_at_current();
        events::lifecycle_timeout(&self.breach_id, self.state.name(), elapsed.num_milliseconds());
        let evidence = vec![timeouts::timeout_evidence(self.state, entered_at, elapsed)];
        self.commit(next, actor, evidence, now);
        Ok(Some(next))
    }

    pub fn time_in_current_state(&self) -> Duration {
        self.time_in_current_state_at(Utc::now())
    }

    /// Time since the current state was entered. Negative if `now` precedes it.
    pub fn time_in_current_state_at(&self, now: DateTime<Utc>) -> Duration {
        now - self.entered_at_current()
    }

    /// When `state` was entered, `None` if it has not been reached.
    pub fn get_state_timestamp(&self, state: BreachState) -> Option<DateTime<Utc>> {
        self.entered_at.get(&state).copied()
    }

    /// Owned copy of the transition history, oldest first.
    pub fn get_transitions(&self) -> Vec<Transition> {
        self.transitions.clone()
    }

    fn entered_at_current(&self) -> DateTime<Utc> {
        // Every state the machine is in was recorded on entry.
        self.entered_at
            .get(&self.state)
            .copied()
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    fn commit(&mut self, to: BreachState, actor: &str, evidence: Vec<EvidenceItem>, now: DateTime<Utc>) {
        let from = self.state;
        self.transitions.push(Transition {
            from,
            to,
            actor: actor.to_string(),
            evidence,
            timestamp: now,
        });
        self.entered_at.insert(to, now);
        self.state = to;
        events::lifecycle_transition(&self.breach_id, from.name(), to.name(), actor);
    }
}
