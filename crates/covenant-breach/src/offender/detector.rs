use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::debug;

use covenant_core::config::OffenderConfig;
use covenant_core::errors::{ArgumentError, CovenantResult};
use covenant_core::models::{BreachRecord, OffenderProfile, PenaltyLevel};
use covenant_observability::tracing_setup::events;

use super::analysis;

/// Keeps breach history per agent and scores it against the configured
/// thresholds.
#[derive(Debug, Clone)]
pub struct RepeatOffenderDetector {
    config: OffenderConfig,
    /// Agent id → breach records, in insertion order.
    history: BTreeMap<String, Vec<BreachRecord>>,
}

impl RepeatOffenderDetector {
    pub fn new(config: OffenderConfig) -> CovenantResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            history: BTreeMap::new(),
        })
    }

    pub fn config(&self) -> &OffenderConfig {
        &self.config
    }

    /// Append a copy of `record` to `agent_id`'s history.
    ///
    /// Returns the agent's new penalty when this record moved it to a
    /// different level, `None` otherwise.
    pub fn record_breach(
        &mut self,
        agent_id: &str,
        record: &BreachRecord,
    ) -> CovenantResult<Option<PenaltyLevel>> {
        self.record_breach_at(agent_id, record, Utc::now())
    }

    pub fn record_breach_at(
        &mut self,
        agent_id: &str,
        record: &BreachRecord,
        now: DateTime<Utc>,
    ) -> CovenantResult<Option<PenaltyLevel>> {
        ArgumentError::check_not_blank("agent_id", agent_id)?;
        let before = self.profile_at(agent_id, now).penalty;

        let records = self.history.entry(agent_id.to_string()).or_default();
        records.push(record.clone());
        debug!(
            agent_id,
            breach_id = %record.breach_id,
            severity = %record.severity,
            total = records.len(),
            "breach recorded"
        );

        let after = self.profile_at(agent_id, now);
        if after.penalty == before {
            return Ok(None);
        }
        if after.penalty != PenaltyLevel::None {
            events::offender_flagged(
                agent_id,
                after.penalty.name(),
                after.recent_breaches,
                after.escalating,
            );
        }
        Ok(Some(after.penalty))
    }

    pub fn analyze(&self, agent_id: &str) -> OffenderProfile {
        self.analyze_at(agent_id, Utc::now())
    }

    /// Profile of `agent_id` as seen at `now`. Unknown agents get an empty
    /// profile with no penalty.
    pub fn analyze_at(&self, agent_id: &str, now: DateTime<Utc>) -> OffenderProfile {
        self.profile_at(agent_id, now)
    }

    fn profile_at(&self, agent_id: &str, now: DateTime<Utc>) -> OffenderProfile {
        let all = self.history.get(agent_id).map(Vec::as_slice).unwrap_or_default();
        let window = self.config.window();
        let recent: Vec<&BreachRecord> = all
            .iter()
            .filter(|r| now.signed_duration_since(r.timestamp) <= window)
            .collect();

        let escalating = analysis::is_escalating(&recent);
        OffenderProfile {
            agent_id: agent_id.to_string(),
            total_breaches: all.len(),
            recent_breaches: recent.len(),
            penalty: analysis::penalty_for(&self.config, recent.len()),
            penalty_score: analysis::penalty_score(
                &recent,
                escalating,
                self.config.effective_escalation_weight(),
            ),
            escalating,
            dominant_pattern: analysis::dominant_pattern(&recent),
        }
    }

    pub fn get_offenders(&self) -> Vec<String> {
        self.get_offenders_at(Utc::now())
    }

    /// Agents whose penalty at `now` is anything but none, sorted by id.
    pub fn get_offenders_at(&self, now: DateTime<Utc>) -> Vec<String> {
        self.history
            .keys()
            .filter(|agent| self.profile_at(agent, now).penalty != PenaltyLevel::None)
            .cloned()
            .collect()
    }

    pub fn analyze_all(&self) -> Vec<OffenderProfile> {
        self.analyze_all_at(Utc::now())
    }

    /// Profiles of every agent with recorded history, sorted by id.
    pub fn analyze_all_at(&self, now: DateTime<Utc>) -> Vec<OffenderProfile> {
        self.history
            .keys()
            .map(|agent| self.profile_at(agent, now))
            .collect()
    }

    /// Owned copy of `agent_id`'s records, oldest insertion first.
    pub fn history(&self, agent_id: &str) -> Vec<BreachRecord> {
        self.history.get(agent_id).cloned().unwrap_or_default()
    }

    /// Forget one agent. No-op for unknown agents.
    pub fn clear_history(&mut self, agent_id: &str) {
        if self.history.remove(agent_id).is_some() {
            debug!(agent_id, "breach history cleared");
        }
    }
}
