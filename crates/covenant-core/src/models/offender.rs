//! Repeat offender records and profiles.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ParseEnumError, Severity};

/// One breach in an agent's history, as stored by the offender detector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreachRecord {
    pub breach_id: String,
    pub severity: Severity,
    pub timestamp: DateTime<Utc>,
    pub resource: String,
    pub action: String,
}

impl BreachRecord {
    /// Build a record with a fresh UUID v4 breach id.
    pub fn new(
        severity: Severity,
        timestamp: DateTime<Utc>,
        resource: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            breach_id: uuid::Uuid::new_v4().to_string(),
            severity,
            timestamp,
            resource: resource.into(),
            action: action.into(),
        }
    }

    /// The `"resource:action"` key used for pattern detection.
    pub fn pattern(&self) -> String {
        format!("{}:{}", self.resource, self.action)
    }
}

/// Enforcement recommendation for an agent, ordered from mildest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PenaltyLevel {
    #[default]
    None,
    Warning,
    Restriction,
    Revocation,
}

impl PenaltyLevel {
    pub const ALL: [PenaltyLevel; 4] = [
        PenaltyLevel::None,
        PenaltyLevel::Warning,
        PenaltyLevel::Restriction,
        PenaltyLevel::Revocation,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PenaltyLevel::None => "none",
            PenaltyLevel::Warning => "warning",
            PenaltyLevel::Restriction => "restriction",
            PenaltyLevel::Revocation => "revocation",
        }
    }
}

impl std::fmt::Display for PenaltyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PenaltyLevel {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PenaltyLevel::ALL
            .into_iter()
            .find(|level| level.name() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "penalty level",
                value: s.to_string(),
            })
    }
}

/// Computed view of an agent's breach history. Never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OffenderProfile {
    pub agent_id: String,
    pub total_breaches: usize,
    pub recent_breaches: usize,
    pub penalty: PenaltyLevel,
    pub penalty_score: f64,
    pub escalating: bool,
    /// Most frequent `"resource:action"` among recent breaches.
    pub dominant_pattern: Option<String>,
}
