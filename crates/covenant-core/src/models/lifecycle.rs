//! Breach investigation lifecycle states.
//!
//! Valid transitions (strictly linear):
//! - Detected → Confirmed
//! - Confirmed → Remediated
//! - Remediated → Recovered
//!
//! Recovered is terminal.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ParseEnumError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreachState {
    Detected,
    Confirmed,
    Remediated,
    Recovered,
}

impl BreachState {
    pub const ALL: [BreachState; 4] = [
        BreachState::Detected,
        BreachState::Confirmed,
        BreachState::Remediated,
        BreachState::Recovered,
    ];

    /// The only state reachable from `self`, or `None` for the terminal state.
    pub fn next(self) -> Option<BreachState> {
        match self {
            BreachState::Detected => Some(BreachState::Confirmed),
            BreachState::Confirmed => Some(BreachState::Remediated),
            BreachState::Remediated => Some(BreachState::Recovered),
            BreachState::Recovered => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    pub fn name(self) -> &'static str {
        match self {
            BreachState::Detected => "detected",
            BreachState::Confirmed => "confirmed",
            BreachState::Remediated => "remediated",
            BreachState::Recovered => "recovered",
        }
    }
}

impl std::fmt::Display for BreachState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BreachState {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BreachState::ALL
            .into_iter()
            .find(|state| state.name() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "breach state",
                value: s.to_string(),
            })
    }
}

/// A piece of evidence attached to a lifecycle transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceItem {
    /// Evidence category, e.g. "log", "attestation", "timeout".
    pub kind: String,
    pub description: String,
    /// Optional pointer to the evidence (hash, URI).
    pub reference: Option<String>,
}

impl EvidenceItem {
    pub fn new(kind: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            description: description.into(),
            reference: None,
        }
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }
}

/// One committed step of a breach lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub from: BreachState,
    pub to: BreachState,
    pub actor: String,
    pub evidence: Vec<EvidenceItem>,
    pub timestamp: DateTime<Utc>,
}
