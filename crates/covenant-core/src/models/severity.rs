use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ParseEnumError;
use crate::constants;

/// Severity of a covenant breach, as reported in an attestation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];

    /// Weight used when scoring repeat offenders (critical 4 … low 1).
    pub fn weight(self) -> u32 {
        match self {
            Severity::Critical => constants::SEVERITY_WEIGHT_CRITICAL,
            Severity::High => constants::SEVERITY_WEIGHT_HIGH,
            Severity::Medium => constants::SEVERITY_WEIGHT_MEDIUM,
            Severity::Low => constants::SEVERITY_WEIGHT_LOW,
        }
    }

    /// Upper bound on the fraction of trust that can be recovered after a
    /// breach of this severity.
    pub fn recovery_ceiling(self) -> f64 {
        match self {
            Severity::Critical => constants::RECOVERY_CEILING_CRITICAL,
            Severity::High => constants::RECOVERY_CEILING_HIGH,
            Severity::Medium => constants::RECOVERY_CEILING_MEDIUM,
            Severity::Low => constants::RECOVERY_CEILING_LOW,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|sev| sev.name() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "severity",
                value: s.to_string(),
            })
    }
}
