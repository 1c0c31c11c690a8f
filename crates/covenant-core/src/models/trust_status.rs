//! Trust status and the monotone merge used by breach processing.
//!
//! Statuses form a total order `trusted < degraded < restricted < revoked`.
//! `unknown` sits outside that order: it only ever describes an identity the
//! graph has no node for, and [`worse_status`] never produces it.
//!
//! # Examples
//!
//! ```
//! use covenant_core::models::{worse_status, status_for_severity, Severity, TrustStatus};
//!
//! let floor = status_for_severity(Severity::High);
//! assert_eq!(floor, TrustStatus::Restricted);
//! assert_eq!(worse_status(TrustStatus::Revoked, floor), TrustStatus::Revoked);
//! assert_eq!(worse_status(TrustStatus::Degraded, floor), TrustStatus::Restricted);
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{ParseEnumError, Severity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustStatus {
    Trusted,
    Degraded,
    Restricted,
    Revoked,
    /// No node exists for the queried identity.
    Unknown,
}

impl TrustStatus {
    pub const ALL: [TrustStatus; 5] = [
        TrustStatus::Trusted,
        TrustStatus::Degraded,
        TrustStatus::Restricted,
        TrustStatus::Revoked,
        TrustStatus::Unknown,
    ];

    /// Position in the trust order, `None` for `Unknown`.
    pub fn rank(self) -> Option<u8> {
        match self {
            TrustStatus::Trusted => Some(0),
            TrustStatus::Degraded => Some(1),
            TrustStatus::Restricted => Some(2),
            TrustStatus::Revoked => Some(3),
            TrustStatus::Unknown => None,
        }
    }

    /// One level milder: revoked → restricted → degraded → trusted.
    /// `None` once there is nothing milder to step to.
    pub fn milder(self) -> Option<TrustStatus> {
        match self {
            TrustStatus::Revoked => Some(TrustStatus::Restricted),
            TrustStatus::Restricted => Some(TrustStatus::Degraded),
            TrustStatus::Degraded => Some(TrustStatus::Trusted),
            TrustStatus::Trusted | TrustStatus::Unknown => None,
        }
    }

    /// True if `self` is strictly worse than `other` in the trust order.
    pub fn is_worse_than(self, other: TrustStatus) -> bool {
        match (self.rank(), other.rank()) {
            (Some(a), Some(b)) => a > b,
            _ => false,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TrustStatus::Trusted => "trusted",
            TrustStatus::Degraded => "degraded",
            TrustStatus::Restricted => "restricted",
            TrustStatus::Revoked => "revoked",
            TrustStatus::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for TrustStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TrustStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TrustStatus::ALL
            .into_iter()
            .find(|status| status.name() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "trust status",
                value: s.to_string(),
            })
    }
}

/// The status floor a breach of `severity` imposes on the violator.
pub fn status_for_severity(severity: Severity) -> TrustStatus {
    match severity {
        Severity::Critical => TrustStatus::Revoked,
        Severity::High => TrustStatus::Restricted,
        Severity::Medium => TrustStatus::Degraded,
        Severity::Low => TrustStatus::Trusted,
    }
}

/// Whichever of `a` and `b` is not better. Commutative and idempotent.
///
/// `Unknown` is treated as absent: merging it with a ranked status yields the
/// ranked status, and two unknowns merge to `Trusted` (the status a freshly
/// created node starts from).
pub fn worse_status(a: TrustStatus, b: TrustStatus) -> TrustStatus {
    match (a.rank(), b.rank()) {
        (Some(ra), Some(rb)) => {
            if ra >= rb {
                a
            } else {
                b
            }
        }
        (Some(_), None) => a,
        (None, Some(_)) => b,
        (None, None) => TrustStatus::Trusted,
    }
}
