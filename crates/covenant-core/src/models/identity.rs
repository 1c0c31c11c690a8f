//! Agent identity as seen by the trust graph.
//!
//! # Examples
//!
//! ```
//! use covenant_core::models::IdentityHash;
//!
//! let id = IdentityHash::from("agent-a");
//! assert_eq!(id.as_str(), "agent-a");
//! assert_eq!(id.to_string(), "agent-a");
//! ```

use serde::{Deserialize, Serialize};

/// Opaque content-address of an agent. Unique key of a trust node.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentityHash(pub String);

impl IdentityHash {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for IdentityHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for IdentityHash {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for IdentityHash {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for IdentityHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
