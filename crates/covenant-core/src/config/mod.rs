//! Configuration for every covenant component.
//!
//! # Examples
//!
//! ```
//! use covenant_core::config::CovenantConfig;
//!
//! let config = CovenantConfig::from_toml(r#"
//! [offender]
//! warning_threshold = 3
//! restriction_threshold = 5
//! revocation_threshold = 9
//! "#).unwrap();
//! assert_eq!(config.offender.warning_threshold, 3);
//! assert_eq!(config.degradation.base_loss, 0.8);
//! ```

pub mod defaults;
mod degradation_config;
mod lifecycle_config;
mod observability_config;
mod offender_config;
mod recovery_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use degradation_config::DegradationConfig;
pub use lifecycle_config::LifecycleConfig;
pub use observability_config::ObservabilityConfig;
pub use offender_config::OffenderConfig;
pub use recovery_config::RecoveryConfig;

use crate::errors::ConfigError;

/// Top-level configuration, one section per component.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CovenantConfig {
    pub degradation: DegradationConfig,
    pub recovery: RecoveryConfig,
    pub lifecycle: LifecycleConfig,
    pub offender: OffenderConfig,
    pub observability: ObservabilityConfig,
}

impl CovenantConfig {
    /// Parse and validate configuration from a TOML string. Missing sections
    /// and fields fall back to defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: CovenantConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
                path: "<string>".to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let config: CovenantConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate every section. Stops at the first invalid value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.degradation.validate()?;
        self.recovery.validate()?;
        self.lifecycle.validate()?;
        self.offender.validate()?;
        self.observability.validate()?;
        Ok(())
    }
}
