//! Protocol constants shared across the workspace.

/// Actor recorded on lifecycle transitions fired by `check_timeouts`.
pub const SYSTEM_ACTOR: &str = "system";

/// Evidence kind attached to a timeout-driven lifecycle transition.
pub const TIMEOUT_EVIDENCE_KIND: &str = "timeout";

/// Severity weights used by the repeat offender detector.
pub const SEVERITY_WEIGHT_CRITICAL: u32 = 4;
pub const SEVERITY_WEIGHT_HIGH: u32 = 3;
pub const SEVERITY_WEIGHT_MEDIUM: u32 = 2;
pub const SEVERITY_WEIGHT_LOW: u32 = 1;

/// Recovery ceilings per severity. Strictly ordered critical < high < medium < low.
pub const RECOVERY_CEILING_CRITICAL: f64 = 0.4;
pub const RECOVERY_CEILING_HIGH: f64 = 0.6;
pub const RECOVERY_CEILING_MEDIUM: f64 = 0.8;
pub const RECOVERY_CEILING_LOW: f64 = 1.0;

/// Bounds of the reliability → steepness interpolation in the recovery model.
pub const RELIABILITY_STEEPNESS_FLOOR: f64 = 0.25;
pub const RELIABILITY_STEEPNESS_CEILING: f64 = 1.0;

/// Minimum number of recent breaches before an escalation can be detected.
pub const ESCALATION_MIN_POINTS: usize = 3;

/// One day in milliseconds.
pub const MS_PER_DAY: u64 = 86_400_000;
