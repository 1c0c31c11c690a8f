// Single source of truth for all default values.

// --- Degradation ---
pub const DEFAULT_BASE_LOSS: f64 = 0.8;
pub const DEFAULT_LAMBDA: f64 = 1.0;

// --- Recovery ---
pub const DEFAULT_MAX_RECOVERY: f64 = 1.0;
pub const DEFAULT_STEEPNESS: f64 = 1.0e-7;
pub const DEFAULT_MIDPOINT_MS: f64 = 604_800_000.0; // 7 days

// --- Lifecycle ---
pub const DEFAULT_DETECTED_TIMEOUT_MS: Option<u64> = None;
pub const DEFAULT_CONFIRMED_TIMEOUT_MS: Option<u64> = None;
pub const DEFAULT_REMEDIATED_TIMEOUT_MS: Option<u64> = None;

// --- Offender detection ---
pub const DEFAULT_WARNING_THRESHOLD: u32 = 2;
pub const DEFAULT_RESTRICTION_THRESHOLD: u32 = 4;
pub const DEFAULT_REVOCATION_THRESHOLD: u32 = 7;
pub const DEFAULT_WINDOW_MS: u64 = 2_592_000_000; // 30 days
pub const DEFAULT_ESCALATION_WEIGHT: f64 = 1.5;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
