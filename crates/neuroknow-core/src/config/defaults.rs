// Single source of truth for all default values.

// --- Attention ---
pub const DEFAULT_SPRINTER_BELOW_MINUTES: f64 = 15.0;
pub const DEFAULT_MARATHON_ABOVE_MINUTES: f64 = 40.0;
pub const DEFAULT_FOCUS_MINUTES: f64 = 25.0;

// --- Estimator ---
pub const DEFAULT_PRIOR_SCORE: f64 = 0.5;
pub const DEFAULT_RECOVERY_HALF_GAP_MINUTES: f64 = 30.0;
pub const DEFAULT_RECENT_ERROR_WINDOW: usize = 20;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
