/// NeuroKnow version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable consulted for the tracing filter.
pub const LOG_ENV_VAR: &str = "NEUROKNOW_LOG";

/// Seconds per minute, for converting resolution gaps to minutes.
pub const SECONDS_PER_MINUTE: f64 = 60.0;
