//! Tracing setup — structured logging and event types.

pub mod events;

use neuroknow_core::config::ObservabilityConfig;
use neuroknow_core::constants::LOG_ENV_VAR;
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects the `NEUROKNOW_LOG` environment variable for filtering.
/// Defaults to `info` level if not set. Returns false if a global
/// subscriber was already installed.
pub fn init_tracing() -> bool {
    init_tracing_with_config(&ObservabilityConfig::default())
}

/// Initialize tracing from the observability config section.
/// `NEUROKNOW_LOG` still takes precedence over `log_level`.
pub fn init_tracing_with_config(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true);

    if config.json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    }
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) -> bool {
    let filter = EnvFilter::new(filter);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .json()
        .try_init()
        .is_ok()
}
