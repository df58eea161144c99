//! # neuroknow-observability
//!
//! Structured tracing setup, log events for profile lifecycle operations,
//! and in-process estimator metrics.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::EstimatorMetrics;
pub use tracing_setup::{init_tracing, init_tracing_with_config, init_tracing_with_filter};
