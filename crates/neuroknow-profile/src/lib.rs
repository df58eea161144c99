//! # neuroknow-profile
//!
//! Cognitive profile estimation from diagnostic data, refined by a stream of
//! error events. Profiles live in an injected store; the default store uses
//! `DashMap` so concurrent updates of one user are serialized.
//!
//! ## Modules
//!
//! - `attention` — Attention-pattern classification from focus spans
//! - `modality` — Per-modality strengths, abstraction preference, modality mix
//! - `recovery` — Error-stream analysis: recovery speed, modality and transfer evidence
//! - `store` — `InMemoryProfileStore` with per-user locking
//! - `estimator` — `ProfileEstimator`, the public entry point

pub mod attention;
pub mod estimator;
pub mod modality;
pub mod recovery;
pub mod store;

pub use attention::{classify_attention_pattern, classify_with, mean_focus_minutes};
pub use estimator::ProfileEstimator;
pub use modality::{
    estimate_abstraction_preference, estimate_modality_strengths, optimal_modality_mix,
};
pub use recovery::{analyze_errors, ErrorEvidence};
pub use store::InMemoryProfileStore;
