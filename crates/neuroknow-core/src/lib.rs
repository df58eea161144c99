//! # neuroknow-core
//!
//! Foundation crate for the NeuroKnow cognitive profile estimator.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod profile;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::NeuroConfig;
pub use errors::{NeuroError, NeuroResult};
pub use models::{DiagnosticData, ErrorLog, ErrorType, LearningState};
pub use profile::{
    AbstractionPreference, AttentionPattern, CognitiveProfile, Modality, ModalityStrengths,
    ProfileState, Score,
};
