mod neuro_error;

pub use neuro_error::{NeuroError, NeuroResult};
