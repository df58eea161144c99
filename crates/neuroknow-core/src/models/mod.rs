pub mod diagnostic;
pub mod error_log;
pub mod learning_state;

pub use diagnostic::{AbstractionTrial, DiagnosticData, ModalityResponse};
pub use error_log::{ErrorLog, ErrorType};
pub use learning_state::LearningState;
