pub mod attention;
pub mod cognitive_profile;
pub mod modality;
pub mod score;

pub use attention::{AbstractionPreference, AttentionPattern};
pub use cognitive_profile::{CognitiveProfile, ProfileState};
pub use modality::{Modality, ModalityStrengths};
pub use score::Score;
