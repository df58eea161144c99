//! Validates that every output record derives ts-rs bindings.
//!
//! Run with: cargo test -p neuroknow-core export_bindings
//! Generated files appear in neuroknow-core/bindings/*.ts

fn assert_ts<T: ts_rs::TS>() -> &'static str {
    std::any::type_name::<T>()
}

#[test]
fn export_bindings() {
    use neuroknow_core::models::{ErrorLog, ErrorType, LearningState};
    use neuroknow_core::profile::{
        AbstractionPreference, AttentionPattern, CognitiveProfile, Modality, ModalityStrengths,
        ProfileState, Score,
    };

    // ts-rs export is triggered by #[ts(export)] when the test suite runs.
    let names = [
        assert_ts::<CognitiveProfile>(),
        assert_ts::<ProfileState>(),
        assert_ts::<AttentionPattern>(),
        assert_ts::<AbstractionPreference>(),
        assert_ts::<Modality>(),
        assert_ts::<ModalityStrengths>(),
        assert_ts::<Score>(),
        assert_ts::<ErrorLog>(),
        assert_ts::<ErrorType>(),
        assert_ts::<LearningState>(),
    ];
    assert!(names.iter().all(|n| n.starts_with("neuroknow_core::")));
}
