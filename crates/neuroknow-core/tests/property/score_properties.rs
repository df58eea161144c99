use neuroknow_core::profile::{Modality, ModalityStrengths, Score};
use proptest::prelude::*;

proptest! {
    #[test]
    fn score_always_within_unit_interval(value in proptest::num::f64::ANY) {
        let score = Score::new(value);
        if value.is_nan() {
            prop_assert!(!score.is_valid());
            prop_assert!(Score::try_new("x", value).is_err());
        } else {
            prop_assert!(score.is_valid());
            prop_assert!((0.0..=1.0).contains(&score.value()));
        }
    }

    #[test]
    fn strengths_from_any_scores_hold_every_modality(
        values in proptest::collection::vec(-5.0f64..5.0, 4)
    ) {
        let strengths = ModalityStrengths::from_fn(|m| Score::new(values[m.canonical_rank()]));
        prop_assert_eq!(strengths.len(), Modality::COUNT);
        prop_assert!(strengths.ensure_valid().is_ok());
    }
}
