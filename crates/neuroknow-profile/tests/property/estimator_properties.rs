use chrono::{Duration, TimeZone, Utc};
use neuroknow_core::models::{DiagnosticData, ErrorLog, ErrorType};
use neuroknow_core::profile::{
    AbstractionPreference, AttentionPattern, Modality, ModalityStrengths, Score,
};
use neuroknow_profile::{
    classify_attention_pattern, estimate_modality_strengths, optimal_modality_mix,
    ProfileEstimator,
};
use proptest::prelude::*;

fn arb_modality() -> impl Strategy<Value = Modality> {
    prop_oneof![
        Just(Modality::Visual),
        Just(Modality::Kinesthetic),
        Just(Modality::Auditory),
        Just(Modality::Logical),
    ]
}

fn arb_error_type() -> impl Strategy<Value = ErrorType> {
    prop_oneof![
        Just(ErrorType::ConceptualGap),
        Just(ErrorType::ProceduralError),
        Just(ErrorType::AttentionLapse),
        Just(ErrorType::TransferFailure),
    ]
}

fn arb_diagnostic() -> impl Strategy<Value = DiagnosticData> {
    (
        proptest::collection::vec((arb_modality(), any::<bool>()), 0..40),
        proptest::collection::vec(any::<bool>(), 0..10),
    )
        .prop_map(|(responses, trials)| {
            let mut data = DiagnosticData::default();
            for (modality, correct) in responses {
                data = data.with_response(modality, correct);
            }
            for (i, correct) in trials.into_iter().enumerate() {
                let presentation = if i % 2 == 0 {
                    AbstractionPreference::AbstractFirst
                } else {
                    AbstractionPreference::ConcreteFirst
                };
                data = data.with_trial(presentation, correct);
            }
            data
        })
}

fn arb_error_logs() -> impl Strategy<Value = Vec<ErrorLog>> {
    proptest::collection::vec(
        (
            0i64..600,
            0usize..4,
            arb_error_type(),
            proptest::option::of(arb_modality()),
            proptest::option::of(0i64..240),
        ),
        1..30,
    )
    .prop_map(|entries| {
        let base = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        entries
            .into_iter()
            .map(|(offset, concept, error_type, modality, resolve_after)| {
                let at = base + Duration::minutes(offset);
                let mut log = ErrorLog::new(at, format!("concept{concept}"), error_type, "attempt");
                if let Some(modality) = modality {
                    log = log.with_instruction(modality);
                }
                if let Some(after) = resolve_after {
                    log = log.resolved(at + Duration::minutes(after));
                }
                log
            })
            .collect()
    })
}

// ── Attention classification ──────────────────────────────────────────────

proptest! {
    #[test]
    fn low_means_are_sprinters(durations in proptest::collection::vec(0.1f64..14.9, 1..20)) {
        prop_assert_eq!(classify_attention_pattern(&durations), AttentionPattern::Sprinter);
    }

    #[test]
    fn high_means_are_marathoners(durations in proptest::collection::vec(40.1f64..240.0, 1..20)) {
        prop_assert_eq!(classify_attention_pattern(&durations), AttentionPattern::Marathon);
    }

    #[test]
    fn classification_follows_the_mean(durations in proptest::collection::vec(0.1f64..120.0, 0..20)) {
        let mean = if durations.is_empty() {
            25.0
        } else {
            durations.iter().sum::<f64>() / durations.len() as f64
        };
        let expected = if mean < 15.0 {
            AttentionPattern::Sprinter
        } else if mean > 40.0 {
            AttentionPattern::Marathon
        } else {
            AttentionPattern::Cyclical
        };
        prop_assert_eq!(classify_attention_pattern(&durations), expected);
    }
}

// ── Modality strengths ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn strengths_cover_all_modalities_in_range(data in arb_diagnostic()) {
        let strengths = estimate_modality_strengths(&data);
        prop_assert_eq!(strengths.len(), Modality::COUNT);
        for (_, score) in strengths.iter() {
            prop_assert!(score.is_valid());
        }
        prop_assert_eq!(estimate_modality_strengths(&data), strengths);
    }

    #[test]
    fn mix_is_sorted_permutation_with_canonical_ties(
        values in proptest::collection::vec(prop_oneof![Just(0.0), Just(0.5), Just(1.0), 0.0f64..1.0], 4)
    ) {
        let strengths = ModalityStrengths::from_fn(|m| Score::new(values[m.canonical_rank()]));
        let mix = optimal_modality_mix(&strengths);

        let mut sorted = mix.clone();
        sorted.sort();
        prop_assert_eq!(sorted, Modality::ALL.to_vec());

        for pair in mix.windows(2) {
            let (a, b) = (strengths.get(pair[0]), strengths.get(pair[1]));
            prop_assert!(a >= b);
            if a == b {
                prop_assert!(pair[0].canonical_rank() < pair[1].canonical_rank());
            }
        }
    }
}

// ── Error-driven updates ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn updates_keep_scores_valid(data in arb_diagnostic(), logs in arb_error_logs()) {
        let estimator = ProfileEstimator::in_memory();
        let created = estimator.create_profile("p", &data).unwrap();
        let updated = estimator.update_from_errors("p", &logs).unwrap();

        prop_assert!(updated.check_invariants().is_ok());
        prop_assert!(updated.is_calibrated());
        prop_assert_eq!(updated.error_events_observed, logs.len() as u64);
        prop_assert_eq!(updated.attention_pattern, created.attention_pattern);

        for modality in Modality::ALL {
            let named = logs.iter().any(|l| l.instruction_modality == Some(modality));
            if !named {
                prop_assert_eq!(
                    updated.modality_strengths.get(modality),
                    created.modality_strengths.get(modality)
                );
            }
        }
    }

    #[test]
    fn empty_update_is_identity(data in arb_diagnostic(), logs in arb_error_logs()) {
        let estimator = ProfileEstimator::in_memory();
        estimator.create_profile("p", &data).unwrap();
        let before = estimator.update_from_errors("p", &logs).unwrap();
        let after = estimator.update_from_errors("p", &[]).unwrap();
        prop_assert_eq!(before, after);
    }
}
