//! Modality strengths and abstraction preference from diagnostic responses.

use std::collections::BTreeMap;

use neuroknow_core::models::DiagnosticData;
use neuroknow_core::profile::{AbstractionPreference, Modality, ModalityStrengths, Score};

/// Laplace-smoothed accuracy: a modality with no responses lands on 0.5,
/// and a single answer cannot push it to 0 or 1.
fn smoothed_accuracy(correct: u64, answered: u64) -> f64 {
    (correct as f64 + 1.0) / (answered as f64 + 2.0)
}

/// Per-modality strength from the diagnostic responses delivered in that
/// modality. Scores are independent; they do not sum to 1.
pub fn estimate_modality_strengths(data: &DiagnosticData) -> ModalityStrengths {
    let mut tallies: BTreeMap<Modality, (u64, u64)> = BTreeMap::new();
    for response in &data.modality_responses {
        let (correct, answered) = tallies.entry(response.modality).or_default();
        *answered += 1;
        if response.correct {
            *correct += 1;
        }
    }
    ModalityStrengths::from_fn(|modality| {
        let (correct, answered) = tallies.get(&modality).copied().unwrap_or_default();
        Score::new(smoothed_accuracy(correct, answered))
    })
}

/// Abstract-first only when its trials did strictly better than concrete-first.
pub fn estimate_abstraction_preference(data: &DiagnosticData) -> AbstractionPreference {
    let tally = |presentation: AbstractionPreference| {
        data.abstraction_trials
            .iter()
            .filter(|t| t.presentation == presentation)
            .fold((0u64, 0u64), |(correct, answered), t| {
                (correct + u64::from(t.correct), answered + 1)
            })
    };
    let (abstract_correct, abstract_answered) = tally(AbstractionPreference::AbstractFirst);
    let (concrete_correct, concrete_answered) = tally(AbstractionPreference::ConcreteFirst);

    if smoothed_accuracy(abstract_correct, abstract_answered)
        > smoothed_accuracy(concrete_correct, concrete_answered)
    {
        AbstractionPreference::AbstractFirst
    } else {
        AbstractionPreference::ConcreteFirst
    }
}

/// All modalities, strongest first. Ties keep canonical order
/// (visual, kinesthetic, auditory, logical).
pub fn optimal_modality_mix(strengths: &ModalityStrengths) -> Vec<Modality> {
    let mut order = Modality::ALL.to_vec();
    // Stable sort: equal strengths stay in canonical order.
    order.sort_by(|a, b| {
        strengths
            .get(*b)
            .value()
            .total_cmp(&strengths.get(*a).value())
    });
    order
}
