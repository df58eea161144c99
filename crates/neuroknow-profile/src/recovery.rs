//! Error-stream analysis.
//!
//! Each error's effective resolution is the next correct attempt on the same
//! concept: the earliest `resolved_at` among that error and every later error
//! on the concept. Repeated errors therefore stretch the gap of the ones
//! before them. Recovery speed is only measured on concepts that were missed
//! more than once in the batch.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use neuroknow_core::constants::SECONDS_PER_MINUTE;
use neuroknow_core::errors::NeuroResult;
use neuroknow_core::models::{ErrorLog, ErrorType};
use neuroknow_core::profile::{Modality, Score};

/// Derived statistics from one batch of error logs. Raw logs are not retained.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorEvidence {
    /// Number of logs analyzed.
    pub logs_analyzed: usize,
    /// `None` unless some concept was missed repeatedly and then resolved.
    pub recovery_speed: Option<Score>,
    /// Mean minutes from error to next correct attempt, over resolved errors
    /// on repeated concepts.
    pub mean_resolution_minutes: Option<f64>,
    /// Resolution rate per modality of remedial instruction, only for
    /// modalities named in the batch.
    pub modality_strengths: BTreeMap<Modality, Score>,
    /// Resolution rate of transfer failures, if the batch had any.
    pub transfer_capacity: Option<Score>,
    pub error_counts: BTreeMap<ErrorType, u64>,
}

impl ErrorEvidence {
    pub fn is_empty(&self) -> bool {
        self.logs_analyzed == 0
    }
}

/// Map a mean resolution gap to a speed in [0, 1]: `half / (half + gap)`.
/// A gap equal to `half_gap_minutes` scores 0.5; an immediate fix scores 1.
pub fn recovery_speed_from_gap(mean_gap_minutes: f64, half_gap_minutes: f64) -> f64 {
    half_gap_minutes / (half_gap_minutes + mean_gap_minutes.max(0.0))
}

/// Validate and summarize a batch of error logs.
pub fn analyze_errors(logs: &[ErrorLog], half_gap_minutes: f64) -> NeuroResult<ErrorEvidence> {
    for (index, log) in logs.iter().enumerate() {
        log.validate(index)?;
    }

    let resolutions = effective_resolutions(logs);
    let mut concept_counts: HashMap<&str, usize> = HashMap::new();
    for log in logs {
        *concept_counts.entry(log.concept_id.as_str()).or_default() += 1;
    }

    let mut evidence = ErrorEvidence {
        logs_analyzed: logs.len(),
        ..Default::default()
    };

    let mut gaps_minutes = Vec::new();
    let mut by_modality: BTreeMap<Modality, (u64, u64)> = BTreeMap::new();
    let (mut transfer_resolved, mut transfer_total) = (0u64, 0u64);

    for (log, resolution) in logs.iter().zip(&resolutions) {
        *evidence.error_counts.entry(log.error_type).or_default() += 1;

        let repeated = concept_counts
            .get(log.concept_id.as_str())
            .is_some_and(|&n| n > 1);
        if let (true, Some(resolved_at)) = (repeated, resolution) {
            let seconds = (*resolved_at - log.timestamp).num_milliseconds() as f64 / 1000.0;
            gaps_minutes.push(seconds / SECONDS_PER_MINUTE);
        }

        if let Some(modality) = log.instruction_modality {
            let (resolved, attempted) = by_modality.entry(modality).or_default();
            *attempted += 1;
            if resolution.is_some() {
                *resolved += 1;
            }
        }

        if log.error_type == ErrorType::TransferFailure {
            transfer_total += 1;
            if resolution.is_some() {
                transfer_resolved += 1;
            }
        }
    }

    if !gaps_minutes.is_empty() {
        let mean = gaps_minutes.iter().sum::<f64>() / gaps_minutes.len() as f64;
        evidence.mean_resolution_minutes = Some(mean);
        evidence.recovery_speed = Some(Score::try_new(
            "error_recovery_speed",
            recovery_speed_from_gap(mean, half_gap_minutes),
        )?);
    }

    for (modality, (resolved, attempted)) in by_modality {
        let rate = resolved as f64 / attempted as f64;
        evidence.modality_strengths.insert(
            modality,
            Score::try_new(&format!("modality_strengths.{modality}"), rate)?,
        );
    }

    if transfer_total > 0 {
        evidence.transfer_capacity = Some(Score::try_new(
            "transfer_capacity",
            transfer_resolved as f64 / transfer_total as f64,
        )?);
    }

    Ok(evidence)
}

/// Next correct attempt for each log, in input order.
fn effective_resolutions(logs: &[ErrorLog]) -> Vec<Option<DateTime<Utc>>> {
    let mut by_concept: HashMap<&str, Vec<usize>> = HashMap::new();
    for (index, log) in logs.iter().enumerate() {
        by_concept.entry(log.concept_id.as_str()).or_default().push(index);
    }

    let mut resolutions = vec![None; logs.len()];
    for indices in by_concept.values_mut() {
        indices.sort_by_key(|&i| (logs[i].timestamp, i));
        let mut next: Option<DateTime<Utc>> = None;
        for &i in indices.iter().rev() {
            next = match (next, logs[i].resolved_at) {
                (Some(a), Some(b)) => Some(a.min(b)),
                (a, b) => a.or(b),
            };
            resolutions[i] = next;
        }
    }
    resolutions
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn t(minutes: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 4, 10, 0, 0).unwrap() + Duration::minutes(minutes)
    }

    #[test]
    fn half_gap_maps_to_one_half() {
        assert!((recovery_speed_from_gap(30.0, 30.0) - 0.5).abs() < 1e-12);
        assert_eq!(recovery_speed_from_gap(0.0, 30.0), 1.0);
    }

    #[test]
    fn repeated_error_inherits_later_resolution() {
        let logs = vec![
            ErrorLog::new(t(0), "limits", ErrorType::ConceptualGap, "plugged in"),
            ErrorLog::new(t(10), "limits", ErrorType::ConceptualGap, "plugged in again")
                .resolved(t(20)),
        ];
        let resolutions = effective_resolutions(&logs);
        assert_eq!(resolutions, vec![Some(t(20)), Some(t(20))]);

        let evidence = analyze_errors(&logs, 30.0).unwrap();
        // gaps of 20 and 10 minutes
        assert_eq!(evidence.mean_resolution_minutes, Some(15.0));
    }

    #[test]
    fn concepts_do_not_share_resolutions() {
        let logs = vec![
            ErrorLog::new(t(0), "limits", ErrorType::ConceptualGap, "a"),
            ErrorLog::new(t(5), "series", ErrorType::ConceptualGap, "b").resolved(t(6)),
        ];
        assert_eq!(effective_resolutions(&logs), vec![None, Some(t(6))]);
    }

    #[test]
    fn distinct_resolved_concepts_have_no_speed() {
        let logs = vec![
            ErrorLog::new(t(0), "limits", ErrorType::ConceptualGap, "a").resolved(t(5)),
            ErrorLog::new(t(1), "series", ErrorType::ConceptualGap, "b").resolved(t(9)),
        ];
        let evidence = analyze_errors(&logs, 30.0).unwrap();
        assert_eq!(evidence.recovery_speed, None);
        assert_eq!(evidence.mean_resolution_minutes, None);
    }

    #[test]
    fn only_repeated_concepts_contribute_gaps() {
        let logs = vec![
            ErrorLog::new(t(0), "limits", ErrorType::ConceptualGap, "a"),
            ErrorLog::new(t(4), "limits", ErrorType::ConceptualGap, "b").resolved(t(6)),
            // Single miss on another concept: its 100-minute gap is ignored.
            ErrorLog::new(t(0), "series", ErrorType::ConceptualGap, "c").resolved(t(100)),
        ];
        let evidence = analyze_errors(&logs, 30.0).unwrap();
        // gaps of 6 and 2 minutes
        assert_eq!(evidence.mean_resolution_minutes, Some(4.0));
        assert!(evidence.recovery_speed.is_some());
    }

    #[test]
    fn large_batches_are_accepted() {
        let logs: Vec<ErrorLog> = (0..10_001)
            .map(|i| ErrorLog::new(t(i), "limits", ErrorType::ProceduralError, "a"))
            .collect();
        let evidence = analyze_errors(&logs, 30.0).unwrap();
        assert_eq!(evidence.logs_analyzed, 10_001);
    }

    #[test]
    fn unresolved_batch_has_no_speed() {
        let logs = vec![ErrorLog::new(t(0), "limits", ErrorType::AttentionLapse, "a")];
        let evidence = analyze_errors(&logs, 30.0).unwrap();
        assert_eq!(evidence.recovery_speed, None);
        assert!(evidence.modality_strengths.is_empty());
        assert_eq!(evidence.transfer_capacity, None);
        assert_eq!(evidence.error_counts.get(&ErrorType::AttentionLapse), Some(&1));
    }
}
