use chrono::{Duration, Utc};
use neuroknow_core::models::{DiagnosticData, ErrorLog, ErrorType};
use neuroknow_core::profile::{Modality, ProfileState};
use neuroknow_core::NeuroError;
use neuroknow_profile::ProfileEstimator;
use std::sync::Arc;
use std::thread;

// ── Concurrent updates to one user lose no evidence ───────────────────────

#[test]
fn concurrent_updates_on_same_user_are_serialized() {
    let estimator = Arc::new(ProfileEstimator::in_memory());
    estimator
        .create_profile("shared", &DiagnosticData::default())
        .unwrap();

    let mut handles = vec![];
    for worker in 0..8 {
        let est = Arc::clone(&estimator);
        handles.push(thread::spawn(move || {
            let base = Utc::now();
            for j in 0..50 {
                let log = ErrorLog::new(
                    base,
                    format!("concept_{worker}_{j}"),
                    ErrorType::ProceduralError,
                    "worked it backwards",
                )
                .with_instruction(Modality::ALL[worker % Modality::COUNT])
                .resolved(base + Duration::minutes(5));
                est.update_from_errors("shared", &[log]).unwrap();
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    let profile = estimator.get_profile("shared").unwrap();
    assert_eq!(profile.error_events_observed, 400);
    assert_eq!(profile.state, ProfileState::Calibrated);

    let metrics = estimator.metrics();
    assert_eq!(metrics.updates_applied, 400);
    assert_eq!(metrics.calibrations, 1, "only the first batch calibrates");
    assert_eq!(metrics.errors_absorbed(), 400);
}

// ── Concurrent creation of one user admits exactly one winner ─────────────

#[test]
fn concurrent_create_admits_one_profile() {
    let estimator = Arc::new(ProfileEstimator::in_memory());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let est = Arc::clone(&estimator);
            thread::spawn(move || {
                let diagnostic = DiagnosticData::default().with_focus_durations(vec![5.0 + i as f64]);
                est.create_profile("contested", &diagnostic)
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let winners = results.iter().filter(|r| r.is_ok()).count();
    let duplicates = results
        .iter()
        .filter(|r| matches!(r, Err(NeuroError::DuplicateUser { .. })))
        .count();

    assert_eq!(winners, 1);
    assert_eq!(duplicates, 7);
    assert_eq!(estimator.profile_count(), 1);
}

// ── Independent users update in parallel ──────────────────────────────────

#[test]
fn independent_users_do_not_interfere() {
    let estimator = Arc::new(ProfileEstimator::in_memory());
    for i in 0..4 {
        estimator
            .create_profile(&format!("user{i}"), &DiagnosticData::default())
            .unwrap();
    }

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let est = Arc::clone(&estimator);
            thread::spawn(move || {
                let user = format!("user{i}");
                let base = Utc::now();
                for _ in 0..25 {
                    let log = ErrorLog::new(base, "graphs", ErrorType::AttentionLapse, "misread axis");
                    est.update_from_errors(&user, &[log]).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    for i in 0..4 {
        let profile = estimator.get_profile(&format!("user{i}")).unwrap();
        assert_eq!(profile.error_events_observed, 25, "user{i} lost updates");
    }
}
