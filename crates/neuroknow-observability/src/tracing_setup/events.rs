//! Structured log events for profile lifecycle operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a profile creation event.
pub fn profile_created(user_id: &str, attention_pattern: &str, abstraction_preference: &str) {
    tracing::info!(
        event = "profile_created",
        user_id = %user_id,
        attention_pattern = %attention_pattern,
        abstraction_preference = %abstraction_preference,
        "profile created"
    );
}

/// Log the provisional → calibrated transition.
pub fn profile_calibrated(user_id: &str) {
    tracing::info!(
        event = "profile_calibrated",
        user_id = %user_id,
        "profile calibrated"
    );
}

/// Log an error-driven update.
pub fn profile_updated(
    user_id: &str,
    errors_absorbed: usize,
    recovery_speed: f64,
    modalities_revised: usize,
) {
    tracing::info!(
        event = "profile_updated",
        user_id = %user_id,
        errors_absorbed = errors_absorbed,
        recovery_speed = recovery_speed,
        modalities_revised = modalities_revised,
        "profile updated from errors"
    );
}

/// Log an explicit re-diagnosis.
pub fn profile_reset(user_id: &str) {
    tracing::info!(
        event = "profile_reset",
        user_id = %user_id,
        "profile reset"
    );
}

/// Log a request rejected because of the user registry state.
pub fn request_rejected(user_id: &str, operation: &str, reason: &str) {
    tracing::warn!(
        event = "request_rejected",
        user_id = %user_id,
        operation = %operation,
        reason = %reason,
        "request rejected"
    );
}

/// Log a score invariant violation. These indicate a bug in the estimator.
pub fn invariant_violation(user_id: &str, operation: &str, details: &str) {
    tracing::error!(
        event = "invariant_violation",
        user_id = %user_id,
        operation = %operation,
        details = %details,
        "score invariant violated"
    );
}
