//! Structured log events for key harness operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a successful model load.
pub fn model_loaded(model: &str, duration_ms: f64) {
    tracing::info!(
        event = "model_loaded",
        model = %model,
        duration_ms = duration_ms,
        "model loaded"
    );
}

/// Log a failed model load.
pub fn model_load_failed(model: &str, error: &str, duration_ms: f64) {
    tracing::error!(
        event = "model_load_failed",
        model = %model,
        error = %error,
        duration_ms = duration_ms,
        "model load failed"
    );
}

/// Log a completed prediction.
pub fn prediction_completed(label: u32, duration_ms: f64) {
    tracing::info!(
        event = "prediction_completed",
        label = label,
        duration_ms = duration_ms,
        "prediction completed"
    );
}

/// Log a failed prediction, including how long the attempt took.
pub fn prediction_failed(kind: &str, error: &str, duration_ms: f64) {
    tracing::warn!(
        event = "prediction_failed",
        kind = %kind,
        error = %error,
        duration_ms = duration_ms,
        "prediction failed"
    );
}

/// Log an event rejected by the re-entrancy guard.
pub fn event_rejected(event_name: &str, phase: &str) {
    tracing::warn!(
        event = "event_rejected",
        rejected = %event_name,
        phase = %phase,
        "event rejected while busy"
    );
}

/// Log the end-of-session metrics snapshot.
pub fn session_summary(snapshot: &serde_json::Value) {
    tracing::info!(
        event = "session_summary",
        metrics = %snapshot,
        "session finished"
    );
}
