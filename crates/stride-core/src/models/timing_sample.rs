use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One timed operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingSample {
    pub operation: String,
    pub duration_ms: f64,
    /// Whether the timed operation returned successfully.
    pub succeeded: bool,
    pub recorded_at: DateTime<Utc>,
}

impl TimingSample {
    pub fn new(operation: impl Into<String>, duration_ms: f64, succeeded: bool) -> Self {
        Self {
            operation: operation.into(),
            duration_ms,
            succeeded,
            recorded_at: Utc::now(),
        }
    }
}
