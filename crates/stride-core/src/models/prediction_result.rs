use serde::{Deserialize, Serialize};

use super::{FeatureVector, Label};

/// A successful prediction, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// The vector that was classified.
    pub features: FeatureVector,
    /// Label returned by the predictor.
    pub label: Label,
    /// Wall-clock time of the predict call in milliseconds.
    pub duration_ms: f64,
}
