use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle of the external predictor.
///
/// `Uninitialized -> Loading -> Ready | Failed`. A `Failed` predictor can be
/// loaded again. Only the predictor gateway moves between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictorState {
    #[default]
    Uninitialized,
    Loading,
    Ready,
    Failed,
}

impl PredictorState {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Loading => "loading",
            Self::Ready => "ready",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for PredictorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
