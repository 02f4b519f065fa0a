use crate::models::PredictorState;

/// Predictor gateway errors.
///
/// Every variant is caught at the controller's event boundary and rendered.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("model initialization failed: {reason}")]
    Init { reason: String },

    #[error("model initialization already in progress")]
    ConcurrentInit,

    #[error("invalid feature vector: expected {expected} values, got {actual}")]
    InvalidInput { expected: usize, actual: usize },

    #[error("predictor not ready (state: {state}); load the model first")]
    NotReady { state: PredictorState },

    #[error("prediction failed: {reason}")]
    Predictor { reason: String },
}

impl GatewayError {
    /// Short machine-readable tag for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Init { .. } => "init",
            Self::ConcurrentInit => "concurrent_init",
            Self::InvalidInput { .. } => "invalid_input",
            Self::NotReady { .. } => "not_ready",
            Self::Predictor { .. } => "predictor",
        }
    }
}
