/// Errors raised by the external inference capability.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("model load failed: {reason}")]
    LoadFailed { reason: String },

    #[error("inference failed: {reason}")]
    InferenceFailed { reason: String },
}
