//! Error handling for Stride.
//! One error enum per subsystem, `thiserror` only, aggregated into [`StrideError`].

pub mod config_error;
pub mod gateway_error;
pub mod model_error;

pub use config_error::ConfigError;
pub use gateway_error::GatewayError;
pub use model_error::ModelError;

/// Top-level error for the harness.
#[derive(Debug, thiserror::Error)]
pub enum StrideError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type StrideResult<T> = Result<T, StrideError>;
