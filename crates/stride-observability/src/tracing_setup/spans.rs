//! Span definitions for the two timed operations.

/// Create a model-load span.
#[macro_export]
macro_rules! load_span {
    ($model:expr) => {
        tracing::info_span!("stride.load_model", model = %$model)
    };
}

/// Create a prediction span.
#[macro_export]
macro_rules! predict_span {
    ($model:expr, $gating:expr) => {
        tracing::info_span!("stride.predict", model = %$model, gating = %$gating)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const LOAD_MODEL: &str = "stride.load_model";
    pub const PREDICT: &str = "stride.predict";
}
