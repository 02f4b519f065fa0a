//! # stride-core
//!
//! Foundation crate for the Stride activity-classification harness.
//! Defines the data model, capability traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::StrideConfig;
pub use errors::{GatewayError, ModelError, StrideError, StrideResult};
pub use models::{FeatureVector, Label, PredictionResult, PredictorState, TimingSample};
