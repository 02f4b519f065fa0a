//! Concrete implementations of the external model capability.

pub mod onnx_model;

pub use onnx_model::OnnxActivityModel;

use stride_core::config::ModelConfig;
use tracing::info;

/// Create the configured model. Loading is deferred to `load_model`.
pub fn create_model(config: &ModelConfig) -> OnnxActivityModel {
    let model = OnnxActivityModel::new(config);
    info!(
        provider = "onnx",
        model = %stride_core::traits::IActivityModel::name(&model),
        path = config.path.as_deref().unwrap_or("<unset>"),
        "activity model configured"
    );
    model
}
