//! ONNX Runtime activity classifier.
//!
//! Loads an exported classifier via the `ort` crate (v2). The model takes a
//! `[1, 6]` float tensor. Its first output is either an integer label tensor
//! (typical of tree/sklearn exports) or a float score tensor, in which case
//! the arg-max index is the label.

use std::path::Path;
use std::sync::Mutex;

use ort::session::Session;
use ort::value::Tensor;
use stride_core::config::ModelConfig;
use stride_core::errors::ModelError;
use stride_core::traits::IActivityModel;
use tracing::debug;

/// ONNX-backed [`IActivityModel`].
///
/// The session is built by `load_model`, or lazily by the first
/// `predict_activity` call if nobody loaded it.
pub struct OnnxActivityModel {
    model_path: Option<String>,
    intra_threads: usize,
    /// `Session::run` requires `&mut self`, so the session sits behind a Mutex.
    session: Mutex<Option<Session>>,
    model_name: String,
}

impl OnnxActivityModel {
    pub fn new(config: &ModelConfig) -> Self {
        let model_name = config
            .path
            .as_deref()
            .and_then(|p| Path::new(p).file_stem())
            .and_then(|s| s.to_str())
            .unwrap_or("onnx-model")
            .to_string();

        Self {
            model_path: config.path.clone(),
            intra_threads: config.intra_threads,
            session: Mutex::new(None),
            model_name,
        }
    }

    /// Whether a session has been built.
    pub fn is_loaded(&self) -> bool {
        self.session
            .lock()
            .map(|slot| slot.is_some())
            .unwrap_or(false)
    }

    fn build_session(&self) -> Result<Session, ModelError> {
        let model_path = self.model_path.as_deref().ok_or_else(|| ModelError::LoadFailed {
            reason: "no model path configured (set [model].path or STRIDE_MODEL_PATH)".to_string(),
        })?;

        if !Path::new(model_path).exists() {
            return Err(ModelError::LoadFailed {
                reason: format!("model file not found: {model_path}"),
            });
        }

        let session = Session::builder()
            .map_err(|e| ModelError::LoadFailed {
                reason: format!("{model_path}: {e}"),
            })?
            .with_intra_threads(self.intra_threads)
            .map_err(|e| ModelError::LoadFailed {
                reason: format!("{model_path}: {e}"),
            })?
            .commit_from_file(model_path)
            .map_err(|e| ModelError::LoadFailed {
                reason: format!("{model_path}: {e}"),
            })?;

        debug!(model = %self.model_name, path = model_path, "ONNX model loaded");
        Ok(session)
    }

    fn lock_session(&self) -> Result<std::sync::MutexGuard<'_, Option<Session>>, ModelError> {
        self.session.lock().map_err(|e| ModelError::InferenceFailed {
            reason: format!("session lock poisoned: {e}"),
        })
    }

    fn ensure_loaded(&self) -> Result<(), ModelError> {
        let mut slot = self.lock_session()?;
        if slot.is_none() {
            *slot = Some(self.build_session()?);
        }
        Ok(())
    }

    /// Run inference on a single feature vector.
    fn infer(&self, features: &[f32]) -> Result<i64, ModelError> {
        let input = Tensor::from_array((vec![1i64, features.len() as i64], features.to_vec()))
            .map_err(|e| ModelError::InferenceFailed {
                reason: format!("tensor creation error: {e}"),
            })?;

        let mut slot = self.lock_session()?;
        if slot.is_none() {
            debug!(model = %self.model_name, "lazy model load on first prediction");
            *slot = Some(self.build_session()?);
        }
        let Some(session) = slot.as_mut() else {
            return Err(ModelError::InferenceFailed {
                reason: "session unavailable".to_string(),
            });
        };

        let outputs = session
            .run(ort::inputs![input])
            .map_err(|e| ModelError::InferenceFailed {
                reason: e.to_string(),
            })?;

        // The first output carries the prediction.
        let (_name, output) = outputs
            .iter()
            .next()
            .ok_or_else(|| ModelError::InferenceFailed {
                reason: "no output tensor".to_string(),
            })?;

        if let Ok((_shape, labels)) = output.try_extract_tensor::<i64>() {
            return labels
                .first()
                .copied()
                .ok_or_else(|| ModelError::InferenceFailed {
                    reason: "empty label tensor".to_string(),
                });
        }

        let (_shape, scores) =
            output
                .try_extract_tensor::<f32>()
                .map_err(|e| ModelError::InferenceFailed {
                    reason: format!("unsupported output tensor: {e}"),
                })?;

        arg_max(scores)
            .map(|idx| idx as i64)
            .ok_or_else(|| ModelError::InferenceFailed {
                reason: "empty score tensor".to_string(),
            })
    }
}

/// Index of the largest score. NaN scores never win.
fn arg_max(scores: &[f32]) -> Option<usize> {
    scores
        .iter()
        .enumerate()
        .filter(|(_, s)| !s.is_nan())
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(i, _)| i)
}

impl IActivityModel for OnnxActivityModel {
    async fn load_model(&self) -> Result<(), ModelError> {
        self.ensure_loaded()
    }

    async fn predict_activity(&self, features: &[f32]) -> Result<i64, ModelError> {
        self.infer(features)
    }

    fn name(&self) -> &str {
        &self.model_name
    }
}
