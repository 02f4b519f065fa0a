use std::future::Future;

use crate::errors::ModelError;

/// The external activity classifier.
///
/// Both calls return futures: they are the only suspension points of the
/// harness. Implementations backed by a synchronous runtime simply complete
/// on first poll.
pub trait IActivityModel {
    /// Prepare the predictor for use. Repeated calls after success must be harmless.
    fn load_model(&self) -> impl Future<Output = Result<(), ModelError>>;

    /// Classify a feature vector into a raw integer label.
    ///
    /// Behavior for slices whose length is not 6 is undefined; callers guard it.
    fn predict_activity(&self, features: &[f32]) -> impl Future<Output = Result<i64, ModelError>>;

    /// Human-readable model name.
    fn name(&self) -> &str;
}
