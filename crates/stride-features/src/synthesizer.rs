use stride_core::constants::{FEATURE_COUNT, MEAN_RANGE, STD_RANGE};
use stride_core::models::FeatureVector;
use stride_core::traits::IRandomSource;

/// Produces fresh feature vectors with physically plausible ranges.
pub struct FeatureSynthesizer<R: IRandomSource> {
    source: R,
}

impl<R: IRandomSource> FeatureSynthesizer<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Draw one vector: means first, then standard deviations.
    ///
    /// Draws are clamped into range and a NaN draw becomes the low bound, so
    /// every component stays finite and in range whatever the source returns.
    pub fn generate(&mut self) -> FeatureVector {
        let mut values = [0.0f32; FEATURE_COUNT];
        for (i, value) in values.iter_mut().enumerate() {
            let (low, high) = if i < 3 { MEAN_RANGE } else { STD_RANGE };
            *value = bounded(self.source.uniform(low, high), low, high);
        }
        FeatureVector::new(values)
    }
}

fn bounded(draw: f32, low: f32, high: f32) -> f32 {
    if draw.is_nan() {
        low
    } else {
        draw.clamp(low, high)
    }
}
