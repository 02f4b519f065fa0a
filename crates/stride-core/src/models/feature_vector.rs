use serde::{Deserialize, Serialize};

use crate::constants::{FEATURE_COUNT, FEATURE_NAMES};
use crate::errors::GatewayError;

/// Six summary statistics of an accelerometer window:
/// `[mean_x, mean_y, mean_z, std_x, std_y, std_z]`.
///
/// The fixed-size array makes the length invariant structural. Slices coming
/// from outside go through `TryFrom<&[f32]>`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector([f32; FEATURE_COUNT]);

impl FeatureVector {
    pub fn new(values: [f32; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn values(&self) -> [f32; FEATURE_COUNT] {
        self.0
    }

    /// The three per-axis means.
    pub fn means(&self) -> &[f32] {
        &self.0[..3]
    }

    /// The three per-axis standard deviations.
    pub fn stds(&self) -> &[f32] {
        &self.0[3..]
    }

    /// `(name, value)` pairs in vector order.
    pub fn named(&self) -> impl Iterator<Item = (&'static str, f32)> + '_ {
        FEATURE_NAMES.iter().copied().zip(self.0.iter().copied())
    }
}

impl TryFrom<&[f32]> for FeatureVector {
    type Error = GatewayError;

    fn try_from(values: &[f32]) -> Result<Self, Self::Error> {
        let array: [f32; FEATURE_COUNT] =
            values.try_into().map_err(|_| GatewayError::InvalidInput {
                expected: FEATURE_COUNT,
                actual: values.len(),
            })?;
        Ok(Self(array))
    }
}
