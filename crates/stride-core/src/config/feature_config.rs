use serde::{Deserialize, Serialize};

/// Feature synthesis configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    /// Seed for a reproducible draw sequence. `None` uses the thread RNG.
    pub seed: Option<u64>,
}
