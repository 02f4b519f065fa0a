//! Harness configuration with layered resolution.

pub mod defaults;
pub mod feature_config;
pub mod model_config;
pub mod observability_config;
pub mod presentation_config;

pub use feature_config::FeatureConfig;
pub use model_config::{GatingPolicy, ModelConfig};
pub use observability_config::ObservabilityConfig;
pub use presentation_config::{PresentationConfig, ViewFormat};

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::CONFIG_FILENAME;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`STRIDE_*`)
/// 2. Project config (`stride.toml` in the given root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StrideConfig {
    pub model: ModelConfig,
    pub features: FeatureConfig,
    pub presentation: PresentationConfig,
    pub observability: ObservabilityConfig,
}

impl StrideConfig {
    /// Load configuration for the project rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILENAME);
        let mut config = if path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file without env overrides.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `STRIDE_*` overrides using `lookup` to read variables.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("STRIDE_MODEL_PATH") {
            self.model.path = Some(path);
        }
        if let Some(seed) = lookup("STRIDE_SEED") {
            let seed = seed.trim().parse().map_err(|_| ConfigError::ValidationFailed {
                field: "STRIDE_SEED".to_string(),
                message: format!("'{seed}' is not an unsigned integer"),
            })?;
            self.features.seed = Some(seed);
        }
        if let Some(format) = lookup("STRIDE_FORMAT") {
            self.presentation.format =
                format.parse().map_err(|message| ConfigError::ValidationFailed {
                    field: "STRIDE_FORMAT".to_string(),
                    message,
                })?;
        }
        if let Some(gating) = lookup("STRIDE_GATING") {
            self.model.gating =
                gating.parse().map_err(|message| ConfigError::ValidationFailed {
                    field: "STRIDE_GATING".to_string(),
                    message,
                })?;
        }
        Ok(())
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model.label_count == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "model.label_count".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.model.intra_threads == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "model.intra_threads".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.presentation.precision > defaults::MAX_PRECISION {
            return Err(ConfigError::ValidationFailed {
                field: "presentation.precision".to_string(),
                message: format!("must be at most {}", defaults::MAX_PRECISION),
            });
        }
        Ok(())
    }
}
