use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Whether `predict` may run before the model has been loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GatingPolicy {
    /// Reject predictions with `NotReady` until the gateway is `Ready`.
    #[default]
    Strict,
    /// Forward predictions regardless of state; the model initializes itself lazily.
    PassThrough,
}

impl FromStr for GatingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "pass_through" | "pass-through" | "passthrough" => Ok(Self::PassThrough),
            other => Err(format!("unknown gating policy '{other}'")),
        }
    }
}

impl fmt::Display for GatingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => f.write_str("strict"),
            Self::PassThrough => f.write_str("pass_through"),
        }
    }
}

/// External model configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Path to the ONNX model file.
    pub path: Option<String>,
    /// Intra-op threads for the inference session.
    pub intra_threads: usize,
    /// Labels are valid in `0..label_count`.
    pub label_count: u32,
    pub gating: GatingPolicy,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: None,
            intra_threads: defaults::DEFAULT_INTRA_THREADS,
            label_count: defaults::DEFAULT_LABEL_COUNT,
            gating: GatingPolicy::default(),
        }
    }
}
