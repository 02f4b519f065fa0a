use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Rendering format for the output region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewFormat {
    #[default]
    Text,
    Html,
    Json,
}

impl FromStr for ViewFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "html" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown view format '{other}'")),
        }
    }
}

/// Presenter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    pub format: ViewFormat,
    /// Decimal places for feature values.
    pub precision: usize,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            format: ViewFormat::default(),
            precision: defaults::DEFAULT_PRECISION,
        }
    }
}
