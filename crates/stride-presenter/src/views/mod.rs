//! View builders, one module per format.

pub mod html;
pub mod json;
pub mod text;

use stride_core::config::ViewFormat;
use stride_core::models::{FeatureVector, Label};

/// Format a feature value with `precision` decimals. Negative zero prints as zero.
pub fn format_value(value: f32, precision: usize) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value:.precision$}")
}

/// `3 (climb-up)` for known labels, `7` otherwise.
pub fn describe_label(label: Label) -> String {
    match label.activity_name() {
        Some(name) => format!("{label} ({name})"),
        None => label.to_string(),
    }
}

pub fn prediction(
    format: ViewFormat,
    features: &FeatureVector,
    label: Label,
    duration_ms: f64,
    precision: usize,
) -> String {
    match format {
        ViewFormat::Text => text::prediction(features, label, duration_ms, precision),
        ViewFormat::Html => html::prediction(features, label, duration_ms, precision),
        ViewFormat::Json => json::prediction(features, label, duration_ms, precision),
    }
}

pub fn load_timing(format: ViewFormat, duration_ms: f64) -> String {
    match format {
        ViewFormat::Text | ViewFormat::Html => text::load_timing(duration_ms),
        ViewFormat::Json => json::load_timing(duration_ms),
    }
}

pub fn error(format: ViewFormat, message: &str) -> String {
    match format {
        ViewFormat::Text => text::error(message),
        ViewFormat::Html => html::error(message),
        ViewFormat::Json => json::error(message),
    }
}
