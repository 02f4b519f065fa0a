use std::fmt::Write;

use stride_core::models::{FeatureVector, Label};

use super::{describe_label, format_value};

pub fn prediction(features: &FeatureVector, label: Label, duration_ms: f64, precision: usize) -> String {
    let cells: Vec<(&str, String)> = features
        .named()
        .map(|(name, value)| (name, format_value(value, precision)))
        .collect();
    let width = cells
        .iter()
        .map(|(_, v)| v.len())
        .max()
        .unwrap_or(0)
        .max("value".len());

    let mut out = String::new();
    let _ = writeln!(out, "{:<8} {:>width$}", "feature", "value");
    let _ = writeln!(out, "{:-<8} {:->width$}", "", "");
    for (name, value) in &cells {
        let _ = writeln!(out, "{name:<8} {value:>width$}");
    }
    let _ = writeln!(out, "predicted class (label): {}", describe_label(label));
    let _ = write!(out, "prediction time: {duration_ms:.3} ms");
    out
}

pub fn load_timing(duration_ms: f64) -> String {
    format!("model load took {duration_ms:.2} ms")
}

pub fn error(message: &str) -> String {
    format!("error: {message}")
}
