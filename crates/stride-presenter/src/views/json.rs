use serde_json::{json, Map, Value};
use stride_core::models::{FeatureVector, Label};

use super::format_value;

pub fn prediction(features: &FeatureVector, label: Label, duration_ms: f64, precision: usize) -> String {
    let cells: Map<String, Value> = features
        .named()
        .map(|(name, value)| (name.to_string(), Value::String(format_value(value, precision))))
        .collect();

    let view = json!({
        "features": cells,
        "label": label.value(),
        "activity": label.activity_name(),
        "elapsed_ms": duration_ms,
    });
    format!("{view:#}")
}

pub fn load_timing(duration_ms: f64) -> String {
    json!({ "load_ms": duration_ms }).to_string()
}

pub fn error(message: &str) -> String {
    json!({ "error": message }).to_string()
}
