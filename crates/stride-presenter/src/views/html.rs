use std::fmt::Write;

use stride_core::models::{FeatureVector, Label};

use super::{describe_label, format_value};

pub fn prediction(features: &FeatureVector, label: Label, duration_ms: f64, precision: usize) -> String {
    let mut out = String::from("<table>\n  <thead>\n    <tr><th>feature</th><th>value</th></tr>\n  </thead>\n  <tbody>\n");
    for (name, value) in features.named() {
        let _ = writeln!(
            out,
            "    <tr><td>{name}</td><td>{}</td></tr>",
            format_value(value, precision)
        );
    }
    out.push_str("  </tbody>\n</table>\n");
    let _ = writeln!(
        out,
        "<p>predicted class (label): <strong>{}</strong></p>",
        escape(&describe_label(label))
    );
    let _ = write!(out, "<p>prediction time: {duration_ms:.3} ms</p>");
    out
}

pub fn error(message: &str) -> String {
    format!("<p class=\"error\">error: {}</p>", escape(message))
}

/// Escape text for an HTML body.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
