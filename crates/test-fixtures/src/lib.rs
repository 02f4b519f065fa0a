//! Test fixtures for Stride: golden scenario files and scripted doubles for
//! the external model and the random source.

use std::cell::Cell;
use std::path::PathBuf;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use stride_core::errors::ModelError;
use stride_core::traits::{IActivityModel, IRandomSource};

/// Root directory of the test-fixtures crate, where `golden/` lives.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// `golden/end_to_end_prediction.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionScenario {
    pub description: String,
    pub features: [f32; 6],
    pub label: i64,
    pub expected_cells: Vec<String>,
}

/// `golden/boot_failure.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoadFailureScenario {
    pub description: String,
    pub load_error: String,
}

// ── Scripted random source ───────────────────────────────────────────────

/// Returns a fixed sequence of draws, cycling when exhausted.
///
/// The requested range is ignored, so tests control the exact values.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    draws: Vec<f32>,
    next: usize,
}

impl ScriptedSource {
    pub fn new(draws: Vec<f32>) -> Self {
        assert!(!draws.is_empty(), "ScriptedSource needs at least one draw");
        Self { draws, next: 0 }
    }
}

impl IRandomSource for ScriptedSource {
    fn uniform(&mut self, _low: f32, _high: f32) -> f32 {
        let value = self.draws[self.next % self.draws.len()];
        self.next += 1;
        value
    }
}

// ── Scripted model ───────────────────────────────────────────────────────

/// A stand-in for the external classifier.
///
/// Labels are chosen by exact-input rules (compared with a small tolerance),
/// falling back to a default label. Both calls can be made to fail or to
/// suspend for a fixed delay.
#[derive(Debug, Default)]
pub struct ScriptedModel {
    load_error: Option<String>,
    predict_error: Option<String>,
    default_label: i64,
    rules: Vec<([f32; 6], i64)>,
    delay: Option<Duration>,
    load_calls: Cell<usize>,
    predict_calls: Cell<usize>,
}

impl ScriptedModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `load_model` fail with `reason`.
    pub fn failing_load(mut self, reason: &str) -> Self {
        self.load_error = Some(reason.to_string());
        self
    }

    /// Make `predict_activity` fail with `reason`.
    pub fn failing_predict(mut self, reason: &str) -> Self {
        self.predict_error = Some(reason.to_string());
        self
    }

    /// Label returned when no rule matches.
    pub fn returning(mut self, label: i64) -> Self {
        self.default_label = label;
        self
    }

    /// Return `label` for exactly `features`.
    pub fn with_rule(mut self, features: [f32; 6], label: i64) -> Self {
        self.rules.push((features, label));
        self
    }

    /// Suspend each call for `delay` before completing.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn load_calls(&self) -> usize {
        self.load_calls.get()
    }

    pub fn predict_calls(&self) -> usize {
        self.predict_calls.get()
    }

    async fn pause(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

impl IActivityModel for ScriptedModel {
    async fn load_model(&self) -> Result<(), ModelError> {
        self.load_calls.set(self.load_calls.get() + 1);
        self.pause().await;
        match &self.load_error {
            Some(reason) => Err(ModelError::LoadFailed {
                reason: reason.clone(),
            }),
            None => Ok(()),
        }
    }

    async fn predict_activity(&self, features: &[f32]) -> Result<i64, ModelError> {
        self.predict_calls.set(self.predict_calls.get() + 1);
        self.pause().await;
        if let Some(reason) = &self.predict_error {
            return Err(ModelError::InferenceFailed {
                reason: reason.clone(),
            });
        }
        let label = self
            .rules
            .iter()
            .find(|(expected, _)| {
                expected.len() == features.len()
                    && expected
                        .iter()
                        .zip(features)
                        .all(|(a, b)| (a - b).abs() < 1e-6)
            })
            .map(|(_, label)| *label)
            .unwrap_or(self.default_label);
        Ok(label)
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
