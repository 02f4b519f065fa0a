//! Outcome counters for one harness session.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionMetrics {
    pub loads: u64,
    pub load_failures: u64,
    pub predictions: u64,
    pub prediction_failures: u64,
    /// Events dropped by the re-entrancy guard.
    pub rejected_events: u64,
    /// Successful predictions per label.
    pub label_counts: BTreeMap<u32, u64>,
}

impl SessionMetrics {
    pub fn record_label(&mut self, label: u32) {
        *self.label_counts.entry(label).or_default() += 1;
    }

    /// Fraction of prediction attempts that failed.
    pub fn prediction_failure_rate(&self) -> f64 {
        let attempts = self.predictions + self.prediction_failures;
        if attempts == 0 {
            0.0
        } else {
            self.prediction_failures as f64 / attempts as f64
        }
    }
}
