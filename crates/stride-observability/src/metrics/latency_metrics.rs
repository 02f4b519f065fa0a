//! Latency samples for one operation.

use serde::{Deserialize, Serialize};
use stride_core::constants::MAX_LATENCY_SAMPLES;

/// Rolling window of latency samples in milliseconds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LatencyMetrics {
    samples_ms: Vec<f64>,
    /// Samples ever recorded, including ones rotated out.
    pub total_recorded: u64,
}

impl LatencyMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a latency.
    pub fn record(&mut self, duration_ms: f64) {
        self.total_recorded += 1;
        self.samples_ms.push(duration_ms);
        if self.samples_ms.len() > MAX_LATENCY_SAMPLES {
            self.samples_ms
                .drain(..self.samples_ms.len() - MAX_LATENCY_SAMPLES);
        }
    }

    pub fn len(&self) -> usize {
        self.samples_ms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples_ms.is_empty()
    }

    /// Mean of retained samples, 0.0 when empty.
    pub fn mean(&self) -> f64 {
        if self.samples_ms.is_empty() {
            return 0.0;
        }
        self.samples_ms.iter().sum::<f64>() / self.samples_ms.len() as f64
    }

    /// Latency at the given percentile (0.0–1.0).
    pub fn percentile(&self, p: f64) -> f64 {
        if self.samples_ms.is_empty() {
            return 0.0;
        }
        let mut sorted = self.samples_ms.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let idx = ((p * (sorted.len() - 1) as f64).round() as usize).min(sorted.len() - 1);
        sorted[idx]
    }
}
