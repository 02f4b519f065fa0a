//! Central metrics registry.
//!
//! [`HarnessMetrics`] owns per-operation latency windows and session counters.

pub mod latency_metrics;
pub mod session_metrics;

pub use latency_metrics::LatencyMetrics;
pub use session_metrics::SessionMetrics;

use std::collections::BTreeMap;

use chrono::Utc;
use serde::Serialize;
use stride_core::constants::operations;
use stride_core::errors::StrideResult;
use stride_core::models::{Label, TimingSample};

#[derive(Debug, Clone, Default, Serialize)]
pub struct HarnessMetrics {
    pub latency: BTreeMap<String, LatencyMetrics>,
    pub session: SessionMetrics,
}

impl HarnessMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a timing sample and bump the matching outcome counter.
    pub fn record_timing(&mut self, sample: &TimingSample) {
        self.latency
            .entry(sample.operation.clone())
            .or_default()
            .record(sample.duration_ms);

        let session = &mut self.session;
        match (sample.operation.as_str(), sample.succeeded) {
            (operations::LOAD_MODEL, true) => session.loads += 1,
            (operations::LOAD_MODEL, false) => session.load_failures += 1,
            (operations::PREDICT, true) => session.predictions += 1,
            (operations::PREDICT, false) => session.prediction_failures += 1,
            _ => {}
        }
    }

    pub fn record_label(&mut self, label: Label) {
        self.session.record_label(label.value());
    }

    pub fn record_rejection(&mut self) {
        self.session.rejected_events += 1;
    }

    /// Latency window for `operation`, if any sample was recorded.
    pub fn latency_for(&self, operation: &str) -> Option<&LatencyMetrics> {
        self.latency.get(operation)
    }

    /// Reset all metrics.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Serialize counters and latency summaries to JSON, stamped with the
    /// capture time.
    pub fn snapshot(&self) -> StrideResult<serde_json::Value> {
        let session = serde_json::to_value(&self.session)?;
        let latency: serde_json::Map<String, serde_json::Value> = self
            .latency
            .iter()
            .map(|(op, m)| {
                (
                    op.clone(),
                    serde_json::json!({
                        "count": m.total_recorded,
                        "mean_ms": m.mean(),
                        "p50_ms": m.percentile(0.5),
                        "p95_ms": m.percentile(0.95),
                    }),
                )
            })
            .collect();

        Ok(serde_json::json!({
            "captured_at": Utc::now().to_rfc3339(),
            "session": session,
            "latency": latency,
        }))
    }
}
