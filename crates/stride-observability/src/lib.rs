//! # stride-observability
//!
//! Timing instrumentation around load and predict calls, structured tracing
//! with span and event definitions, and latency/outcome metrics.

pub mod metrics;
pub mod timing;
pub mod tracing_setup;

pub use metrics::HarnessMetrics;
pub use timing::{measure, measure_async, measure_result, measure_result_async, Stopwatch, Timed};
