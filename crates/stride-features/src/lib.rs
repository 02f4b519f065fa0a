//! # stride-features
//!
//! Synthesizes 6-dimensional feature vectors: three per-axis means drawn from
//! `[-1.5, 1.5]` and three per-axis standard deviations drawn from `[0, 2]`.
//! Randomness comes from an injected [`IRandomSource`](stride_core::traits::IRandomSource)
//! so tests can fix the draw sequence.

pub mod sources;
pub mod synthesizer;

pub use sources::{source_from_config, SeededSource, ThreadRngSource};
pub use synthesizer::FeatureSynthesizer;
