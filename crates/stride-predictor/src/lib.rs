//! # stride-predictor
//!
//! Thin facade over the external activity classifier.
//!
//! ```text
//! PredictorGateway<M: IActivityModel>
//! ├── PredictorState (Uninitialized → Loading → Ready | Failed)
//! ├── input guard (exactly 6 features)
//! ├── gating policy (strict | pass-through)
//! └── label domain check (0..label_count)
//! ```
//!
//! [`OnnxActivityModel`] is the production model: an ONNX classifier run
//! through `ort`.

pub mod gateway;
pub mod providers;

pub use gateway::PredictorGateway;
pub use providers::OnnxActivityModel;
