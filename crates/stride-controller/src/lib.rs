//! # stride-controller
//!
//! Drives the page: each trigger becomes a [`UiEvent`] dispatched to the
//! [`Controller`] state machine.
//!
//! ```text
//! Idle ──load──▶ LoadingModel ──ok──▶ Ready
//!   ▲                 │ err              │
//!   └─────────────────┘                  │ run
//!   ▲                                    ▼
//!   └──────────err──────────────── Predicting ──ok──▶ Ready
//! ```
//!
//! Events arriving while `LoadingModel` or `Predicting` are rejected rather
//! than queued.

pub mod controller;
pub mod events;
mod unwind;

pub use controller::Controller;
pub use events::{ControllerPhase, Dispatch, UiEvent};
