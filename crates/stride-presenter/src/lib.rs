//! # stride-presenter
//!
//! Turns a feature vector, label, and timing into a view and writes it to one
//! of the two page regions. Rendering never fails: a surface that cannot be
//! written logs a warning and the harness carries on.
//!
//! | Format | Output region content |
//! |--------|-----------------------|
//! | Text | aligned `feature / value` table plus label and time lines |
//! | Html | `<table>` with one row per feature plus `<p>` lines |
//! | Json | one object with 4-decimal feature strings |

pub mod presenter;
pub mod surfaces;
pub mod views;

pub use presenter::Presenter;
pub use surfaces::{BufferSurface, TerminalSurface};
