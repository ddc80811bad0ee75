//! Core engine-facing contracts.
//!
//! Defines the interface between the platform loop and the demo: the [`App`]
//! callbacks, the per-frame context, and fatal-error reporting.

mod alert;
mod app;
mod ctx;
mod fatal;

pub use alert::alert;
pub use app::{App, AppControl};
pub use ctx::FrameCtx;
pub use fatal::{report_fatal, FatalError};
