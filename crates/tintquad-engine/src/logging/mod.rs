//! Logging utilities.
//!
//! Centralizes logger initialization. Code everywhere else logs through the
//! `log` facade; the backend is `env_logger` natively and the browser console
//! on wasm32.

mod init;

pub use init::{init_logging, LoggingConfig};
