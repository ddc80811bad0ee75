//! tintquad engine crate.
//!
//! Owns the platform + GPU runtime pieces used by the demo: device setup,
//! shader compile/link, the quad and panel renderers, input translation and
//! fatal-error reporting.

pub mod device;
pub mod input;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;

#[cfg(not(target_arch = "wasm32"))]
pub mod window;

#[cfg(target_arch = "wasm32")]
pub mod web;
