//! tintquad demo: a flat quad whose fill color is picked with four buttons.
//!
//! Natively the buttons are drawn under the canvas in a winit window; in the
//! browser they are the page's HTML buttons.

pub mod config;
pub mod controller;
pub mod palette;
pub mod toolbar;

#[cfg(not(target_arch = "wasm32"))]
mod app;

#[cfg(not(target_arch = "wasm32"))]
pub use app::DemoApp;

#[cfg(target_arch = "wasm32")]
mod web;

pub use config::DemoConfig;
pub use controller::ColorController;
pub use palette::{ColorChoice, DEFAULT_COLOR};
