//! Paint model shared between the demo and the renderers.
//!
//! Geometry types remain in `coords`.

pub mod color;

pub use color::Color;
