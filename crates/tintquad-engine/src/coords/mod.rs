//! Coordinate and geometry types shared by the renderers and the demo.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! The quad itself lives in clip space; only the panel renderer and hit
//! testing use logical pixels.

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
