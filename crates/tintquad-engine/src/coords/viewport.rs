use crate::device::SurfaceSize;

/// Drawable area in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Logical size of a physical surface at `scale` physical px per logical px.
    ///
    /// Non-positive scales are treated as `1.0`.
    pub fn from_physical(size: SurfaceSize, scale: f32) -> Self {
        let scale = if scale > 0.0 { scale } else { 1.0 };
        Self::new(size.width as f32 / scale, size.height as f32 / scale)
    }
}
