use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.origin.x && p.y >= self.origin.y && p.x < max.x && p.y < max.y
    }

    /// Shrinks the rectangle by `d` on every side. Never produces a negative size.
    #[inline]
    pub fn inset(self, d: f32) -> Self {
        let w = (self.size.x - 2.0 * d).max(0.0);
        let h = (self.size.y - 2.0 * d).max(0.0);
        Rect::new(self.origin.x + d, self.origin.y + d, w, h)
    }

    /// Converts to physical pixels and clamps to a `surface_w x surface_h` target.
    ///
    /// Returns `(x, y, w, h)` for `RenderPass::set_viewport`, or `None` when the
    /// clamped area is empty.
    pub fn to_physical(self, scale: f32, surface_w: u32, surface_h: u32) -> Option<(f32, f32, f32, f32)> {
        let sw = surface_w as f32;
        let sh = surface_h as f32;

        let x0 = (self.origin.x * scale).clamp(0.0, sw);
        let y0 = (self.origin.y * scale).clamp(0.0, sh);
        let x1 = ((self.origin.x + self.size.x) * scale).clamp(0.0, sw);
        let y1 = ((self.origin.y + self.size.y) * scale).clamp(0.0, sh);

        let (w, h) = (x1 - x0, y1 - y0);
        if w <= 0.0 || h <= 0.0 { None } else { Some((x0, y0, w, h)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_interior_point() {
        assert!(r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn contains_top_left_inclusive_bottom_right_exclusive() {
        let rect = r(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(Vec2::new(0.0, 0.0)));
        assert!(!rect.contains(Vec2::new(10.0, 10.0)));
    }

    #[test]
    fn contains_outside() {
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(-1.0, 5.0)));
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(5.0, 11.0)));
    }

    // ── inset ─────────────────────────────────────────────────────────────

    #[test]
    fn inset_shrinks_every_side() {
        assert_eq!(r(10.0, 20.0, 100.0, 50.0).inset(5.0), r(15.0, 25.0, 90.0, 40.0));
    }

    #[test]
    fn inset_larger_than_rect_is_empty() {
        assert!(r(0.0, 0.0, 4.0, 4.0).inset(3.0).is_empty());
    }

    // ── to_physical ───────────────────────────────────────────────────────

    #[test]
    fn to_physical_scales_by_dpi() {
        let phys = r(0.0, 0.0, 640.0, 480.0).to_physical(2.0, 1280, 1200);
        assert_eq!(phys, Some((0.0, 0.0, 1280.0, 960.0)));
    }

    #[test]
    fn to_physical_clamps_to_surface() {
        let phys = r(600.0, 0.0, 100.0, 100.0).to_physical(1.0, 640, 480);
        assert_eq!(phys, Some((600.0, 0.0, 40.0, 100.0)));
    }

    #[test]
    fn to_physical_outside_surface_is_none() {
        assert!(r(700.0, 0.0, 10.0, 10.0).to_physical(1.0, 640, 480).is_none());
    }
}
