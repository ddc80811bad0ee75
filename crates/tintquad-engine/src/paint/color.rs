/// Straight-alpha RGBA color.
///
/// Invariant: every channel lies in `[0.0, 1.0]`. The fields are private;
/// [`Color::new`] clamps and the named constants satisfy the range by
/// construction.
///
/// The value is uploaded to shaders unchanged, so the fill on screen is the
/// exact literal stored here.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    r: f32,
    g: f32,
    b: f32,
    a: f32,
}

impl Color {
    pub const RED: Color = Color::rgba_unchecked(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Color = Color::rgba_unchecked(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Color = Color::rgba_unchecked(0.0, 0.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgba_unchecked(0.0, 0.0, 0.0, 1.0);

    const fn rgba_unchecked(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color, clamping each channel to `[0, 1]`.
    ///
    /// NaN channels become `0.0`.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: unit(r),
            g: unit(g),
            b: unit(b),
            a: unit(a),
        }
    }

    /// Opaque color from 8-bit channels, each divided by 255.
    ///
    /// No transfer function is applied; the surface is non-sRGB (see
    /// `GpuInit::prefer_srgb`), so the bytes reach the screen as given.
    #[inline]
    pub fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    #[inline]
    pub const fn r(self) -> f32 {
        self.r
    }

    #[inline]
    pub const fn g(self) -> f32 {
        self.g
    }

    #[inline]
    pub const fn b(self) -> f32 {
        self.b
    }

    #[inline]
    pub const fn a(self) -> f32 {
        self.a
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Moves each RGB channel towards white by `t` (`0` keeps the color, `1` is white).
    #[inline]
    pub fn lighten(self, t: f32) -> Self {
        let t = unit(t);
        Self::new(
            self.r + (1.0 - self.r) * t,
            self.g + (1.0 - self.g) * t,
            self.b + (1.0 - self.b) * t,
            self.a,
        )
    }
}

impl From<Color> for wgpu::Color {
    fn from(c: Color) -> Self {
        wgpu::Color {
            r: c.r as f64,
            g: c.g as f64,
            b: c.b as f64,
            a: c.a as f64,
        }
    }
}

#[inline]
fn unit(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_unit_range(c: Color) -> bool {
        c.to_array().iter().all(|v| (0.0..=1.0).contains(v))
    }

    #[test]
    fn constants_are_in_range() {
        for c in [Color::RED, Color::GREEN, Color::BLUE, Color::BLACK, Color::default()] {
            assert!(in_unit_range(c), "{c:?}");
        }
    }

    #[test]
    fn new_clamps_out_of_range_channels() {
        let c = Color::new(2.5, -1.0, f32::NAN, 1.0);
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (1.0, 0.0, 0.0, 1.0));
        assert!(in_unit_range(c));
    }

    #[test]
    fn every_constructor_stays_in_range() {
        let built = [
            Color::new(f32::INFINITY, f32::NEG_INFINITY, 0.5, -0.0),
            Color::from_rgb_u8(255, 0, 128),
            Color::RED.lighten(7.0),
            Color::BLUE.lighten(f32::NAN),
        ];
        for c in built {
            assert!(in_unit_range(c), "{c:?}");
        }
    }

    #[test]
    fn to_array_preserves_literals() {
        assert_eq!(Color::GREEN.to_array(), [0.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn bytes_are_not_gamma_converted() {
        let c = Color::from_rgb_u8(51, 102, 255);
        assert_eq!(c.to_array(), [0.2, 0.4, 1.0, 1.0]);
    }

    #[test]
    fn lighten_moves_towards_white() {
        let c = Color::BLACK.lighten(0.5);
        assert_eq!(c.to_array(), [0.5, 0.5, 0.5, 1.0]);
        assert_eq!(Color::BLUE.lighten(0.0), Color::BLUE);
    }
}
