/// Linear RGBA color with straight alpha.
///
/// Only used for render-target clears, which are opaque, so no premultiplication
/// is applied.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Background behind the triangle.
    pub const BACKDROP: Color = Color::rgba(0.2, 0.2, 0.6, 1.0);

    #[inline]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Converts to the `f64` representation wgpu expects for `LoadOp::Clear`.
    #[inline]
    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.r as f64,
            g: self.g as f64,
            b: self.b as f64,
            a: self.a as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_is_opaque_blue() {
        let c = Color::BACKDROP;
        assert_eq!((c.r, c.g, c.b, c.a), (0.2, 0.2, 0.6, 1.0));
    }

    #[test]
    fn to_wgpu_widens_without_change() {
        let w = Color::rgba(0.25, 0.5, 0.75, 1.0).to_wgpu();
        assert_eq!((w.r, w.g, w.b, w.a), (0.25, 0.5, 0.75, 1.0));
    }
}
