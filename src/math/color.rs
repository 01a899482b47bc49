//! Sampled pixel colors and the distance metrics used to compare them

use image::Rgba;

/// Red, green and blue channels of one pixel at 16-bit depth
///
/// Alpha is dropped at sampling time without premultiplying, so transparent
/// pixels keep their stored color. Two colors are equal only when every
/// channel matches exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    /// Red channel
    pub r: u16,
    /// Green channel
    pub g: u16,
    /// Blue channel
    pub b: u16,
}

impl Color {
    /// Create a color from its three channels
    pub const fn new(r: u16, g: u16, b: u16) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgba<u16>> for Color {
    fn from(pixel: Rgba<u16>) -> Self {
        let [r, g, b, _alpha] = pixel.0;
        Self { r, g, b }
    }
}

/// Rec. 601 luma weights for red, green and blue
pub const LUMA_WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];

/// Squared Euclidean distance between two colors in RGB space
pub const fn squared_distance(a: Color, b: Color) -> u64 {
    let dr = a.r.abs_diff(b.r) as u64;
    let dg = a.g.abs_diff(b.g) as u64;
    let db = a.b.abs_diff(b.b) as u64;
    dr * dr + dg * dg + db * db
}

/// Collapse a color to a single brightness value
pub fn luma(color: Color) -> f64 {
    let [wr, wg, wb] = LUMA_WEIGHTS;
    wr.mul_add(
        f64::from(color.r),
        wg.mul_add(f64::from(color.g), wb * f64::from(color.b)),
    )
}
