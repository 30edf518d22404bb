//! Colour conversion and alpha blending

use duotone_core::config::Color;
use embedded_graphics::pixelcolor::{Rgb565, Rgb888, RgbColor};

/// Convert a face colour into the framebuffer's pixel format
pub fn to_rgb888(color: Color) -> Rgb888 {
    Rgb888::new(color.r, color.g, color.b)
}

/// Convert a framebuffer pixel back into a face colour
pub fn from_rgb888(color: Rgb888) -> Color {
    Color::rgb(color.r(), color.g(), color.b())
}

/// Down-convert for 16-bit panels
pub fn to_rgb565(color: Rgb888) -> Rgb565 {
    Rgb565::new(color.r() >> 3, color.g() >> 2, color.b() >> 3)
}

/// Blend one channel; `alpha` 255 keeps `src`, 0 keeps `dst`
#[inline]
fn blend_channel(src: u8, dst: u8, alpha: u8) -> u8 {
    let a = u32::from(alpha);
    ((u32::from(src) * a + u32::from(dst) * (255 - a) + 127) / 255) as u8
}

/// Source-over blend of `src` onto `dst`
pub fn blend(src: Rgb888, dst: Rgb888, alpha: u8) -> Rgb888 {
    match alpha {
        255 => src,
        0 => dst,
        _ => Rgb888::new(
            blend_channel(src.r(), dst.r(), alpha),
            blend_channel(src.g(), dst.g(), alpha),
            blend_channel(src.b(), dst.b(), alpha),
        ),
    }
}

/// Perceived brightness (0-255)
pub fn luma(color: Rgb888) -> u8 {
    let luma = u32::from(color.r()) * 77 + u32::from(color.g()) * 150 + u32::from(color.b()) * 29;
    (luma >> 8) as u8
}
