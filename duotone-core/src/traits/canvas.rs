//! Canvas and bitmap traits for the render step

use crate::config::Color;
use crate::paint::Paint;

/// Viewport rectangle in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    /// Bounds anchored at the origin
    pub const fn with_size(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    /// Centre point, rounded towards the top-left
    pub fn center(&self) -> (i32, i32) {
        (
            self.x + (self.width / 2) as i32,
            self.y + (self.height / 2) as i32,
        )
    }
}

/// Trait for raster images the face can scale and blit
pub trait Bitmap: Sized {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Produce a filtered copy scaled to exactly `width` x `height`
    fn scaled(&self, width: u32, height: u32) -> Self;
}

/// Trait for 2D drawing surfaces
///
/// Drawing is infallible from the face's point of view; adapters for
/// fallible targets report their own errors out of band.
pub trait Canvas {
    /// Bitmap type this canvas can blit
    type Bitmap: Bitmap;

    /// Blit a bitmap with its top-left corner at (`x`, `y`)
    fn draw_bitmap(&mut self, bitmap: &Self::Bitmap, x: i32, y: i32);

    /// Fill a rectangle with a solid colour
    fn fill_rect(&mut self, bounds: Bounds, color: Color);

    /// Width in pixels `text` would occupy when drawn with `paint`
    fn measure_text(&self, text: &str, paint: &Paint) -> u32;

    /// Draw `text` starting at `x` with its baseline at `baseline`
    fn draw_text(&mut self, text: &str, x: i32, baseline: i32, paint: &Paint);
}
