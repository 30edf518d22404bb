//! In-memory RGB888 framebuffer

use alloc::vec;
use alloc::vec::Vec;

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::color::blend;

/// Framebuffer the face renders into
///
/// Tracks whether anything was drawn since the last present so backends can
/// skip unchanged frames.
#[derive(Clone)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgb888>,
    dirty: bool,
}

impl FrameBuffer {
    /// Create a black framebuffer
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb888::BLACK; (width as usize) * (height as usize)],
            dirty: true,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major pixel data
    pub fn pixels(&self) -> &[Rgb888] {
        &self.pixels
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Get a pixel, `None` when out of bounds
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb888> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Set a pixel, ignoring out-of-bounds coordinates
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgb888) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
            self.dirty = true;
        }
    }

    /// Blend a pixel over the current contents
    #[inline]
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Rgb888, alpha: u8) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = blend(color, self.pixels[i], alpha);
            self.dirty = true;
        }
    }

    /// Fill the whole buffer
    pub fn fill(&mut self, color: Rgb888) {
        self.pixels.iter_mut().for_each(|p| *p = color);
        self.dirty = true;
    }

    /// Count pixels of exactly `color` inside `area`
    pub fn count_in(&self, area: &Rectangle, color: Rgb888) -> usize {
        area.points()
            .filter(|p| self.pixel(p.x, p.y) == Some(color))
            .count()
    }

    /// Check if the buffer changed since the last `mark_clean`
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark buffer as clean (after presenting)
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color);
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        if area.size == Size::zero() {
            return Ok(());
        }

        let width = self.width as usize;
        for y in area.rows() {
            let start = y as usize * width + area.top_left.x as usize;
            let end = start + area.size.width as usize;
            self.pixels[start..end].iter_mut().for_each(|p| *p = color);
        }
        self.dirty = true;
        Ok(())
    }
}
