//! Heap-backed bitmap with filtered scaling

use alloc::vec;
use alloc::vec::Vec;

use duotone_core::traits::Bitmap;
use embedded_graphics::image::ImageDrawable;
use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Subpixel precision used while scaling (1/256 px)
const FRAC_BITS: u32 = 8;
const FRAC_ONE: i64 = 1 << FRAC_BITS;

/// RGB888 image owned on the heap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedBitmap {
    width: u32,
    height: u32,
    pixels: Vec<Rgb888>,
}

impl OwnedBitmap {
    /// Create a bitmap of one colour
    pub fn filled(width: u32, height: u32, color: Rgb888) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; (width as usize) * (height as usize)],
        }
    }

    /// Build a bitmap by evaluating `f` at every pixel
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Rgb888) -> Self {
        let mut pixels = Vec::with_capacity((width as usize) * (height as usize));
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb888> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    pub fn pixels(&self) -> &[Rgb888] {
        &self.pixels
    }

    /// Map a destination coordinate to the source in 1/256 px, pixel centres aligned
    fn source_coord(dst: u32, dst_len: u32, src_len: u32) -> i64 {
        let pos = ((2 * i64::from(dst) + 1) * i64::from(src_len) * FRAC_ONE)
            / (2 * i64::from(dst_len))
            - FRAC_ONE / 2;
        pos.clamp(0, (i64::from(src_len) - 1) * FRAC_ONE)
    }

    /// Bilinear sample at a fixed-point source position
    fn sample(&self, sx: i64, sy: i64) -> Rgb888 {
        let x0 = (sx >> FRAC_BITS) as u32;
        let y0 = (sy >> FRAC_BITS) as u32;
        let x1 = (x0 + 1).min(self.width - 1);
        let y1 = (y0 + 1).min(self.height - 1);
        let wx = (sx & (FRAC_ONE - 1)) as u32;
        let wy = (sy & (FRAC_ONE - 1)) as u32;

        let at = |x: u32, y: u32| self.pixels[(y * self.width + x) as usize];
        let (c00, c10, c01, c11) = (at(x0, y0), at(x1, y0), at(x0, y1), at(x1, y1));

        let lerp2 = |a: u8, b: u8, c: u8, d: u8| -> u8 {
            let one = FRAC_ONE as u32;
            let top = u32::from(a) * (one - wx) + u32::from(b) * wx;
            let bottom = u32::from(c) * (one - wx) + u32::from(d) * wx;
            ((top * (one - wy) + bottom * wy + (1 << 15)) >> 16) as u8
        };

        Rgb888::new(
            lerp2(c00.r(), c10.r(), c01.r(), c11.r()),
            lerp2(c00.g(), c10.g(), c01.g(), c11.g()),
            lerp2(c00.b(), c10.b(), c01.b(), c11.b()),
        )
    }
}

impl Bitmap for OwnedBitmap {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn scaled(&self, width: u32, height: u32) -> Self {
        if self.width == 0 || self.height == 0 {
            return Self::filled(width, height, Rgb888::BLACK);
        }
        if width == self.width && height == self.height {
            return self.clone();
        }

        log::trace!(
            "Scaling bitmap {}x{} -> {}x{}",
            self.width,
            self.height,
            width,
            height
        );
        let xs: Vec<i64> = (0..width)
            .map(|x| Self::source_coord(x, width, self.width))
            .collect();
        let mut pixels = Vec::with_capacity((width as usize) * (height as usize));
        for y in 0..height {
            let sy = Self::source_coord(y, height, self.height);
            pixels.extend(xs.iter().map(|&sx| self.sample(sx, sy)));
        }
        Self {
            width,
            height,
            pixels,
        }
    }
}

impl OriginDimensions for OwnedBitmap {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl ImageDrawable for OwnedBitmap {
    type Color = Rgb888;

    fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        target.fill_contiguous(&self.bounding_box(), self.pixels.iter().copied())
    }

    fn draw_sub_image<D>(&self, target: &mut D, area: &Rectangle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        let area = area.intersection(&self.bounding_box());
        let colors = area
            .points()
            .map(|p| self.pixels[(p.y as u32 * self.width + p.x as u32) as usize]);
        target.fill_contiguous(&Rectangle::new(Point::zero(), area.size), colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> OwnedBitmap {
        OwnedBitmap::from_fn(width, height, |x, _| {
            let v = (x * 255 / (width - 1)) as u8;
            Rgb888::new(v, v, v)
        })
    }

    #[test]
    fn test_scaled_has_requested_size() {
        let bitmap = gradient(16, 8);
        let scaled = bitmap.scaled(40, 3);
        assert_eq!((scaled.width(), scaled.height()), (40, 3));
        assert_eq!(scaled.pixels().len(), 120);
    }

    #[test]
    fn test_same_size_is_copy() {
        let bitmap = gradient(16, 8);
        assert_eq!(bitmap.scaled(16, 8), bitmap);
    }

    #[test]
    fn test_solid_stays_solid() {
        let red = Rgb888::new(200, 10, 10);
        let scaled = OwnedBitmap::filled(5, 7, red).scaled(33, 2);
        assert!(scaled.pixels().iter().all(|p| *p == red));
    }

    #[test]
    fn test_upscale_filters_edges() {
        let bitmap = OwnedBitmap::from_fn(2, 1, |x, _| {
            if x == 0 {
                Rgb888::BLACK
            } else {
                Rgb888::WHITE
            }
        });
        let scaled = bitmap.scaled(8, 1);
        assert_eq!(scaled.pixel(0, 0), Some(Rgb888::BLACK));
        assert_eq!(scaled.pixel(7, 0), Some(Rgb888::WHITE));
        let mid = scaled.pixel(4, 0).map(|p| p.r()).unwrap_or(0);
        assert!(mid > 0 && mid < 255);
    }

    #[test]
    fn test_gradient_is_monotonic() {
        let scaled = gradient(16, 1).scaled(50, 1);
        let reds: std::vec::Vec<u8> = scaled.pixels().iter().map(|p| p.r()).collect();
        assert!(reds.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_empty_source_scales_to_black() {
        let empty = OwnedBitmap::filled(0, 0, Rgb888::WHITE);
        let scaled = empty.scaled(3, 3);
        assert!(scaled.pixels().iter().all(|p| *p == Rgb888::BLACK));
    }
}
