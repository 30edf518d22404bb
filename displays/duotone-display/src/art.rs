//! Procedural background art
//!
//! The two-tone face splits the dial along the anti-diagonal: the upper
//! left half is black behind the white hour digits, the lower right half is
//! white behind the black minute digits.

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

use crate::bitmap::OwnedBitmap;

/// Source resolution of the stock background
pub const BACKGROUND_SIZE: u32 = 400;

/// Black upper-left triangle on a white field
pub fn black_and_white(width: u32, height: u32) -> OwnedBitmap {
    two_tone(width, height, Rgb888::BLACK, Rgb888::WHITE)
}

/// Split the bitmap along the anti-diagonal into `upper` and `lower`
///
/// A pixel belongs to the upper half when its centre lies above the line from
/// the top-right to the bottom-left corner.
pub fn two_tone(width: u32, height: u32, upper: Rgb888, lower: Rgb888) -> OwnedBitmap {
    let (w, h) = (u64::from(width), u64::from(height));
    OwnedBitmap::from_fn(width, height, |x, y| {
        // (x + 0.5) / w + (y + 0.5) / h < 1, scaled by 2wh
        let lhs = (2 * u64::from(x) + 1) * h + (2 * u64::from(y) + 1) * w;
        if lhs < 2 * w * h {
            upper
        } else {
            lower
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use duotone_core::traits::Bitmap;

    #[test]
    fn test_corners() {
        let art = black_and_white(100, 100);
        assert_eq!(art.pixel(0, 0), Some(Rgb888::BLACK));
        assert_eq!(art.pixel(99, 99), Some(Rgb888::WHITE));
        assert_eq!(art.pixel(10, 80), Some(Rgb888::BLACK));
        assert_eq!(art.pixel(80, 30), Some(Rgb888::WHITE));
    }

    #[test]
    fn test_halves_balance() {
        let art = black_and_white(64, 64);
        let black = art.pixels().iter().filter(|p| **p == Rgb888::BLACK).count();
        let total = (art.width() * art.height()) as usize;
        assert!(black.abs_diff(total / 2) <= 64);
    }

    #[test]
    fn test_digit_regions() {
        // Hour sits left of centre on the centre line, minute right and below
        let art = black_and_white(BACKGROUND_SIZE, BACKGROUND_SIZE);
        assert_eq!(art.pixel(170, 195), Some(Rgb888::BLACK));
        assert_eq!(art.pixel(215, 270), Some(Rgb888::WHITE));
    }

    #[test]
    fn test_non_square() {
        let art = two_tone(40, 10, Rgb888::RED, Rgb888::BLUE);
        assert_eq!(art.pixel(0, 9), Some(Rgb888::RED));
        assert_eq!(art.pixel(39, 0), Some(Rgb888::BLUE));
    }
}
