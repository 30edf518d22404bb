//! Mono font selection
//!
//! Text sizes are pixel heights. The largest built-in font that fits is
//! chosen; sizes beyond the largest font use integer pixel scaling.

use duotone_core::paint::Typeface;
use embedded_graphics::mono_font::{ascii, MonoFont};

/// Regular fonts by glyph height, ascending
static REGULAR: [(u32, &MonoFont<'static>); 11] = [
    (6, &ascii::FONT_4X6),
    (7, &ascii::FONT_5X7),
    (8, &ascii::FONT_5X8),
    (9, &ascii::FONT_6X9),
    (10, &ascii::FONT_6X10),
    (12, &ascii::FONT_6X12),
    (13, &ascii::FONT_6X13),
    (14, &ascii::FONT_7X14),
    (15, &ascii::FONT_9X15),
    (18, &ascii::FONT_9X18),
    (20, &ascii::FONT_10X20),
];

/// Bold fonts by glyph height, ascending
static BOLD: [(u32, &MonoFont<'static>); 4] = [
    (13, &ascii::FONT_6X13_BOLD),
    (14, &ascii::FONT_7X14_BOLD),
    (15, &ascii::FONT_9X15_BOLD),
    (18, &ascii::FONT_9X18_BOLD),
];

/// A font plus the pixel scale to draw it at
#[derive(Clone, Copy)]
pub struct FontChoice {
    pub font: &'static MonoFont<'static>,
    pub scale: u32,
}

impl FontChoice {
    /// Glyph height after scaling
    pub fn height(&self) -> u32 {
        self.font.character_size.height * self.scale
    }
}

/// Pick the font for a text size and typeface
pub fn select_font(text_size: u16, typeface: Typeface) -> FontChoice {
    let table: &[(u32, &'static MonoFont<'static>)] = match typeface {
        Typeface::Regular => &REGULAR,
        Typeface::Bold => &BOLD,
    };

    let size = u32::from(text_size.max(1));
    let (largest, _) = table[table.len() - 1];
    let scale = (size / largest).max(1);
    let target = size / scale;

    let font = table
        .iter()
        .rev()
        .find(|(height, _)| *height <= target)
        .unwrap_or(&table[0])
        .1;

    if scale > 1 {
        log::trace!("Text size {} drawn at {}x scale", text_size, scale);
    }

    FontChoice { font, scale }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sizes() {
        let square = select_font(18, Typeface::Regular);
        assert_eq!(square.font.character_size.height, 18);
        assert_eq!(square.scale, 1);

        let round = select_font(20, Typeface::Regular);
        assert_eq!(round.font.character_size.height, 20);
    }

    #[test]
    fn test_between_sizes_rounds_down() {
        assert_eq!(select_font(11, Typeface::Regular).height(), 10);
        assert_eq!(select_font(17, Typeface::Bold).height(), 15);
    }

    #[test]
    fn test_tiny_sizes_use_smallest() {
        assert_eq!(select_font(1, Typeface::Regular).height(), 6);
        assert_eq!(select_font(0, Typeface::Bold).height(), 13);
    }

    #[test]
    fn test_large_sizes_scale() {
        let choice = select_font(40, Typeface::Regular);
        assert_eq!(choice.scale, 2);
        assert_eq!(choice.height(), 40);

        let bold = select_font(60, Typeface::Bold);
        assert_eq!(bold.scale, 3);
        assert_eq!(bold.height(), 54);
    }

    #[test]
    fn test_bold_differs_from_regular() {
        let regular = select_font(18, Typeface::Regular);
        let bold = select_font(18, Typeface::Bold);
        assert!(!core::ptr::eq(regular.font, bold.font));
    }
}
