//! Paint configuration for the hour and minute digits

use crate::config::Color;
use crate::state::DisplayMode;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Digit typeface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Typeface {
    #[default]
    Regular,
    Bold,
}

/// Resolved drawing attributes for one text element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Paint {
    /// Active colour
    pub color: Color,
    /// Opacity (0 = transparent, 255 = opaque)
    pub alpha: u8,
    /// Smooth glyph edges
    pub anti_alias: bool,
    /// Typeface
    pub typeface: Typeface,
    /// Text size in pixels
    pub text_size: u16,
}

/// Paint that tracks both its interactive and ambient colour
///
/// The active colour follows the display mode; everything else is set
/// explicitly by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextPaint {
    paint: Paint,
    interactive_color: Color,
    ambient_color: Color,
}

impl TextPaint {
    /// Create an opaque, anti-aliased paint in its interactive colour
    pub fn new(interactive_color: Color, ambient_color: Color, typeface: Typeface) -> Self {
        Self {
            paint: Paint {
                color: interactive_color,
                alpha: u8::MAX,
                anti_alias: true,
                typeface,
                text_size: 0,
            },
            interactive_color,
            ambient_color,
        }
    }

    /// Select the colour variant for a display mode
    pub fn apply_mode(&mut self, mode: DisplayMode) {
        self.paint.color = match mode {
            DisplayMode::Interactive => self.interactive_color,
            DisplayMode::Ambient => self.ambient_color,
        };
    }

    pub fn set_alpha(&mut self, alpha: u8) {
        self.paint.alpha = alpha;
    }

    pub fn set_anti_alias(&mut self, anti_alias: bool) {
        self.paint.anti_alias = anti_alias;
    }

    pub fn set_typeface(&mut self, typeface: Typeface) {
        self.paint.typeface = typeface;
    }

    pub fn set_text_size(&mut self, text_size: u16) {
        self.paint.text_size = text_size;
    }

    /// Current drawing attributes
    pub fn paint(&self) -> &Paint {
        &self.paint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_paint_is_opaque_and_smooth() {
        let paint = TextPaint::new(Color::WHITE, Color::GRAY, Typeface::Regular);
        assert_eq!(paint.paint().color, Color::WHITE);
        assert_eq!(paint.paint().alpha, 255);
        assert!(paint.paint().anti_alias);
    }

    #[test]
    fn test_apply_mode_switches_color_only() {
        let mut paint = TextPaint::new(Color::BLACK, Color::GRAY, Typeface::Bold);
        paint.set_alpha(100);
        paint.set_text_size(20);

        paint.apply_mode(DisplayMode::Ambient);
        assert_eq!(paint.paint().color, Color::GRAY);
        assert_eq!(paint.paint().alpha, 100);
        assert_eq!(paint.paint().text_size, 20);
        assert_eq!(paint.paint().typeface, Typeface::Bold);

        paint.apply_mode(DisplayMode::Interactive);
        assert_eq!(paint.paint().color, Color::BLACK);
    }
}
