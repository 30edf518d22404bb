//! Face canvas implementation for the framebuffer

use duotone_core::config::Color;
use duotone_core::paint::Paint;
use duotone_core::traits::{Bounds, Canvas};
use embedded_graphics::image::Image;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::renderer::TextRenderer;
use embedded_graphics::text::{Baseline, Text};

use crate::bitmap::OwnedBitmap;
use crate::color::to_rgb888;
use crate::font::{select_font, FontChoice};
use crate::framebuffer::FrameBuffer;

/// Neighbour offsets for the soft edge pass
const EDGE_OFFSETS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Draw target that blends glyph pixels and scales them about an anchor
struct GlyphTarget<'a> {
    fb: &'a mut FrameBuffer,
    anchor: Point,
    offset: Point,
    scale: i32,
    alpha: u8,
}

impl OriginDimensions for GlyphTarget<'_> {
    fn size(&self) -> Size {
        self.fb.size()
    }
}

impl DrawTarget for GlyphTarget<'_> {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let origin = self.anchor + (point - self.anchor) * self.scale + self.offset;
            for dy in 0..self.scale {
                for dx in 0..self.scale {
                    self.fb
                        .blend_pixel(origin.x + dx, origin.y + dy, color, self.alpha);
                }
            }
        }
        Ok(())
    }
}

fn text_style(choice: &FontChoice, color: Color) -> MonoTextStyle<'static, Rgb888> {
    MonoTextStyle::new(choice.font, to_rgb888(color))
}

impl Canvas for FrameBuffer {
    type Bitmap = OwnedBitmap;

    fn draw_bitmap(&mut self, bitmap: &OwnedBitmap, x: i32, y: i32) {
        Image::new(bitmap, Point::new(x, y)).draw(self).ok();
    }

    fn fill_rect(&mut self, bounds: Bounds, color: Color) {
        Rectangle::new(
            Point::new(bounds.x, bounds.y),
            Size::new(bounds.width, bounds.height),
        )
        .into_styled(PrimitiveStyle::with_fill(to_rgb888(color)))
        .draw(self)
        .ok();
    }

    fn measure_text(&self, text: &str, paint: &Paint) -> u32 {
        let choice = select_font(paint.text_size, paint.typeface);
        let metrics =
            text_style(&choice, paint.color).measure_string(text, Point::zero(), Baseline::Alphabetic);
        metrics.next_position.x.max(0) as u32 * choice.scale
    }

    fn draw_text(&mut self, text: &str, x: i32, baseline: i32, paint: &Paint) {
        if paint.alpha == 0 || text.is_empty() {
            return;
        }

        let choice = select_font(paint.text_size, paint.typeface);
        let style = text_style(&choice, paint.color);
        let anchor = Point::new(x, baseline);
        let scale = choice.scale as i32;

        // Mono glyphs have hard edges; a faint neighbour pass softens them
        if paint.anti_alias {
            for (dx, dy) in EDGE_OFFSETS {
                let mut target = GlyphTarget {
                    fb: self,
                    anchor,
                    offset: Point::new(dx, dy),
                    scale,
                    alpha: paint.alpha / 4,
                };
                Text::with_baseline(text, anchor, style, Baseline::Alphabetic)
                    .draw(&mut target)
                    .ok();
            }
        }

        let mut target = GlyphTarget {
            fb: self,
            anchor,
            offset: Point::zero(),
            scale,
            alpha: paint.alpha,
        };
        Text::with_baseline(text, anchor, style, Baseline::Alphabetic)
            .draw(&mut target)
            .ok();
    }
}
