//! Render step: background plus hour and minute digits

use crate::background::BackgroundCache;
use crate::config::LayoutConfig;
use crate::controller::Frame;
use crate::state::DisplayMode;
use crate::traits::{Bitmap, Bounds, Canvas};

/// Draws a [`Frame`] onto a canvas
pub struct FaceRenderer<B: Bitmap> {
    background: BackgroundCache<B>,
    layout: LayoutConfig,
}

impl<B: Bitmap> FaceRenderer<B> {
    pub fn new(background: B, layout: LayoutConfig) -> Self {
        Self {
            background: BackgroundCache::new(background),
            layout,
        }
    }

    /// Paint one frame into `bounds`
    ///
    /// Interactive frames blit the background scaled to the viewport,
    /// ambient frames fill it flat. The hour is right-aligned against the
    /// vertical centre line on the centre baseline; the minute starts just
    /// right of the line, `minute_drop_px` lower.
    pub fn render<C>(&mut self, canvas: &mut C, bounds: Bounds, frame: &Frame)
    where
        C: Canvas<Bitmap = B>,
    {
        match frame.mode {
            DisplayMode::Interactive => {
                let scaled = self.background.scaled_for(bounds.width, bounds.height);
                canvas.draw_bitmap(scaled, bounds.x, bounds.y);
            }
            DisplayMode::Ambient => {
                canvas.fill_rect(bounds, frame.ambient_background);
            }
        }

        let (cx, cy) = bounds.center();
        let gap = self.layout.digit_gap_px;

        let hour_width = canvas.measure_text(&frame.hour, &frame.hour_paint) as i32;
        let hour_x = cx - (hour_width + gap);
        canvas.draw_text(&frame.hour, hour_x, cy, &frame.hour_paint);

        let minute_x = cx + gap;
        let minute_baseline = cy + self.layout.minute_drop_px;
        canvas.draw_text(&frame.minute, minute_x, minute_baseline, &frame.minute_paint);

        log::trace!(
            "Rendered {}:{} at hour x {}, minute x {}",
            frame.hour.as_str(),
            frame.minute.as_str(),
            hour_x,
            minute_x
        );
    }

    pub fn background(&self) -> &BackgroundCache<B> {
        &self.background
    }
}
