//! Watch-face engine tying the controller to the render step
//!
//! Hosts feed every callback through [`WatchFace::dispatch`] and call
//! [`WatchFace::draw`] whenever they honour an invalidate request.

use crate::config::{ConfigError, FaceConfig};
use crate::controller::DisplayController;
use crate::render::FaceRenderer;
use crate::state::Event;
use crate::traits::{Bitmap, Bounds, Canvas, FaceHost};

/// One running watch face
pub struct WatchFace<H: FaceHost, B: Bitmap> {
    controller: DisplayController<H>,
    renderer: FaceRenderer<B>,
    frames_drawn: u32,
}

impl<H: FaceHost, B: Bitmap> WatchFace<H, B> {
    /// Build a face after validating its configuration
    pub fn new(host: H, background: B, config: FaceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            controller: DisplayController::new(host, config),
            renderer: FaceRenderer::new(background, config.layout),
            frames_drawn: 0,
        })
    }

    /// Deliver a host callback
    pub fn dispatch(&mut self, event: Event) {
        self.controller.handle_event(event);
    }

    /// Redraw the face into `bounds`
    pub fn draw<C>(&mut self, canvas: &mut C, bounds: Bounds)
    where
        C: Canvas<Bitmap = B>,
    {
        let frame = self.controller.frame();
        self.renderer.render(canvas, bounds, &frame);
        self.frames_drawn = self.frames_drawn.wrapping_add(1);
    }

    /// Number of completed draws
    pub fn frames_drawn(&self) -> u32 {
        self.frames_drawn
    }

    pub fn controller(&self) -> &DisplayController<H> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut DisplayController<H> {
        &mut self.controller
    }

    pub fn renderer(&self) -> &FaceRenderer<B> {
        &self.renderer
    }

    pub fn host(&self) -> &H {
        self.controller.host()
    }

    pub fn host_mut(&mut self) -> &mut H {
        self.controller.host_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Color;
    use crate::mock::{DrawOp, HostCall, MockBitmap, MockCanvas, MockHost};
    use crate::state::InterruptionFilter;
    use crate::traits::MessageTag;

    // 2024-03-03 14:07:09.250 UTC
    const SAMPLE_MS: u64 = 1_709_474_829_250;

    fn face() -> WatchFace<MockHost, MockBitmap> {
        let mut face = WatchFace::new(
            MockHost::with_now(SAMPLE_MS),
            MockBitmap::new(400, 400),
            FaceConfig::default(),
        )
        .unwrap();
        face.dispatch(Event::Create);
        face
    }

    fn texts(canvas: &MockCanvas) -> std::vec::Vec<(std::string::String, u8)> {
        canvas
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, paint, .. } => Some((text.as_str().into(), paint.alpha)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = FaceConfig {
            normal_update_rate_ms: 0,
            ..Default::default()
        };
        let result = WatchFace::new(MockHost::new(), MockBitmap::new(1, 1), config);
        assert!(matches!(result, Err(ConfigError::ZeroUpdateRate)));
    }

    #[test]
    fn test_draw_shows_current_time() {
        let mut face = face();
        face.dispatch(Event::VisibilityChanged(true));
        let mut canvas = MockCanvas::new();
        face.draw(&mut canvas, Bounds::with_size(320, 320));

        let drawn = texts(&canvas);
        assert_eq!(drawn[0].0, "14");
        assert_eq!(drawn[1].0, "07");
        assert_eq!(face.frames_drawn(), 1);
    }

    #[test]
    fn test_muted_draw_uses_mute_alpha() {
        let mut face = face();
        face.dispatch(Event::VisibilityChanged(true));
        face.dispatch(Event::InterruptionFilterChanged(InterruptionFilter::None));

        let mut canvas = MockCanvas::new();
        face.draw(&mut canvas, Bounds::with_size(320, 320));
        assert!(texts(&canvas).iter().all(|(_, alpha)| *alpha == 100));
    }

    #[test]
    fn test_ambient_draw_fills_background() {
        let mut face = face();
        face.dispatch(Event::VisibilityChanged(true));
        face.dispatch(Event::AmbientModeChanged(true));

        let mut canvas = MockCanvas::new();
        let bounds = Bounds::with_size(320, 320);
        face.draw(&mut canvas, bounds);
        assert_eq!(
            canvas.ops()[0],
            DrawOp::Fill {
                bounds,
                color: Color::BLACK
            }
        );
        assert_eq!(face.renderer().background().rescale_count(), 0);
    }

    #[test]
    fn test_full_session() {
        let mut face = face();
        face.dispatch(Event::ApplyWindowInsets(crate::state::ScreenShape::Round));
        face.dispatch(Event::VisibilityChanged(true));
        face.dispatch(Event::Message(MessageTag::UpdateTime));
        face.dispatch(Event::VisibilityChanged(false));
        face.dispatch(Event::Destroy);

        assert!(face.host().pending().is_empty());
        assert_eq!(face.host().count(HostCall::Cancel(MessageTag::UpdateTime)), 3);
        assert_eq!(face.controller().hour_paint().text_size, 20);
    }
}
