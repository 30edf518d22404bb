//! Face task
//!
//! Owns the watch face, its framebuffer and the display backend. Host
//! callbacks arrive one at a time on the event queue; callbacks the host
//! raises while one is handled follow it directly. Afterwards a pending
//! invalidate is honoured by drawing and presenting a frame.

use std::path::PathBuf;

use duotone_core::state::Event;
use duotone_core::traits::Bounds;
use duotone_core::WatchFace;
use duotone_display::art::{black_and_white, BACKGROUND_SIZE};
use duotone_display::{DisplayBackend, FrameBuffer, OwnedBitmap};
use log::{debug, error, info};

use crate::backend::SnapshotBackend;
use crate::channels::{ENVIRONMENT, EVENTS, FACE_STOPPED, MESSAGES};
use crate::clock::HostClock;
use crate::config::HostConfig;
use crate::error::HostError;
use crate::host::EmbassyHost;

/// Face plus everything needed to show it
pub struct FaceRuntime<'a, D: DisplayBackend> {
    face: WatchFace<EmbassyHost<'a>, OwnedBitmap>,
    framebuffer: FrameBuffer,
    bounds: Bounds,
    display: D,
}

impl<'a, D: DisplayBackend> FaceRuntime<'a, D> {
    pub fn new(host: EmbassyHost<'a>, config: &HostConfig, display: D) -> Result<Self, HostError> {
        let (width, height) = (config.host.width, config.host.height);
        let background = black_and_white(BACKGROUND_SIZE, BACKGROUND_SIZE);
        let face = WatchFace::new(host, background, config.face)?;

        Ok(Self {
            face,
            framebuffer: FrameBuffer::new(width, height),
            bounds: Bounds::with_size(width, height),
            display,
        })
    }

    /// Deliver one callback; returns `true` once the face is destroyed
    pub fn handle(&mut self, event: Event) -> bool {
        self.face.dispatch(event);
        while let Some(callback) = self.face.host_mut().take_callback() {
            debug!("Host callback: {:?}", callback);
            self.face.dispatch(callback);
        }

        let redraw = self.face.host_mut().take_redraw();
        let controller = self.face.controller();
        if redraw && controller.lifecycle().is_active() && controller.is_visible() {
            self.redraw();
        }

        !self.face.controller().lifecycle().is_active() && event == Event::Destroy
    }

    fn redraw(&mut self) {
        self.face.draw(&mut self.framebuffer, self.bounds);
        if !self.framebuffer.is_dirty() {
            return;
        }
        match self.display.present(&self.framebuffer) {
            Ok(()) => self.framebuffer.mark_clean(),
            Err(e) => error!("Present failed: {:?}", e),
        }
    }

    pub fn face(&self) -> &WatchFace<EmbassyHost<'a>, OwnedBitmap> {
        &self.face
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.framebuffer
    }

    pub fn display(&self) -> &D {
        &self.display
    }
}

/// Face task - creates the face and processes host callbacks until destroyed
#[embassy_executor::task]
pub async fn face_task(config: &'static HostConfig, clock: HostClock) {
    info!("Face task started");

    let host = EmbassyHost::new(&MESSAGES, &ENVIRONMENT, clock);
    let display = SnapshotBackend::new(
        config.host.width,
        config.host.height,
        config.host.snapshot_path.as_ref().map(PathBuf::from),
    );
    let mut runtime = match FaceRuntime::new(host, config, display) {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Face setup failed: {}", e);
            FACE_STOPPED.signal(());
            return;
        }
    };

    runtime.handle(Event::Create);
    runtime.handle(Event::ApplyWindowInsets(config.host.shape));

    loop {
        let event = EVENTS.receive().await;
        debug!("Face event: {:?}", event);
        if runtime.handle(event) {
            break;
        }
    }

    info!(
        "Face destroyed after {} frames",
        runtime.face().frames_drawn()
    );
    FACE_STOPPED.signal(());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channels::Environment;
    use crate::messages::MessageQueue;
    use duotone_core::state::{DisplayMode, InterruptionFilter};
    use duotone_core::traits::{DataLayer, MessageTag};

    struct Shared {
        messages: MessageQueue,
        environment: Environment,
    }

    impl Shared {
        fn new() -> Self {
            Self {
                messages: MessageQueue::new(),
                environment: Environment::new(),
            }
        }

        fn host(&self, clock: HostClock) -> EmbassyHost<'_> {
            EmbassyHost::new(&self.messages, &self.environment, clock)
        }

        fn runtime(&self, config: &HostConfig) -> FaceRuntime<'_, SnapshotBackend> {
            let host = self.host(HostClock::starting_at(1_709_474_829_250));
            let display = SnapshotBackend::new(config.host.width, config.host.height, None);
            FaceRuntime::new(host, config, display).unwrap()
        }
    }

    fn small_config() -> HostConfig {
        let mut config = HostConfig::default();
        config.host.width = 120;
        config.host.height = 120;
        config
    }

    #[test]
    fn test_hidden_face_does_not_present() {
        let shared = Shared::new();
        let mut runtime = shared.runtime(&small_config());
        runtime.handle(Event::Create);
        runtime.handle(Event::TimeTick);
        assert_eq!(runtime.display().frames(), 0);
    }

    #[test]
    fn test_create_attaches_data_listener() {
        let shared = Shared::new();
        let mut runtime = shared.runtime(&small_config());
        runtime.handle(Event::Create);
        assert!(runtime.face().host().is_connected());
        assert!(runtime.face().host().is_listener_attached());
    }

    #[test]
    fn test_visible_face_presents_on_invalidate() {
        let shared = Shared::new();
        let mut runtime = shared.runtime(&small_config());
        runtime.handle(Event::Create);
        runtime.handle(Event::VisibilityChanged(true));
        runtime.handle(Event::Message(MessageTag::UpdateTime));
        assert_eq!(runtime.display().frames(), 1);
        assert_eq!(runtime.face().frames_drawn(), 1);
        assert!(!runtime.framebuffer().is_dirty());

        runtime.handle(Event::AmbientModeChanged(true));
        assert_eq!(runtime.face().controller().mode(), DisplayMode::Ambient);
        assert_eq!(runtime.display().frames(), 2);
    }

    #[test]
    fn test_mute_change_redraws() {
        let shared = Shared::new();
        let mut runtime = shared.runtime(&small_config());
        runtime.handle(Event::Create);
        runtime.handle(Event::VisibilityChanged(true));
        assert!(shared.messages.is_pending(MessageTag::UpdateTime));

        runtime.handle(Event::InterruptionFilterChanged(InterruptionFilter::None));
        assert!(runtime.face().controller().is_muted());
        assert_eq!(runtime.display().frames(), 1);
        // Rescheduled on the muted cadence
        assert!(shared.messages.is_pending(MessageTag::UpdateTime));
    }

    #[test]
    fn test_callback_burst_keeps_tick_scheduled() {
        let shared = Shared::new();
        let mut runtime = shared.runtime(&small_config());
        for event in [
            Event::Create,
            Event::VisibilityChanged(true),
            Event::InterruptionFilterChanged(InterruptionFilter::None),
            Event::AmbientModeChanged(true),
            Event::AmbientModeChanged(false),
            Event::AmbientModeChanged(true),
            Event::AmbientModeChanged(false),
        ] {
            runtime.handle(event);
        }

        assert!(runtime.face().controller().should_timer_be_running());
        assert!(shared.messages.is_pending(MessageTag::UpdateTime));
    }

    #[test]
    fn test_destroy_stops_runtime() {
        let shared = Shared::new();
        let mut runtime = shared.runtime(&small_config());
        assert!(!runtime.handle(Event::Create));
        assert!(!runtime.handle(Event::VisibilityChanged(true)));
        assert!(runtime.handle(Event::Destroy));
        assert!(!shared.messages.is_pending(MessageTag::UpdateTime));

        // Late callbacks are ignored
        runtime.handle(Event::Message(MessageTag::UpdateTime));
        assert_eq!(runtime.display().frames(), 0);
    }

    #[test]
    fn test_invalid_face_config_rejected() {
        let shared = Shared::new();
        let mut config = small_config();
        config.face.normal_update_rate_ms = 0;
        let host = shared.host(HostClock::system());
        let result = FaceRuntime::new(host, &config, SnapshotBackend::new(120, 120, None));
        assert!(matches!(result, Err(HostError::InvalidFace(_))));
    }
}
