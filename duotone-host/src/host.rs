//! Host adapter for the face
//!
//! Implements every collaborator trait on top of the runtime state. The
//! adapter never blocks and never drops a request: delayed messages go
//! straight into the shared [`MessageQueue`], and host callbacks raised
//! synchronously (the data-layer connect) are held until the face task
//! collects them with [`EmbassyHost::take_callback`].

use duotone_core::config::WatchFaceStyle;
use duotone_core::state::{DataLayerEvent, Event};
use duotone_core::time::UtcOffset;
use duotone_core::traits::{
    Clock, DataLayer, EnvironmentSource, MessageScheduler, MessageTag, SurfaceHost,
};
use embassy_time::{Duration, Instant};
use log::{debug, info};

use crate::channels::Environment;
use crate::clock::HostClock;
use crate::messages::MessageQueue;

/// Runtime-backed host services
pub struct EmbassyHost<'a> {
    messages: &'a MessageQueue,
    environment: &'a Environment,
    clock: HostClock,
    connected: bool,
    connect_pending: bool,
    listener_attached: bool,
    redraw_requested: bool,
    style: Option<WatchFaceStyle>,
}

impl<'a> EmbassyHost<'a> {
    pub fn new(messages: &'a MessageQueue, environment: &'a Environment, clock: HostClock) -> Self {
        Self {
            messages,
            environment,
            clock,
            connected: false,
            connect_pending: false,
            listener_attached: false,
            redraw_requested: false,
            style: None,
        }
    }

    /// Consume a pending redraw request
    pub fn take_redraw(&mut self) -> bool {
        core::mem::take(&mut self.redraw_requested)
    }

    /// Consume a callback the host owes the face
    pub fn take_callback(&mut self) -> Option<Event> {
        if core::mem::take(&mut self.connect_pending) {
            Some(Event::DataLayer(DataLayerEvent::Connected))
        } else {
            None
        }
    }

    pub fn is_listener_attached(&self) -> bool {
        self.listener_attached
    }

    /// Style set by the face, if any
    pub fn style(&self) -> Option<&WatchFaceStyle> {
        self.style.as_ref()
    }
}

impl MessageScheduler for EmbassyHost<'_> {
    fn post(&mut self, tag: MessageTag) {
        self.messages.post_at(tag, Instant::now());
    }

    fn post_delayed(&mut self, tag: MessageTag, delay_ms: u32) {
        let at = Instant::now() + Duration::from_millis(u64::from(delay_ms));
        self.messages.post_at(tag, at);
    }

    fn cancel(&mut self, tag: MessageTag) {
        self.messages.cancel(tag);
    }
}

impl EnvironmentSource for EmbassyHost<'_> {
    fn register_time_zone_listener(&mut self) {
        debug!("Time-zone listener registered");
        self.environment.set_time_zone_listener(true);
    }

    fn unregister_time_zone_listener(&mut self) {
        debug!("Time-zone listener unregistered");
        self.environment.set_time_zone_listener(false);
    }

    fn default_time_zone(&self) -> UtcOffset {
        self.environment.zone()
    }
}

impl DataLayer for EmbassyHost<'_> {
    fn connect(&mut self) {
        if self.connected {
            return;
        }
        self.connected = true;
        // No companion is attached, so the connection succeeds immediately
        self.connect_pending = true;
    }

    fn disconnect(&mut self) {
        self.connected = false;
        self.connect_pending = false;
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn add_listener(&mut self) {
        self.listener_attached = true;
    }

    fn remove_listener(&mut self) {
        self.listener_attached = false;
    }
}

impl SurfaceHost for EmbassyHost<'_> {
    fn invalidate(&mut self) {
        self.redraw_requested = true;
    }

    fn set_watch_face_style(&mut self, style: &WatchFaceStyle) {
        info!(
            "Face style: peek {:?}, background {:?}, system time {}",
            style.card_peek_mode, style.background_visibility, style.show_system_ui_time
        );
        self.style = Some(*style);
    }
}

impl Clock for EmbassyHost<'_> {
    fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duotone_core::config::{FaceConfig, TimeZoneRegistration};
    use duotone_core::DisplayController;

    struct Fixture {
        messages: MessageQueue,
        environment: Environment,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                messages: MessageQueue::new(),
                environment: Environment::new(),
            }
        }

        fn host(&self) -> EmbassyHost<'_> {
            EmbassyHost::new(
                &self.messages,
                &self.environment,
                HostClock::starting_at(1_709_474_829_250),
            )
        }
    }

    #[test]
    fn test_post_delayed_is_in_future() {
        let fixture = Fixture::new();
        let mut host = fixture.host();
        let before = Instant::now();
        host.post_delayed(MessageTag::UpdateTime, 750);

        let (tag, at) = fixture.messages.earliest().unwrap();
        assert_eq!(tag, MessageTag::UpdateTime);
        assert!(at >= before + Duration::from_millis(750));

        host.cancel(MessageTag::UpdateTime);
        assert_eq!(fixture.messages.earliest(), None);
    }

    #[test]
    fn test_connect_raises_callback_once() {
        let fixture = Fixture::new();
        let mut host = fixture.host();
        host.connect();
        host.connect();
        assert!(host.is_connected());
        assert_eq!(
            host.take_callback(),
            Some(Event::DataLayer(DataLayerEvent::Connected))
        );
        assert_eq!(host.take_callback(), None);

        host.disconnect();
        assert!(!host.is_connected());
    }

    #[test]
    fn test_disconnect_withdraws_unsent_callback() {
        let fixture = Fixture::new();
        let mut host = fixture.host();
        host.connect();
        host.disconnect();
        assert_eq!(host.take_callback(), None);
    }

    #[test]
    fn test_redraw_request_is_consumed() {
        let fixture = Fixture::new();
        let mut host = fixture.host();
        assert!(!host.take_redraw());
        host.invalidate();
        host.invalidate();
        assert!(host.take_redraw());
        assert!(!host.take_redraw());
    }

    #[test]
    fn test_environment_zone() {
        let fixture = Fixture::new();
        fixture.environment.set_zone(UtcOffset::from_minutes(330));
        let mut host = fixture.host();
        assert_eq!(host.default_time_zone(), UtcOffset::from_minutes(330));

        host.register_time_zone_listener();
        assert!(fixture.environment.has_time_zone_listener());
        host.unregister_time_zone_listener();
        assert!(!fixture.environment.has_time_zone_listener());
    }

    #[test]
    fn test_controller_session_over_host() {
        let fixture = Fixture::new();
        let config = FaceConfig {
            time_zone_registration: TimeZoneRegistration::Guarded,
            ..FaceConfig::default()
        };
        let mut controller = DisplayController::new(fixture.host(), config);

        controller.handle_event(Event::Create);
        assert!(controller.host().style().is_some());
        let connected = controller.host_mut().take_callback().unwrap();
        controller.handle_event(connected);
        assert!(controller.host().is_listener_attached());

        controller.handle_event(Event::VisibilityChanged(true));
        assert!(fixture.environment.has_time_zone_listener());
        assert!(fixture.messages.is_pending(MessageTag::UpdateTime));

        controller.handle_event(Event::VisibilityChanged(false));
        assert!(!fixture.environment.has_time_zone_listener());
        assert!(!controller.host().is_connected());
        assert!(!controller.host().is_listener_attached());
        assert!(!fixture.messages.is_pending(MessageTag::UpdateTime));
    }
}
