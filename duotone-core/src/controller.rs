//! Display controller coordinating mode state, paints and the redraw tick
//!
//! The controller is the central brain that:
//! - Processes host callbacks in order on a single queue
//! - Tracks visibility, display mode, mute state and device properties
//! - Keeps the hour and minute paints in step with that state
//! - Starts, realigns and cancels the "update time" message
//! - Produces a [`Frame`] snapshot for the render step

use crate::config::{Color, FaceConfig, TimeZoneRegistration, WatchFaceStyle};
use crate::format::{two_digit, TwoDigits};
use crate::paint::{Paint, TextPaint, Typeface};
use crate::state::{
    DataLayerEvent, DeviceProperties, DisplayMode, Event, InterruptionFilter, Lifecycle, Phase,
    ScreenShape,
};
use crate::time::{delay_to_next_boundary, FaceTime, UpdateCadence, UtcOffset};
use crate::traits::{FaceHost, MessageTag};

/// Everything the render step needs for one redraw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub mode: DisplayMode,
    /// Flat fill used in ambient mode
    pub ambient_background: Color,
    pub hour: TwoDigits,
    pub minute: TwoDigits,
    pub hour_paint: Paint,
    pub minute_paint: Paint,
}

/// Controller state for one watch-face instance
pub struct DisplayController<H: FaceHost> {
    host: H,
    config: FaceConfig,
    lifecycle: Lifecycle,
    /// Face currently on screen
    visible: bool,
    mode: DisplayMode,
    /// Interruption filter forbids every notification
    muted: bool,
    cadence: UpdateCadence,
    properties: DeviceProperties,
    shape: ScreenShape,
    hour_paint: TextPaint,
    minute_paint: TextPaint,
    time: FaceTime,
    /// Time-zone listener is attached
    time_zone_registered: bool,
}

impl<H: FaceHost> DisplayController<H> {
    /// Create an inactive controller; nothing reaches the host until `Create`
    pub fn new(host: H, config: FaceConfig) -> Self {
        let colors = config.colors;
        let text = config.text;
        let mut controller = Self {
            host,
            config,
            lifecycle: Lifecycle::Inactive,
            visible: false,
            mode: DisplayMode::Interactive,
            muted: false,
            cadence: UpdateCadence::Normal,
            properties: DeviceProperties::default(),
            shape: ScreenShape::Square,
            hour_paint: TextPaint::new(
                colors.interactive_hour,
                colors.ambient_hour,
                text.hour_typeface,
            ),
            minute_paint: TextPaint::new(
                colors.interactive_minute,
                colors.ambient_minute,
                text.minute_typeface,
            ),
            time: FaceTime::default(),
            time_zone_registered: false,
        };
        controller.apply_text_size();
        controller
    }

    /// Process a host callback
    pub fn handle_event(&mut self, event: Event) {
        if event.is_lifecycle_event() {
            self.transition(event);
            return;
        }

        if !self.lifecycle.is_active() {
            log::warn!("Ignoring {:?} while {:?}", event, self.lifecycle);
            return;
        }

        match event {
            Event::VisibilityChanged(visible) => self.on_visibility_changed(visible),
            Event::AmbientModeChanged(in_ambient) => self.on_ambient_mode_changed(in_ambient),
            Event::InterruptionFilterChanged(filter) => self.on_interruption_filter_changed(filter),
            Event::PropertiesChanged(properties) => self.on_properties_changed(properties),
            Event::ApplyWindowInsets(shape) => self.on_apply_window_insets(shape),
            Event::TimeTick => self.on_time_tick(),
            Event::TimeZoneChanged(zone) => self.on_time_zone_changed(zone),
            Event::Message(tag) => self.handle_message(tag),
            Event::DataLayer(event) => self.on_data_layer(event),
            Event::Create | Event::Destroy => {}
        }
    }

    /// Apply a lifecycle event
    fn transition(&mut self, event: Event) {
        let old = self.lifecycle;
        let new = old.transition(&event);
        if old == new {
            log::warn!("Ignoring {:?} while {:?}", event, old);
            return;
        }

        log::debug!("Lifecycle {:?} -> {:?}", old, new);
        self.lifecycle = new;
        match (old, new) {
            (Lifecycle::Inactive, Lifecycle::Active) => self.on_create(),
            (Lifecycle::Active, Lifecycle::Destroyed) => self.on_destroy(),
            _ => {}
        }
    }

    fn on_create(&mut self) {
        log::debug!("Face created");
        self.host.set_watch_face_style(&WatchFaceStyle::default());
        self.time = FaceTime::new(self.host.default_time_zone());
        self.host.connect();
    }

    fn on_destroy(&mut self) {
        log::debug!("Face destroyed");
        self.host.cancel(MessageTag::UpdateTime);
    }

    fn on_visibility_changed(&mut self, visible: bool) {
        log::debug!("Visibility changed: {}", visible);
        self.visible = visible;

        if self.phase().wants_listeners() {
            self.register_time_zone_listener();
            if !self.host.is_connected() {
                self.host.connect();
            }

            // Zone may have changed while hidden
            self.time.clear(self.host.default_time_zone());
            self.time.set_to_now(self.host.now_ms());
        } else {
            self.unregister_time_zone_listener();

            if self.host.is_connected() {
                self.host.remove_listener();
                self.host.disconnect();
            }
        }

        self.update_timer();
    }

    fn on_ambient_mode_changed(&mut self, in_ambient: bool) {
        log::debug!("Ambient mode changed: {}", in_ambient);
        self.mode = DisplayMode::from_ambient(in_ambient);

        self.hour_paint.apply_mode(self.mode);
        self.minute_paint.apply_mode(self.mode);

        if self.properties.low_bit_ambient {
            let anti_alias = !in_ambient;
            self.hour_paint.set_anti_alias(anti_alias);
            self.minute_paint.set_anti_alias(anti_alias);
        }

        self.host.invalidate();
        self.update_timer();
    }

    fn on_interruption_filter_changed(&mut self, filter: InterruptionFilter) {
        log::debug!("Interruption filter changed: {:?}", filter);
        let muted = filter.is_mute();
        if muted == self.muted {
            return;
        }

        self.muted = muted;
        self.cadence = UpdateCadence::for_mute(muted);

        let alpha = self.config.alpha(muted);
        self.hour_paint.set_alpha(alpha);
        self.minute_paint.set_alpha(alpha);

        // Realign against the new cadence
        if self.should_timer_be_running() {
            self.update_timer();
        }
        self.host.invalidate();
    }

    fn on_properties_changed(&mut self, properties: DeviceProperties) {
        log::debug!(
            "Properties changed: burn-in protection = {}, low-bit ambient = {}",
            properties.burn_in_protection,
            properties.low_bit_ambient
        );
        self.properties = properties;

        let typeface = if properties.burn_in_protection {
            Typeface::Regular
        } else {
            self.config.text.hour_typeface
        };
        self.hour_paint.set_typeface(typeface);
    }

    fn on_apply_window_insets(&mut self, shape: ScreenShape) {
        log::debug!("Window insets applied: {:?}", shape);
        self.shape = shape;
        self.apply_text_size();
    }

    fn on_time_tick(&mut self) {
        log::debug!("Time tick, ambient = {}", self.mode.is_ambient());
        self.host.invalidate();
    }

    fn on_time_zone_changed(&mut self, zone: UtcOffset) {
        if !self.time_zone_registered {
            log::trace!("Time zone broadcast without listener, ignoring");
            return;
        }
        log::debug!("Time zone changed: {}s", zone.as_seconds());
        self.time.clear(zone);
        self.time.set_to_now(self.host.now_ms());
    }

    fn on_data_layer(&mut self, event: DataLayerEvent) {
        match event {
            DataLayerEvent::Connected => {
                log::debug!("Data layer connected");
                self.host.add_listener();
            }
            DataLayerEvent::ConnectionSuspended(cause) => {
                log::debug!("Data layer suspended, cause {}", cause);
            }
            DataLayerEvent::ConnectionFailed => {
                log::debug!("Data layer connection failed");
            }
            DataLayerEvent::DataChanged => {
                log::trace!("Data items changed");
            }
        }
    }

    /// Deliver a message posted through the scheduler
    pub fn handle_message(&mut self, tag: MessageTag) {
        match tag {
            MessageTag::UpdateTime => self.on_update_time(),
        }
    }

    /// Redraw, then reschedule on the next cadence boundary
    fn on_update_time(&mut self) {
        log::trace!("Update time fired");
        self.host.invalidate();

        if self.should_timer_be_running() {
            let delay = delay_to_next_boundary(self.host.now_ms(), self.update_rate_ms());
            self.host.post_delayed(MessageTag::UpdateTime, delay);
        }
    }

    /// Cancel the pending tick and, if it should run, fire one immediately
    fn update_timer(&mut self) {
        log::trace!("Restarting update timer");
        self.host.cancel(MessageTag::UpdateTime);
        if self.should_timer_be_running() {
            self.host.post(MessageTag::UpdateTime);
        }
    }

    fn register_time_zone_listener(&mut self) {
        let skip = match self.config.time_zone_registration {
            TimeZoneRegistration::Legacy => !self.time_zone_registered,
            TimeZoneRegistration::Guarded => self.time_zone_registered,
        };
        if skip {
            return;
        }
        self.time_zone_registered = true;
        self.host.register_time_zone_listener();
    }

    fn unregister_time_zone_listener(&mut self) {
        if !self.time_zone_registered {
            return;
        }
        self.time_zone_registered = false;
        self.host.unregister_time_zone_listener();
    }

    fn apply_text_size(&mut self) {
        let size = match self.shape {
            ScreenShape::Round => self.config.text.size_round,
            ScreenShape::Square => self.config.text.size_square,
        };
        self.hour_paint.set_text_size(size);
        self.minute_paint.set_text_size(size);
    }

    /// Snapshot the state for a redraw, reading the clock first
    pub fn frame(&mut self) -> Frame {
        self.time.set_to_now(self.host.now_ms());
        Frame {
            mode: self.mode,
            ambient_background: self.config.colors.ambient_background,
            hour: two_digit(self.time.hour()),
            minute: two_digit(self.time.minute()),
            hour_paint: *self.hour_paint.paint(),
            minute_paint: *self.minute_paint.paint(),
        }
    }

    /// Check if the periodic tick should be scheduled
    pub fn should_timer_be_running(&self) -> bool {
        self.phase().should_tick()
    }

    pub fn phase(&self) -> Phase {
        Phase::of(self.visible, self.mode)
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn cadence(&self) -> UpdateCadence {
        self.cadence
    }

    /// Current tick period in milliseconds
    pub fn update_rate_ms(&self) -> u32 {
        self.config.update_rate_ms(self.muted)
    }

    pub fn properties(&self) -> DeviceProperties {
        self.properties
    }

    pub fn shape(&self) -> ScreenShape {
        self.shape
    }

    pub fn hour_paint(&self) -> &Paint {
        self.hour_paint.paint()
    }

    pub fn minute_paint(&self) -> &Paint {
        self.minute_paint.paint()
    }

    pub fn time(&self) -> &FaceTime {
        &self.time
    }

    pub fn is_time_zone_registered(&self) -> bool {
        self.time_zone_registered
    }

    pub fn config(&self) -> &FaceConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}
