//! Inter-task communication channels
//!
//! Every host callback reaches the face through [`EVENTS`], so the face task
//! handles them one at a time in arrival order. Delayed messages wait in
//! [`MESSAGES`] until the timer task delivers them.

use core::sync::atomic::{AtomicBool, AtomicI32, Ordering};

use duotone_core::state::Event;
use duotone_core::time::UtcOffset;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use crate::messages::MessageQueue;

/// Channel capacity for face events
pub const EVENT_CHANNEL_SIZE: usize = 16;

/// Face event queue
pub type EventChannel = Channel<CriticalSectionRawMutex, Event, EVENT_CHANNEL_SIZE>;

/// System state the face can observe
pub struct Environment {
    time_zone_listener: AtomicBool,
    zone_seconds: AtomicI32,
}

impl Environment {
    pub const fn new() -> Self {
        Self {
            time_zone_listener: AtomicBool::new(false),
            zone_seconds: AtomicI32::new(0),
        }
    }

    pub fn zone(&self) -> UtcOffset {
        UtcOffset::from_seconds(self.zone_seconds.load(Ordering::Relaxed))
    }

    pub fn set_zone(&self, zone: UtcOffset) {
        self.zone_seconds.store(zone.as_seconds(), Ordering::Relaxed);
    }

    pub fn has_time_zone_listener(&self) -> bool {
        self.time_zone_listener.load(Ordering::Relaxed)
    }

    pub fn set_time_zone_listener(&self, registered: bool) {
        self.time_zone_listener.store(registered, Ordering::Relaxed);
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

/// Host callbacks for the face task
pub static EVENTS: EventChannel = Channel::new();

/// Delayed messages posted by the face
pub static MESSAGES: MessageQueue = MessageQueue::new();

/// System time zone and listener registration
pub static ENVIRONMENT: Environment = Environment::new();

/// Signal that the face handled `Destroy`
pub static FACE_STOPPED: Signal<CriticalSectionRawMutex, ()> = Signal::new();
