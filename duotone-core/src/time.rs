//! Wall-clock time keeping for the face
//!
//! Time is kept as milliseconds since the Unix epoch plus a fixed UTC
//! offset. The host clock supplies "now"; the face only needs the local
//! hour and minute and the delay to the next redraw boundary.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const MS_PER_SECOND: u64 = 1_000;
pub const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;

/// Fixed offset from UTC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UtcOffset {
    seconds: i32,
}

impl UtcOffset {
    pub const UTC: UtcOffset = UtcOffset { seconds: 0 };

    pub const fn from_seconds(seconds: i32) -> Self {
        Self { seconds }
    }

    pub const fn from_minutes(minutes: i32) -> Self {
        Self {
            seconds: minutes * 60,
        }
    }

    pub const fn from_hours(hours: i32) -> Self {
        Self {
            seconds: hours * 3_600,
        }
    }

    pub const fn as_seconds(&self) -> i32 {
        self.seconds
    }
}

/// Redraw cadence of the internal timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UpdateCadence {
    /// Once per second
    #[default]
    Normal,
    /// Once per minute
    Muted,
}

impl UpdateCadence {
    /// Cadence implied by the mute state
    pub fn for_mute(muted: bool) -> Self {
        if muted {
            UpdateCadence::Muted
        } else {
            UpdateCadence::Normal
        }
    }
}

/// Delay until the next multiple of `cadence_ms` on the wall clock
///
/// Always in `1..=cadence_ms`: a tick landing exactly on a boundary waits a
/// full period rather than firing again immediately.
pub fn delay_to_next_boundary(now_ms: u64, cadence_ms: u32) -> u32 {
    let cadence = u64::from(cadence_ms.max(1));
    (cadence - now_ms % cadence) as u32
}

/// Local wall-clock time in a fixed time zone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaceTime {
    zone: UtcOffset,
    epoch_ms: u64,
}

impl FaceTime {
    /// Create a time at the epoch in the given zone
    pub fn new(zone: UtcOffset) -> Self {
        Self { zone, epoch_ms: 0 }
    }

    /// Switch time zone and reset the clock to the epoch
    pub fn clear(&mut self, zone: UtcOffset) {
        self.zone = zone;
        self.epoch_ms = 0;
    }

    /// Set the clock to the given epoch time
    pub fn set_to_now(&mut self, now_ms: u64) {
        self.epoch_ms = now_ms;
    }

    pub fn zone(&self) -> UtcOffset {
        self.zone
    }

    pub fn epoch_ms(&self) -> u64 {
        self.epoch_ms
    }

    /// Milliseconds since local midnight
    fn local_day_ms(&self) -> u64 {
        let local = self.epoch_ms as i128 + i128::from(self.zone.as_seconds()) * 1_000;
        local.rem_euclid(MS_PER_DAY as i128) as u64
    }

    /// Local hour (0-23)
    pub fn hour(&self) -> u8 {
        (self.local_day_ms() / MS_PER_HOUR) as u8
    }

    /// Local minute (0-59)
    pub fn minute(&self) -> u8 {
        (self.local_day_ms() % MS_PER_HOUR / MS_PER_MINUTE) as u8
    }

    /// Local second (0-59)
    pub fn second(&self) -> u8 {
        (self.local_day_ms() % MS_PER_MINUTE / MS_PER_SECOND) as u8
    }
}
