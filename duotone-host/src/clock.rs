//! Wall clock for the host

use std::time::{SystemTime, UNIX_EPOCH};

use duotone_core::traits::Clock;
use embassy_time::Instant;

/// System clock, or a fixed start that advances with the executor clock
#[derive(Debug, Clone, Copy)]
pub struct HostClock {
    start: Option<(u64, Instant)>,
}

impl HostClock {
    /// Follow the system clock
    pub fn system() -> Self {
        Self { start: None }
    }

    /// Start at `epoch_ms` now and advance in executor time
    pub fn starting_at(epoch_ms: u64) -> Self {
        Self {
            start: Some((epoch_ms, Instant::now())),
        }
    }

    pub fn from_settings(start_epoch_ms: Option<u64>) -> Self {
        match start_epoch_ms {
            Some(epoch_ms) => Self::starting_at(epoch_ms),
            None => Self::system(),
        }
    }
}

impl Clock for HostClock {
    fn now_ms(&self) -> u64 {
        match self.start {
            Some((epoch_ms, boot)) => epoch_ms + boot.elapsed().as_millis(),
            // A clock before 1970 reads as the epoch
            None => SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0),
        }
    }
}
