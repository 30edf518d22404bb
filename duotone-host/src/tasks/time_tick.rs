//! Time tick task
//!
//! Delivers the host's minute tick, aligned to the wall-clock minute, in
//! every display mode.

use duotone_core::state::Event;
use duotone_core::time::{delay_to_next_boundary, MS_PER_MINUTE};
use duotone_core::traits::Clock;
use embassy_time::{Duration, Timer};
use log::{info, trace};

use crate::channels::EVENTS;
use crate::clock::HostClock;

/// Time tick task - sends `TimeTick` at the top of every minute
#[embassy_executor::task]
pub async fn time_tick_task(clock: HostClock) {
    info!("Time tick task started");

    loop {
        let delay_ms = delay_to_next_boundary(clock.now_ms(), MS_PER_MINUTE as u32);
        Timer::after(Duration::from_millis(u64::from(delay_ms))).await;

        trace!("Minute tick");
        EVENTS.send(Event::TimeTick).await;
    }
}
