//! Script playback task
//!
//! Replays the timed host callbacks from the `[[script]]` section, then
//! destroys the face once the configured run length has elapsed.

use duotone_core::state::Event;
use duotone_core::time::UtcOffset;
use embassy_time::{Duration, Instant, Timer};
use log::{info, warn};

use crate::channels::{Environment, ENVIRONMENT, EVENTS};
use crate::config::{HostConfig, ScriptEvent};

/// Apply a script event to the environment and return what the face should see
///
/// A system zone change always updates the environment but only reaches the
/// face while its time-zone listener is registered.
pub fn resolve(event: ScriptEvent, environment: &Environment) -> Option<Event> {
    match event {
        ScriptEvent::SystemTimeZone(minutes) => {
            let zone = UtcOffset::from_minutes(minutes);
            environment.set_zone(zone);
            if environment.has_time_zone_listener() {
                Some(Event::TimeZoneChanged(zone))
            } else {
                info!("System zone now {} min, no listener registered", minutes);
                None
            }
        }
        other => other.to_event(),
    }
}

/// Script task - plays back `[[script]]` steps relative to start-up
#[embassy_executor::task]
pub async fn script_task(config: &'static HostConfig) {
    info!("Script task started ({} steps)", config.script.len());

    let start = Instant::now();

    for step in config.script.iter() {
        Timer::at(start + Duration::from_millis(step.at_ms)).await;
        info!("Script @{}ms: {:?}", step.at_ms, step.event);

        if let Some(event) = resolve(step.event, &ENVIRONMENT) {
            EVENTS.send(event).await;
        }
    }

    match config.host.run_ms {
        Some(run_ms) => {
            Timer::at(start + Duration::from_millis(run_ms)).await;
            info!("Run length reached, destroying face");
            EVENTS.send(Event::Destroy).await;
        }
        None => {
            if config.script.is_empty() {
                warn!("No script and no run length; face runs until interrupted");
            }
        }
    }
}
