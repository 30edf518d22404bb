//! Message timer task
//!
//! Feeds delayed messages from the [`MessageQueue`] back into the event
//! queue when they come due.

use duotone_core::state::Event;
use embassy_futures::select::select;
use embassy_time::{Instant, Timer};
use log::{info, trace};

use crate::channels::{EventChannel, EVENTS, MESSAGES};
use crate::messages::MessageQueue;

/// Deliver due messages forever
///
/// Any post or cancel wakes the loop so the next deadline is re-read.
pub async fn run_message_timer(messages: &MessageQueue, events: &EventChannel) {
    loop {
        match messages.earliest() {
            Some((_, at)) => {
                select(messages.changed(), Timer::at(at)).await;
            }
            None => messages.changed().await,
        }

        while let Some(tag) = messages.take_due(Instant::now()) {
            trace!("Delivering {:?}", tag);
            events.send(Event::Message(tag)).await;
        }
    }
}

/// Message timer task - delivers posted messages at their due time
#[embassy_executor::task]
pub async fn message_timer_task() {
    info!("Message timer task started");
    run_message_timer(&MESSAGES, &EVENTS).await
}
