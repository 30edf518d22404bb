//! Delayed-message scheduler trait

/// Tag identifying a message posted to the host's message queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MessageTag {
    /// Redraw the face and reschedule the next tick
    UpdateTime,
}

/// Trait for the host's single-threaded message queue
///
/// Messages come back to the face as [`crate::state::Event::Message`] on the
/// same queue as every other callback, so a tick never overlaps itself.
pub trait MessageScheduler {
    /// Post a message for delivery as soon as the queue is free
    fn post(&mut self, tag: MessageTag);

    /// Post a message for delivery after `delay_ms`
    fn post_delayed(&mut self, tag: MessageTag, delay_ms: u32);

    /// Remove every pending message with this tag
    fn cancel(&mut self, tag: MessageTag);
}
