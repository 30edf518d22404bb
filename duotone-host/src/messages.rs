//! Delayed-message queue shared by the face and the timer task
//!
//! The face writes posts and cancels straight into the queue under a
//! critical section, so a burst of callbacks can never lose a request. The
//! timer task is woken through [`MessageQueue::changed`] and re-reads the
//! earliest deadline. One delivery is pending per tag; posting again
//! replaces it.

use core::cell::RefCell;

use duotone_core::traits::MessageTag;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::signal::Signal;
use embassy_time::Instant;
use heapless::Vec;
use log::warn;

/// Distinct message tags
const MAX_PENDING: usize = 4;

/// Pending deliveries, at most one per tag
#[derive(Debug, Default)]
pub struct PendingMessages {
    entries: Vec<(MessageTag, Instant), MAX_PENDING>,
}

impl PendingMessages {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Schedule `tag` at `at`, replacing any pending delivery of the same tag
    pub fn post(&mut self, tag: MessageTag, at: Instant) {
        if let Some(entry) = self.entries.iter_mut().find(|(t, _)| *t == tag) {
            entry.1 = at;
        } else if self.entries.push((tag, at)).is_err() {
            warn!("Too many pending messages, dropping {:?}", tag);
        }
    }

    /// Drop the pending delivery of `tag`
    pub fn cancel(&mut self, tag: MessageTag) {
        self.entries.retain(|(t, _)| *t != tag);
    }

    pub fn contains(&self, tag: MessageTag) -> bool {
        self.entries.iter().any(|(t, _)| *t == tag)
    }

    /// Earliest pending delivery
    pub fn earliest(&self) -> Option<(MessageTag, Instant)> {
        self.entries.iter().copied().min_by_key(|(_, at)| *at)
    }

    /// Remove and return a message whose time has come
    pub fn take_due(&mut self, now: Instant) -> Option<MessageTag> {
        let (tag, at) = self.earliest()?;
        if at > now {
            return None;
        }
        self.cancel(tag);
        Some(tag)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Pending messages plus a wake-up for the timer task
pub struct MessageQueue {
    pending: Mutex<CriticalSectionRawMutex, RefCell<PendingMessages>>,
    changed: Signal<CriticalSectionRawMutex, ()>,
}

impl MessageQueue {
    pub const fn new() -> Self {
        Self {
            pending: Mutex::new(RefCell::new(PendingMessages::new())),
            changed: Signal::new(),
        }
    }

    pub fn post_at(&self, tag: MessageTag, at: Instant) {
        self.pending.lock(|p| p.borrow_mut().post(tag, at));
        self.changed.signal(());
    }

    pub fn cancel(&self, tag: MessageTag) {
        self.pending.lock(|p| p.borrow_mut().cancel(tag));
        self.changed.signal(());
    }

    pub fn is_pending(&self, tag: MessageTag) -> bool {
        self.pending.lock(|p| p.borrow().contains(tag))
    }

    pub fn earliest(&self) -> Option<(MessageTag, Instant)> {
        self.pending.lock(|p| p.borrow().earliest())
    }

    pub fn take_due(&self, now: Instant) -> Option<MessageTag> {
        self.pending.lock(|p| p.borrow_mut().take_due(now))
    }

    /// Wait until a post or cancel arrives
    pub async fn changed(&self) {
        self.changed.wait().await
    }
}

impl Default for MessageQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_time::Duration;

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    #[test]
    fn test_post_replaces_same_tag() {
        let mut pending = PendingMessages::new();
        pending.post(MessageTag::UpdateTime, at(1_000));
        pending.post(MessageTag::UpdateTime, at(250));
        assert_eq!(pending.earliest(), Some((MessageTag::UpdateTime, at(250))));
    }

    #[test]
    fn test_cancel_removes() {
        let mut pending = PendingMessages::new();
        pending.post(MessageTag::UpdateTime, at(1_000));
        assert!(pending.contains(MessageTag::UpdateTime));
        pending.cancel(MessageTag::UpdateTime);
        assert!(pending.is_empty());
        assert_eq!(pending.earliest(), None);
    }

    #[test]
    fn test_take_due_waits_for_deadline() {
        let mut pending = PendingMessages::new();
        pending.post(MessageTag::UpdateTime, at(1_000));
        assert_eq!(pending.take_due(at(999)), None);
        assert_eq!(
            pending.take_due(at(1_000) + Duration::from_millis(5)),
            Some(MessageTag::UpdateTime)
        );
        assert!(pending.is_empty());
    }

    #[test]
    fn test_queue_keeps_every_request() {
        let queue = MessageQueue::new();
        // Far more requests than any channel buffer would hold
        for i in 0..64 {
            queue.cancel(MessageTag::UpdateTime);
            queue.post_at(MessageTag::UpdateTime, at(i));
        }
        assert!(queue.is_pending(MessageTag::UpdateTime));
        assert_eq!(queue.earliest(), Some((MessageTag::UpdateTime, at(63))));

        queue.cancel(MessageTag::UpdateTime);
        assert!(!queue.is_pending(MessageTag::UpdateTime));
    }
}
