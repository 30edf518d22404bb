//! Wall-clock source trait

/// Trait for reading the current wall-clock time
pub trait Clock {
    /// Milliseconds since the Unix epoch
    fn now_ms(&self) -> u64;
}
