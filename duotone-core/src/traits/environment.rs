//! Environment-change source trait

use crate::time::UtcOffset;

/// Trait for system environment changes (time zone)
///
/// While a listener is registered the host delivers
/// [`crate::state::Event::TimeZoneChanged`] on every zone change.
pub trait EnvironmentSource {
    /// Start receiving time-zone change notifications
    fn register_time_zone_listener(&mut self);

    /// Stop receiving time-zone change notifications
    fn unregister_time_zone_listener(&mut self);

    /// Current system time zone
    fn default_time_zone(&self) -> UtcOffset;
}
