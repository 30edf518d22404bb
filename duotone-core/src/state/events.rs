//! Host callbacks delivered to the face

use super::mode::{DeviceProperties, InterruptionFilter, ScreenShape};
use crate::time::UtcOffset;
use crate::traits::MessageTag;

/// Connectivity client callbacks
///
/// The face keeps a data-layer connection open while visible but exchanges
/// no payloads, so these only drive listener bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataLayerEvent {
    /// Client connected; data listener can be attached
    Connected,
    /// Connection suspended with the host's cause code
    ConnectionSuspended(i32),
    /// Connection attempt failed
    ConnectionFailed,
    /// Remote data items changed
    DataChanged,
}

/// Events delivered by the host to the face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Lifecycle events
    /// Face activated
    Create,
    /// Face torn down
    Destroy,

    // Display events
    /// Face became visible or hidden
    VisibilityChanged(bool),
    /// Device entered or left ambient mode
    AmbientModeChanged(bool),
    /// Notification interruption filter changed
    InterruptionFilterChanged(InterruptionFilter),
    /// Device display properties reported
    PropertiesChanged(DeviceProperties),
    /// Window insets applied (screen shape known)
    ApplyWindowInsets(ScreenShape),

    // Time events
    /// Host minute tick, delivered in every mode
    TimeTick,
    /// System time zone changed
    TimeZoneChanged(UtcOffset),
    /// A message posted through the scheduler came due
    Message(MessageTag),

    // Connectivity events
    /// Data-layer client callback
    DataLayer(DataLayerEvent),
}

impl Event {
    /// Check if this event creates or destroys the face
    pub fn is_lifecycle_event(&self) -> bool {
        matches!(self, Event::Create | Event::Destroy)
    }

    /// Check if this event changes how the face is displayed
    pub fn is_display_event(&self) -> bool {
        matches!(
            self,
            Event::VisibilityChanged(_)
                | Event::AmbientModeChanged(_)
                | Event::InterruptionFilterChanged(_)
                | Event::PropertiesChanged(_)
                | Event::ApplyWindowInsets(_)
        )
    }

    /// Check if this event comes from a clock or timer
    pub fn is_time_event(&self) -> bool {
        matches!(
            self,
            Event::TimeTick | Event::TimeZoneChanged(_) | Event::Message(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_events() {
        assert!(Event::Create.is_lifecycle_event());
        assert!(Event::Destroy.is_lifecycle_event());
        assert!(!Event::TimeTick.is_lifecycle_event());
    }

    #[test]
    fn test_display_events() {
        assert!(Event::VisibilityChanged(true).is_display_event());
        assert!(Event::AmbientModeChanged(false).is_display_event());
        assert!(Event::ApplyWindowInsets(ScreenShape::Round).is_display_event());
        assert!(!Event::Message(MessageTag::UpdateTime).is_display_event());
        assert!(!Event::DataLayer(DataLayerEvent::Connected).is_display_event());
    }

    #[test]
    fn test_time_events() {
        assert!(Event::TimeTick.is_time_event());
        assert!(Event::TimeZoneChanged(UtcOffset::UTC).is_time_event());
        assert!(Event::Message(MessageTag::UpdateTime).is_time_event());
        assert!(!Event::Create.is_time_event());
    }
}
