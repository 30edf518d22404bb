//! State machine definition
//!
//! The lifecycle is a finite, deterministic function of the current state
//! and an event. The display phase is a pure view over visibility and
//! display mode.

use super::events::Event;
use super::mode::DisplayMode;

/// Face lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Lifecycle {
    /// Engine built, host has not created the face yet
    #[default]
    Inactive,
    /// Created; callbacks are processed
    Active,
    /// Torn down; callbacks are ignored
    Destroyed,
}

impl Lifecycle {
    /// Check if callbacks should be processed
    pub fn is_active(&self) -> bool {
        matches!(self, Lifecycle::Active)
    }

    /// Process an event and return the next lifecycle state
    pub fn transition(self, event: &Event) -> Self {
        use Lifecycle::*;

        match (self, event) {
            (Inactive, Event::Create) => Active,
            (Active, Event::Destroy) => Destroyed,
            (Inactive, Event::Destroy) => Destroyed,

            // Default: stay in current state
            _ => self,
        }
    }
}

/// What the user currently sees
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Face not on screen
    Hidden,
    /// On screen in interactive mode
    VisibleInteractive,
    /// On screen in ambient mode
    VisibleAmbient,
}

impl Phase {
    /// Derive the phase from visibility and display mode
    pub fn of(visible: bool, mode: DisplayMode) -> Self {
        match (visible, mode) {
            (false, _) => Phase::Hidden,
            (true, DisplayMode::Interactive) => Phase::VisibleInteractive,
            (true, DisplayMode::Ambient) => Phase::VisibleAmbient,
        }
    }

    /// Check if the internal periodic tick should be scheduled
    ///
    /// Ambient mode relies on the host's minute ticks instead.
    pub fn should_tick(&self) -> bool {
        matches!(self, Phase::VisibleInteractive)
    }

    /// Check if environment-change listeners should stay registered
    pub fn wants_listeners(&self) -> bool {
        !matches!(self, Phase::Hidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_activates() {
        let next = Lifecycle::Inactive.transition(&Event::Create);
        assert_eq!(next, Lifecycle::Active);
        assert!(next.is_active());
    }

    #[test]
    fn test_destroy_is_terminal() {
        let destroyed = Lifecycle::Active.transition(&Event::Destroy);
        assert_eq!(destroyed, Lifecycle::Destroyed);

        let events = [
            Event::Create,
            Event::VisibilityChanged(true),
            Event::TimeTick,
        ];
        for event in events {
            assert_eq!(destroyed.transition(&event), Lifecycle::Destroyed);
        }
    }

    #[test]
    fn test_display_events_keep_lifecycle() {
        let events = [
            Event::VisibilityChanged(false),
            Event::AmbientModeChanged(true),
            Event::TimeTick,
        ];
        for event in events {
            assert_eq!(Lifecycle::Active.transition(&event), Lifecycle::Active);
            assert_eq!(Lifecycle::Inactive.transition(&event), Lifecycle::Inactive);
        }
    }

    #[test]
    fn test_should_tick_all_combinations() {
        let cases = [
            (true, DisplayMode::Interactive, true),
            (true, DisplayMode::Ambient, false),
            (false, DisplayMode::Interactive, false),
            (false, DisplayMode::Ambient, false),
        ];
        for (visible, mode, expected) in cases {
            assert_eq!(Phase::of(visible, mode).should_tick(), expected);
        }
    }

    #[test]
    fn test_phase_of() {
        assert_eq!(Phase::of(false, DisplayMode::Ambient), Phase::Hidden);
        assert_eq!(
            Phase::of(true, DisplayMode::Interactive),
            Phase::VisibleInteractive
        );
        assert_eq!(Phase::of(true, DisplayMode::Ambient), Phase::VisibleAmbient);
    }

    #[test]
    fn test_listeners_follow_visibility() {
        assert!(Phase::VisibleInteractive.wants_listeners());
        assert!(Phase::VisibleAmbient.wants_listeners());
        assert!(!Phase::Hidden.wants_listeners());
    }
}
