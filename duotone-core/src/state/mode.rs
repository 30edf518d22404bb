//! Display and device modes reported by the host

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Display rendering mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayMode {
    /// Full colour, background image, per-second redraws
    #[default]
    Interactive,
    /// Low power: reduced palette, flat background, host minute ticks only
    Ambient,
}

impl DisplayMode {
    /// Map the host's "in ambient mode" flag
    pub fn from_ambient(in_ambient: bool) -> Self {
        if in_ambient {
            DisplayMode::Ambient
        } else {
            DisplayMode::Interactive
        }
    }

    pub fn is_ambient(&self) -> bool {
        matches!(self, DisplayMode::Ambient)
    }
}

/// Notification interruption filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InterruptionFilter {
    /// Filter state not reported
    Unknown,
    /// All notifications allowed
    #[default]
    All,
    /// Priority notifications only
    Priority,
    /// No notifications allowed
    None,
    /// Alarms only
    Alarms,
}

impl InterruptionFilter {
    /// Mute mode is entered only when nothing may interrupt
    pub fn is_mute(&self) -> bool {
        matches!(self, InterruptionFilter::None)
    }
}

/// Screen outline reported by the window insets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ScreenShape {
    #[default]
    Square,
    Round,
}

/// Device display capabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DeviceProperties {
    /// Ambient mode supports fewer bits per pixel; avoid anti-aliasing
    pub low_bit_ambient: bool,
    /// Screen needs burn-in protection; avoid heavy glyphs
    pub burn_in_protection: bool,
}
