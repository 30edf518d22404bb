//! Configuration type definitions
//!
//! These types describe how the face looks and how often it redraws.
//! Every field has a default matching the stock two-tone face.

use crate::paint::Typeface;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Redraw period while not muted (one second)
pub const NORMAL_UPDATE_RATE_MS: u32 = 1_000;

/// Redraw period while muted (one minute)
pub const MUTE_UPDATE_RATE_MS: u32 = 60_000;

/// Text alpha while not muted (fully opaque)
pub const NORMAL_ALPHA: u8 = 255;

/// Text alpha while muted
pub const MUTE_ALPHA: u8 = 100;

/// Horizontal gap between the digits and the vertical centre line
pub const DEFAULT_DIGIT_GAP_PX: i32 = 5;

/// Vertical drop of the minute baseline below the hour baseline
pub const DEFAULT_MINUTE_DROP_PX: i32 = 80;

/// 24-bit RGB colour
///
/// Kept independent of any pixel format; display adapters convert it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const GRAY: Color = Color::rgb(0x88, 0x88, 0x88);

    /// Create a colour from its components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Digit and background colours for both display modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FaceColors {
    /// Hour digits in interactive mode
    pub interactive_hour: Color,
    /// Minute digits in interactive mode
    pub interactive_minute: Color,
    /// Hour digits in ambient mode
    pub ambient_hour: Color,
    /// Minute digits in ambient mode
    pub ambient_minute: Color,
    /// Flat fill used instead of the background image in ambient mode
    pub ambient_background: Color,
}

impl Default for FaceColors {
    fn default() -> Self {
        Self {
            interactive_hour: Color::WHITE,
            interactive_minute: Color::BLACK,
            ambient_hour: Color::GRAY,
            ambient_minute: Color::GRAY,
            ambient_background: Color::BLACK,
        }
    }
}

/// Digit font settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TextConfig {
    /// Text size in pixels on square screens
    pub size_square: u16,
    /// Text size in pixels on round screens
    pub size_round: u16,
    /// Hour typeface (replaced by [`Typeface::Regular`] under burn-in protection)
    pub hour_typeface: Typeface,
    /// Minute typeface
    pub minute_typeface: Typeface,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            size_square: 18,
            size_round: 20,
            hour_typeface: Typeface::Regular,
            minute_typeface: Typeface::Regular,
        }
    }
}

/// Digit placement relative to the viewport centre
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutConfig {
    /// Gap between each digit pair and the vertical centre line
    pub digit_gap_px: i32,
    /// Minute baseline offset below the centre
    pub minute_drop_px: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            digit_gap_px: DEFAULT_DIGIT_GAP_PX,
            minute_drop_px: DEFAULT_MINUTE_DROP_PX,
        }
    }
}

/// How the time-zone listener guard behaves on visibility changes
///
/// `Legacy` checks the "already registered" flag inverted, so the listener is
/// never attached and zone changes are only picked up when the face is shown
/// again. `Guarded` registers once per visible period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TimeZoneRegistration {
    /// Inverted guard: registration never happens
    #[default]
    Legacy,
    /// Register when visible, unregister when hidden
    Guarded,
}

/// Complete face configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FaceConfig {
    /// Redraw period while not muted (ms)
    pub normal_update_rate_ms: u32,
    /// Redraw period while muted (ms)
    pub mute_update_rate_ms: u32,
    /// Text alpha while not muted
    pub normal_alpha: u8,
    /// Text alpha while muted
    pub mute_alpha: u8,
    /// Colour palette
    pub colors: FaceColors,
    /// Font settings
    pub text: TextConfig,
    /// Digit placement
    pub layout: LayoutConfig,
    /// Time-zone listener registration policy
    pub time_zone_registration: TimeZoneRegistration,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            normal_update_rate_ms: NORMAL_UPDATE_RATE_MS,
            mute_update_rate_ms: MUTE_UPDATE_RATE_MS,
            normal_alpha: NORMAL_ALPHA,
            mute_alpha: MUTE_ALPHA,
            colors: FaceColors::default(),
            text: TextConfig::default(),
            layout: LayoutConfig::default(),
            time_zone_registration: TimeZoneRegistration::default(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// An update rate of zero would reschedule in a busy loop
    ZeroUpdateRate,
    /// Muting must not redraw more often than normal operation
    MuteRateFasterThanNormal,
    /// Muting must not make the digits more opaque
    MuteAlphaAboveNormal,
    /// Text sizes must be non-zero
    ZeroTextSize,
}

impl FaceConfig {
    /// Check the configuration invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.normal_update_rate_ms == 0 || self.mute_update_rate_ms == 0 {
            return Err(ConfigError::ZeroUpdateRate);
        }
        if self.mute_update_rate_ms < self.normal_update_rate_ms {
            return Err(ConfigError::MuteRateFasterThanNormal);
        }
        if self.mute_alpha > self.normal_alpha {
            return Err(ConfigError::MuteAlphaAboveNormal);
        }
        if self.text.size_square == 0 || self.text.size_round == 0 {
            return Err(ConfigError::ZeroTextSize);
        }
        Ok(())
    }

    /// Update rate for the given mute state
    pub fn update_rate_ms(&self, muted: bool) -> u32 {
        if muted {
            self.mute_update_rate_ms
        } else {
            self.normal_update_rate_ms
        }
    }

    /// Text alpha for the given mute state
    pub fn alpha(&self, muted: bool) -> u8 {
        if muted {
            self.mute_alpha
        } else {
            self.normal_alpha
        }
    }
}
