//! Watch-face style pushed to the host when the face is created

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How far notification cards may cover the face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PeekMode {
    /// Cards peek by a height that depends on their content
    #[default]
    Variable,
    /// Cards peek by a single line
    Short,
    /// Cards never peek
    None,
}

/// Whether peeking cards get an opaque background
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BackgroundVisibility {
    /// Background shown only for interruptive notifications
    #[default]
    Interruptive,
    /// Background always shown behind peeking cards
    Persistent,
}

/// Style requested from the host at creation time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WatchFaceStyle {
    pub card_peek_mode: PeekMode,
    pub background_visibility: BackgroundVisibility,
    /// The face draws its own time, so the system clock overlay stays hidden
    pub show_system_ui_time: bool,
}

impl Default for WatchFaceStyle {
    fn default() -> Self {
        Self {
            card_peek_mode: PeekMode::Variable,
            background_visibility: BackgroundVisibility::Interruptive,
            show_system_ui_time: false,
        }
    }
}
