//! Face state machine
//!
//! Host lifecycle callbacks arrive as [`Event`]s. The lifecycle is explicit
//! and finite; the display [`Phase`] is derived from visibility and mode and
//! decides whether the internal tick runs.

pub mod events;
pub mod machine;
pub mod mode;

pub use events::{DataLayerEvent, Event};
pub use machine::{Lifecycle, Phase};
pub use mode::{DeviceProperties, DisplayMode, InterruptionFilter, ScreenShape};
