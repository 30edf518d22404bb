//! Display backend trait
//!
//! Defines the interface for panels and simulators that show finished
//! frames.

use crate::framebuffer::FrameBuffer;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Frame size does not match the panel
    InvalidDimensions,
    /// Display not initialized
    NotInitialized,
}

/// Display backend trait
///
/// Provides a hardware-agnostic interface for showing a rendered frame.
/// Implementations handle the specifics of the panel, a terminal preview or
/// an image dump.
pub trait DisplayBackend {
    /// Push a complete frame to the display
    fn present(&mut self, frame: &FrameBuffer) -> Result<(), DisplayError>;

    /// Get the display dimensions in pixels
    fn dimensions(&self) -> (u32, u32);

    /// Check if the display is ready
    fn is_ready(&self) -> bool;

    /// Check a frame against the panel size before presenting it
    fn check_frame(&self, frame: &FrameBuffer) -> Result<(), DisplayError> {
        if !self.is_ready() {
            return Err(DisplayError::NotInitialized);
        }
        if (frame.width(), frame.height()) != self.dimensions() {
            return Err(DisplayError::InvalidDimensions);
        }
        Ok(())
    }
}
