//! Board-agnostic core logic for the Duotone watch face
//!
//! This crate contains all face logic that does not depend on a specific
//! host platform or display:
//!
//! - Host collaborator traits (scheduler, environment, connectivity, surface)
//! - Display-mode state machine and tick policy
//! - Paint configuration for the hour and minute digits
//! - Wall-clock math and boundary-aligned redraw delays
//! - Cached background scaling and the render step
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod background;
pub mod config;
pub mod controller;
pub mod engine;
pub mod format;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod paint;
pub mod render;
pub mod state;
pub mod time;
pub mod traits;

pub use controller::{DisplayController, Frame};
pub use engine::WatchFace;
