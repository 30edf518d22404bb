//! embedded-graphics rendering for the Duotone watch face
//!
//! This crate provides:
//! - `FrameBuffer`, an in-memory RGB888 draw target implementing the face's
//!   `Canvas` trait
//! - `OwnedBitmap`, a heap-backed image with filtered scaling
//! - Procedural background art for the two-tone face
//! - Mono font selection by text size and typeface
//! - `DisplayBackend` trait for pushing finished frames to a panel
//!
//! # Architecture
//!
//! The face core decides *what* to draw and where; this crate turns those
//! requests into pixels. Panels and simulators only need to implement
//! `DisplayBackend` to show the resulting frame.

#![no_std]

extern crate alloc;

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod art;
pub mod backend;
pub mod bitmap;
pub mod canvas;
pub mod color;
pub mod font;
pub mod framebuffer;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError};
pub use bitmap::OwnedBitmap;
pub use font::{select_font, FontChoice};
pub use framebuffer::FrameBuffer;
