//! Host abstraction traits
//!
//! These traits define the interface between the face logic and
//! platform-specific implementations. Each one is narrow; a host adapter
//! usually implements all of them and so gets [`FaceHost`] for free.

pub mod canvas;
pub mod clock;
pub mod data_layer;
pub mod environment;
pub mod scheduler;
pub mod surface;

pub use canvas::{Bitmap, Bounds, Canvas};
pub use clock::Clock;
pub use data_layer::DataLayer;
pub use environment::EnvironmentSource;
pub use scheduler::{MessageScheduler, MessageTag};
pub use surface::SurfaceHost;

/// Every host service the display controller relies on
pub trait FaceHost: MessageScheduler + EnvironmentSource + DataLayer + SurfaceHost + Clock {}

// Blanket implementation for all types providing each service
impl<T> FaceHost for T where T: MessageScheduler + EnvironmentSource + DataLayer + SurfaceHost + Clock
{}
