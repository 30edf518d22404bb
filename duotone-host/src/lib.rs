//! Duotone host runtime
//!
//! Runs the watch face on the embassy std executor. The pieces mirror a
//! device host:
//!
//! - [`host::EmbassyHost`] implements the face's collaborator traits
//! - [`tasks`] hold the face, the delayed-message timer, the minute tick and
//!   the scripted callback player
//! - [`messages::MessageQueue`] keeps the face's delayed messages
//! - [`config`] loads `face.toml`
//! - [`backend::SnapshotBackend`] stands in for the panel

pub mod backend;
pub mod channels;
pub mod clock;
pub mod config;
pub mod error;
pub mod host;
pub mod messages;
pub mod tasks;

pub use config::HostConfig;
pub use error::HostError;
