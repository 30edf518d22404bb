//! Configuration types
//!
//! Board-agnostic face configuration. Hosts deserialize it (with the `serde`
//! feature) or build it in code from [`FaceConfig::default`].

pub mod style;
pub mod types;

pub use style::*;
pub use types::*;
