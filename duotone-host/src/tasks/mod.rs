//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod face;
pub mod message_timer;
pub mod script;
pub mod time_tick;

pub use face::{face_task, FaceRuntime};
pub use message_timer::message_timer_task;
pub use script::script_task;
pub use time_tick::time_tick_task;
