//! Drawing surface host trait

use crate::config::WatchFaceStyle;

/// Trait for the host surface the face draws on
pub trait SurfaceHost {
    /// Request a redraw; the host calls back with a canvas later
    fn invalidate(&mut self);

    /// Apply the face's style preferences
    fn set_watch_face_style(&mut self, style: &WatchFaceStyle);
}
