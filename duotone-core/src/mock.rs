//! Recording host and canvas doubles
//!
//! `MockHost` implements every collaborator trait and records each call in
//! order, so tests can assert on scheduling and invalidation without a real
//! message loop. `MockCanvas` records draw operations the same way.

use heapless::{String, Vec};

use crate::config::{Color, WatchFaceStyle};
use crate::paint::Paint;
use crate::time::UtcOffset;
use crate::traits::{
    Bitmap, Bounds, Canvas, Clock, DataLayer, EnvironmentSource, MessageScheduler, MessageTag,
    SurfaceHost,
};

/// Maximum recorded host calls before the oldest are dropped
pub const MAX_RECORDED_CALLS: usize = 128;

/// Maximum messages queued at once
pub const MAX_PENDING: usize = 8;

/// A call made by the face into the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCall {
    Post(MessageTag),
    PostDelayed(MessageTag, u32),
    Cancel(MessageTag),
    RegisterTimeZoneListener,
    UnregisterTimeZoneListener,
    Connect,
    Disconnect,
    AddListener,
    RemoveListener,
    Invalidate,
    SetStyle(WatchFaceStyle),
}

/// A message waiting in the mock queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingMessage {
    pub tag: MessageTag,
    pub delay_ms: u32,
}

/// Host double that records every call
#[derive(Debug, Default)]
pub struct MockHost {
    calls: Vec<HostCall, MAX_RECORDED_CALLS>,
    pending: Vec<PendingMessage, MAX_PENDING>,
    now_ms: u64,
    connected: bool,
    default_zone: UtcOffset,
    style: Option<WatchFaceStyle>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host clock reading in epoch milliseconds
    pub fn with_now(now_ms: u64) -> Self {
        Self {
            now_ms,
            ..Self::default()
        }
    }

    pub fn set_now_ms(&mut self, now_ms: u64) {
        self.now_ms = now_ms;
    }

    /// Move the clock forward
    pub fn advance_ms(&mut self, ms: u64) {
        self.now_ms += ms;
    }

    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }

    pub fn set_default_zone(&mut self, zone: UtcOffset) {
        self.default_zone = zone;
    }

    /// Every recorded call, oldest first
    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Number of recorded calls equal to `call`
    pub fn count(&self, call: HostCall) -> usize {
        self.calls.iter().filter(|c| **c == call).count()
    }

    /// Number of redraw requests
    pub fn invalidations(&self) -> usize {
        self.count(HostCall::Invalidate)
    }

    /// Messages still queued, in posting order
    pub fn pending(&self) -> &[PendingMessage] {
        &self.pending
    }

    /// Dequeue the message that would be delivered next
    ///
    /// Delivery order is by delay, then by posting order.
    pub fn take_next(&mut self) -> Option<PendingMessage> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .min_by_key(|(i, m)| (m.delay_ms, *i))
            .map(|(i, _)| i)?;
        Some(self.pending.remove(index))
    }

    /// Last style pushed by the face
    pub fn style(&self) -> Option<WatchFaceStyle> {
        self.style
    }

    fn record(&mut self, call: HostCall) {
        if self.calls.is_full() {
            self.calls.remove(0);
        }
        let _ = self.calls.push(call);
    }

    fn enqueue(&mut self, tag: MessageTag, delay_ms: u32) {
        if self.pending.push(PendingMessage { tag, delay_ms }).is_err() {
            log::warn!("Mock message queue full, dropping {:?}", tag);
        }
    }
}

impl MessageScheduler for MockHost {
    fn post(&mut self, tag: MessageTag) {
        self.record(HostCall::Post(tag));
        self.enqueue(tag, 0);
    }

    fn post_delayed(&mut self, tag: MessageTag, delay_ms: u32) {
        self.record(HostCall::PostDelayed(tag, delay_ms));
        self.enqueue(tag, delay_ms);
    }

    fn cancel(&mut self, tag: MessageTag) {
        self.record(HostCall::Cancel(tag));
        self.pending.retain(|m| m.tag != tag);
    }
}

impl EnvironmentSource for MockHost {
    fn register_time_zone_listener(&mut self) {
        self.record(HostCall::RegisterTimeZoneListener);
    }

    fn unregister_time_zone_listener(&mut self) {
        self.record(HostCall::UnregisterTimeZoneListener);
    }

    fn default_time_zone(&self) -> UtcOffset {
        self.default_zone
    }
}

impl DataLayer for MockHost {
    fn connect(&mut self) {
        self.record(HostCall::Connect);
        self.connected = true;
    }

    fn disconnect(&mut self) {
        self.record(HostCall::Disconnect);
        self.connected = false;
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn add_listener(&mut self) {
        self.record(HostCall::AddListener);
    }

    fn remove_listener(&mut self) {
        self.record(HostCall::RemoveListener);
    }
}

impl SurfaceHost for MockHost {
    fn invalidate(&mut self) {
        self.record(HostCall::Invalidate);
    }

    fn set_watch_face_style(&mut self, style: &WatchFaceStyle) {
        self.record(HostCall::SetStyle(*style));
        self.style = Some(*style);
    }
}

impl Clock for MockHost {
    fn now_ms(&self) -> u64 {
        self.now_ms
    }
}

/// Bitmap double that only tracks its size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockBitmap {
    width: u32,
    height: u32,
}

impl MockBitmap {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Bitmap for MockBitmap {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn scaled(&self, width: u32, height: u32) -> Self {
        Self::new(width, height)
    }
}

/// Maximum text length recorded per draw call
pub const MAX_TEXT: usize = 8;

/// A recorded draw operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    Bitmap {
        width: u32,
        height: u32,
        x: i32,
        y: i32,
    },
    Fill {
        bounds: Bounds,
        color: Color,
    },
    Text {
        text: String<MAX_TEXT>,
        x: i32,
        baseline: i32,
        paint: Paint,
    },
}

/// Canvas double with fixed-advance glyphs
///
/// Each glyph is half the text size wide, so "14" at size 20 measures 20 px.
#[derive(Debug, Default)]
pub struct MockCanvas {
    ops: Vec<DrawOp, 16>,
}

impl MockCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    fn record(&mut self, op: DrawOp) {
        if self.ops.push(op).is_err() {
            log::warn!("Mock canvas full, dropping draw op");
        }
    }
}

impl Canvas for MockCanvas {
    type Bitmap = MockBitmap;

    fn draw_bitmap(&mut self, bitmap: &MockBitmap, x: i32, y: i32) {
        self.record(DrawOp::Bitmap {
            width: bitmap.width(),
            height: bitmap.height(),
            x,
            y,
        });
    }

    fn fill_rect(&mut self, bounds: Bounds, color: Color) {
        self.record(DrawOp::Fill { bounds, color });
    }

    fn measure_text(&self, text: &str, paint: &Paint) -> u32 {
        text.chars().count() as u32 * u32::from(paint.text_size / 2)
    }

    fn draw_text(&mut self, text: &str, x: i32, baseline: i32, paint: &Paint) {
        let mut owned = String::new();
        for c in text.chars() {
            if owned.push(c).is_err() {
                break;
            }
        }
        self.record(DrawOp::Text {
            text: owned,
            x,
            baseline,
            paint: *paint,
        });
    }
}
