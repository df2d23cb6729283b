use coverflow_ui_graphics::{Offset, Point};

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// A single-pointer touch event.
///
/// `position` is relative to the view receiving the event and is what the
/// container rewrites when it remaps a touch. `global_position` is the raw
/// screen coordinate and is never rewritten, so tap classification can still
/// see where the finger actually landed.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    pub global_position: Point,
    /// Milliseconds since an arbitrary platform epoch.
    pub uptime_ms: u64,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, global_position: Point) -> Self {
        Self {
            id: 0,
            kind,
            position,
            global_position,
            uptime_ms: 0,
        }
    }

    pub fn with_uptime(mut self, uptime_ms: u64) -> Self {
        self.uptime_ms = uptime_ms;
        self
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    /// Creates a copy of this event with a new local position.
    pub fn copy_with_local_position(&self, position: Point) -> Self {
        Self {
            position,
            ..self.clone()
        }
    }

    /// Copy with the local position shifted by `offset`.
    pub fn offset_location(&self, offset: Offset) -> Self {
        self.copy_with_local_position(self.position + offset)
    }
}
