//! Coordinate remapping.
//!
//! The pager only covers the middle of the container. A drag that starts near
//! the container's edge is translated so the pager sees it start at the
//! container's center. The translation is fixed at touch-down and reused for
//! the rest of the sequence, so only the relative motion of the finger
//! reaches the pager.

use coverflow_foundation::PointerEvent;
use coverflow_ui_graphics::{Offset, Point};

/// Offset that moves `touch_down` onto `center`.
pub fn compute_offset(center: Point, touch_down: Point) -> Offset {
    Offset::new(center.x - touch_down.x, center.y - touch_down.y)
}

/// Translates the event's local position by `offset`. Kind, uptime, pointer
/// id and global position are left untouched.
pub fn remap(event: &PointerEvent, offset: Offset) -> PointerEvent {
    event.offset_location(offset)
}
