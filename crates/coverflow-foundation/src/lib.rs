//! Foundation elements for the coverflow pager container: pointer events,
//! gesture thresholds and the single-tap/drag classifier.

pub mod gesture_constants;
pub mod input;

pub use coverflow_ui_graphics::{Offset, Point, Rect, Size};
pub use input::gestures::{GestureListener, TapGesture};
pub use input::{PointerDispatcher, PointerEvent, PointerEventKind, PointerId};

pub mod prelude {
    pub use crate::gesture_constants::*;
    pub use crate::input::gestures::{GestureListener, TapGesture};
    pub use crate::input::prelude::*;
}
