use crate::remap::compute_offset;
use coverflow_ui_graphics::{Offset, Point, Size};

/// Measured center of the container plus the last touch-down point.
///
/// Only the container mutates this, through [`on_size_changed`] and
/// [`on_touch_down`]. The center is stale after a resize until
/// `on_size_changed` runs again.
///
/// [`on_size_changed`]: ContainerGeometry::on_size_changed
/// [`on_touch_down`]: ContainerGeometry::on_touch_down
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContainerGeometry {
    center: Point,
    last_touch_down: Option<Point>,
}

impl ContainerGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// `None` until the first touch-down. Survives the end of a sequence.
    pub fn last_touch_down(&self) -> Option<Point> {
        self.last_touch_down
    }

    /// Offset applied to every event of the current touch sequence. Zero when
    /// no touch-down has been seen yet.
    pub fn remap_offset(&self) -> Offset {
        match self.last_touch_down {
            Some(touch_down) => compute_offset(self.center, touch_down),
            None => Offset::ZERO,
        }
    }

    pub(crate) fn on_size_changed(&mut self, size: Size) {
        self.center = size.center();
    }

    pub(crate) fn on_touch_down(&mut self, position: Point) {
        self.last_touch_down = Some(position);
    }
}
