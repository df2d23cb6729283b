//! Pure math/data for the coverflow pager container
//!
//! This crate contains the geometry primitives and unit types shared by the
//! pointer input plumbing and the container core.

mod geometry;
mod unit;

pub use geometry::*;
pub use unit::*;

pub mod prelude {
    pub use crate::geometry::{Offset, Point, Rect, Size};
    pub use crate::unit::Dp;
}
