//! Cover-flow pager container.
//!
//! [`PagerContainer`] wraps a horizontally paged view that only occupies the
//! middle of a wider area. Touches anywhere in the container are re-projected
//! onto the pager's center so edge drags still page, and single taps are
//! resolved into "previous / current / next page" clicks.

mod container;
mod error;
mod geometry;
mod options;
mod pager;
pub mod remap;
mod scroll_state;
mod tap_resolution;

pub use container::PagerContainer;
pub use error::ConfigurationError;
pub use geometry::ContainerGeometry;
pub use options::{PagerContainerOptions, RenderHints};
pub use pager::{PageChangeListener, PagedView, View};
pub use scroll_state::{RedrawGate, ScrollState};
pub use tap_resolution::{ClickIndexPolicy, TapResolution};

pub use coverflow_foundation::{PointerEvent, PointerEventKind};
pub use coverflow_ui_graphics::{Dp, Offset, Point, Rect, Size};

pub mod prelude {
    pub use crate::pager::{PageChangeListener, PagedView, View};
    pub use crate::{
        ClickIndexPolicy, ConfigurationError, PagerContainer, PagerContainerOptions, ScrollState,
        TapResolution,
    };
    pub use coverflow_foundation::prelude::*;
    pub use coverflow_ui_graphics::prelude::*;
}
