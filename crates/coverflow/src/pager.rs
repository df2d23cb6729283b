//! Boundary with the embedded paged view.
//!
//! The container never renders pages or owns page data. It only needs a
//! handle that accepts touch events, reports the current page and its
//! on-screen bounds, and notifies listeners about scrolling. Handles are
//! shared `Rc`s used from the UI thread, so every method takes `&self` and
//! implementations keep their state behind `Cell`/`RefCell`.

use crate::scroll_state::ScrollState;
use coverflow_foundation::PointerEvent;
use coverflow_ui_graphics::Rect;
use std::rc::Rc;

/// Page-change notifications emitted by a [`PagedView`].
pub trait PageChangeListener {
    /// Scroll progress. `position` is the index of the leftmost visible page
    /// and `position_offset` the fraction of it scrolled off screen.
    fn on_page_scrolled(&self, position: i32, position_offset: f32, position_offset_pixels: i32);

    fn on_page_selected(&self, position: i32);

    fn on_page_scroll_state_changed(&self, state: ScrollState);
}

/// Minimum capability set the container requires from a horizontally paged
/// view.
pub trait PagedView {
    /// Dispatch entry point for (remapped) touch events. Returns whether the
    /// pager consumed the event.
    fn dispatch_touch_event(&self, event: &PointerEvent) -> bool;

    fn current_item(&self) -> i32;

    fn page_count(&self) -> usize;

    /// Visible bounds in screen coordinates.
    fn visible_screen_rect(&self) -> Rect;

    fn add_page_change_listener(&self, listener: Rc<dyn PageChangeListener>);
}

/// A child view handed to the container when it is inflated.
pub trait View {
    /// Human readable type, used in configuration errors.
    fn type_name(&self) -> &'static str;

    /// Returns the paged-view capability if this child is a pager.
    fn as_paged_view(self: Rc<Self>) -> Option<Rc<dyn PagedView>> {
        None
    }
}
