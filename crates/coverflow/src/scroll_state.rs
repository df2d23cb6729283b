use crate::pager::PageChangeListener;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Scroll lifecycle reported by the paged view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollState {
    #[default]
    Idle,
    Dragging,
    Settling,
}

impl ScrollState {
    pub fn is_idle(self) -> bool {
        self == ScrollState::Idle
    }
}

/// Forces container redraws while the pager is moving.
///
/// Off-center pages are drawn outside the pager's own viewport, so the host
/// toolkit does not repaint them during a scroll animation. While the scroll
/// state is anything but [`ScrollState::Idle`], every scroll-progress
/// notification requests a redraw.
pub struct RedrawGate {
    state: Cell<ScrollState>,
    invalidate: RefCell<Option<Rc<dyn Fn()>>>,
}

impl std::fmt::Debug for RedrawGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedrawGate")
            .field("state", &self.state.get())
            .finish()
    }
}

impl Default for RedrawGate {
    fn default() -> Self {
        Self::new()
    }
}

impl RedrawGate {
    pub fn new() -> Self {
        Self {
            state: Cell::new(ScrollState::Idle),
            invalidate: RefCell::new(None),
        }
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.state.get()
    }

    pub fn needs_redraw(&self) -> bool {
        !self.state.get().is_idle()
    }

    /// Replaces the redraw callback.
    pub fn set_on_invalidate(&self, invalidate: Rc<dyn Fn()>) {
        *self.invalidate.borrow_mut() = Some(invalidate);
    }

    fn request_redraw(&self) {
        // Clone out so the callback may replace itself.
        let invalidate = self.invalidate.borrow().clone();
        match invalidate {
            Some(invalidate) => invalidate(),
            None => log::trace!("redraw requested with no invalidation callback"),
        }
    }
}

impl PageChangeListener for RedrawGate {
    fn on_page_scrolled(&self, position: i32, position_offset: f32, _position_offset_pixels: i32) {
        if self.needs_redraw() {
            log::trace!("page {position} scrolled by {position_offset:.3}, redrawing");
            self.request_redraw();
        }
    }

    fn on_page_selected(&self, position: i32) {
        log::debug!("page {position} selected");
    }

    fn on_page_scroll_state_changed(&self, state: ScrollState) {
        self.state.set(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting_gate() -> (RedrawGate, Rc<Cell<usize>>) {
        let gate = RedrawGate::new();
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        gate.set_on_invalidate(Rc::new(move || counter.set(counter.get() + 1)));
        (gate, count)
    }

    #[test]
    fn idle_scroll_progress_does_not_redraw() {
        let (gate, count) = counting_gate();
        gate.on_page_scrolled(0, 0.5, 120);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn moving_states_redraw_on_every_progress() {
        let (gate, count) = counting_gate();

        gate.on_page_scroll_state_changed(ScrollState::Dragging);
        gate.on_page_scrolled(0, 0.1, 20);
        gate.on_page_scrolled(0, 0.2, 40);
        assert_eq!(count.get(), 2);

        gate.on_page_scroll_state_changed(ScrollState::Settling);
        gate.on_page_scrolled(0, 0.6, 120);
        assert_eq!(count.get(), 3);

        gate.on_page_scroll_state_changed(ScrollState::Idle);
        gate.on_page_scrolled(1, 0.0, 0);
        assert_eq!(count.get(), 3);
        assert_eq!(gate.scroll_state(), ScrollState::Idle);
    }

    #[test]
    fn missing_callback_is_a_no_op() {
        let gate = RedrawGate::new();
        gate.on_page_scroll_state_changed(ScrollState::Settling);
        gate.on_page_scrolled(2, 0.3, 64);
        assert!(gate.needs_redraw());
    }
}
