//! Callback recorders for asserting on what the container reported.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Collects every index passed to a click listener.
#[derive(Clone, Debug, Default)]
pub struct ClickRecorder {
    clicks: Rc<RefCell<Vec<i32>>>,
}

impl ClickRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A listener closure feeding this recorder.
    pub fn listener(&self) -> impl Fn(i32) + 'static {
        let clicks = self.clicks.clone();
        move |index| clicks.borrow_mut().push(index)
    }

    pub fn clicks(&self) -> Vec<i32> {
        self.clicks.borrow().clone()
    }

    pub fn last(&self) -> Option<i32> {
        self.clicks.borrow().last().copied()
    }
}

/// Counts redraw requests.
#[derive(Clone, Debug, Default)]
pub struct InvalidationCounter {
    count: Rc<Cell<usize>>,
}

impl InvalidationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn callback(&self) -> impl Fn() + 'static {
        let count = self.count.clone();
        move || count.set(count.get() + 1)
    }

    pub fn count(&self) -> usize {
        self.count.get()
    }

    pub fn reset(&self) {
        self.count.set(0);
    }
}
