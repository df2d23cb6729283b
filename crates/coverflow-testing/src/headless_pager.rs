//! A paged view without rendering.
//!
//! `HeadlessPager` behaves like a horizontal pager as far as the container
//! can tell: it tracks drags, emits scroll progress and scroll-state changes,
//! settles onto a neighbour once a drag covers half a page, and records every
//! event it was handed so tests can inspect what the container forwarded.

use coverflow::{PageChangeListener, PagedView, ScrollState, View};
use coverflow_foundation::gesture_constants::TOUCH_SLOP;
use coverflow_foundation::{PointerEvent, PointerEventKind};
use coverflow_ui_graphics::{Point, Rect};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Clone, Copy, Debug)]
struct DragTrack {
    down_x: f32,
    dragging: bool,
}

pub struct HeadlessPager {
    page_count: usize,
    screen_rect: Cell<Rect>,
    current: Cell<i32>,
    scroll_state: Cell<ScrollState>,
    touch_slop: f32,
    drag: Cell<Option<DragTrack>>,
    received: RefCell<Vec<PointerEvent>>,
    listeners: RefCell<Vec<Rc<dyn PageChangeListener>>>,
}

impl std::fmt::Debug for HeadlessPager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeadlessPager")
            .field("page_count", &self.page_count)
            .field("current", &self.current.get())
            .field("screen_rect", &self.screen_rect.get())
            .field("scroll_state", &self.scroll_state.get())
            .finish()
    }
}

impl HeadlessPager {
    pub fn new(page_count: usize, screen_rect: Rect) -> Self {
        Self {
            page_count,
            screen_rect: Cell::new(screen_rect),
            current: Cell::new(0),
            scroll_state: Cell::new(ScrollState::Idle),
            touch_slop: TOUCH_SLOP.0,
            drag: Cell::new(None),
            received: RefCell::new(Vec::new()),
            listeners: RefCell::new(Vec::new()),
        }
    }

    pub fn page_width(&self) -> f32 {
        self.screen_rect.get().width
    }

    pub fn set_screen_rect(&self, rect: Rect) {
        self.screen_rect.set(rect);
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.scroll_state.get()
    }

    /// Jumps to `index`, clamped to the available pages.
    pub fn set_current_item(&self, index: i32) {
        let Some(last) = self.last_index() else {
            return;
        };
        let index = index.clamp(0, last);
        if index != self.current.get() {
            self.current.set(index);
            self.each_listener(|listener| listener.on_page_selected(index));
        }
        self.each_listener(|listener| listener.on_page_scrolled(index, 0.0, 0));
    }

    pub fn received_events(&self) -> Vec<PointerEvent> {
        self.received.borrow().clone()
    }

    pub fn received_positions(&self) -> Vec<Point> {
        self.received.borrow().iter().map(|e| e.position).collect()
    }

    pub fn clear_received(&self) {
        self.received.borrow_mut().clear();
    }

    fn last_index(&self) -> Option<i32> {
        let count = i32::try_from(self.page_count).ok()?;
        (count > 0).then_some(count - 1)
    }

    fn each_listener(&self, mut notify: impl FnMut(&dyn PageChangeListener)) {
        // Listeners may call back into the pager.
        let listeners = self.listeners.borrow().clone();
        for listener in &listeners {
            notify(listener.as_ref());
        }
    }

    fn set_scroll_state(&self, state: ScrollState) {
        if self.scroll_state.replace(state) != state {
            self.each_listener(|listener| listener.on_page_scroll_state_changed(state));
        }
    }

    fn report_progress(&self, dragged_left: f32) {
        let width = self.page_width();
        if width <= 0.0 {
            return;
        }
        let page_position = self.current.get() as f32 + dragged_left / width;
        let position = page_position.floor();
        let offset = page_position - position;
        let offset_px = (offset * width).round() as i32;
        self.each_listener(|listener| {
            listener.on_page_scrolled(position as i32, offset, offset_px)
        });
    }

    fn settle(&self, dragged_left: f32) {
        let half = self.page_width() / 2.0;
        let current = self.current.get();
        let target = if dragged_left > half {
            current + 1
        } else if dragged_left < -half {
            current - 1
        } else {
            current
        };
        log::debug!("headless pager settling from page {current} towards {target}");
        self.set_scroll_state(ScrollState::Settling);
        self.set_current_item(target);
        self.set_scroll_state(ScrollState::Idle);
    }
}

impl PagedView for HeadlessPager {
    fn dispatch_touch_event(&self, event: &PointerEvent) -> bool {
        self.received.borrow_mut().push(event.clone());
        let x = event.position.x;

        match event.kind {
            PointerEventKind::Down => {
                self.drag.set(Some(DragTrack {
                    down_x: x,
                    dragging: false,
                }));
                true
            }
            PointerEventKind::Move => {
                let Some(mut track) = self.drag.get() else {
                    return false;
                };
                let dragged_left = track.down_x - x;
                if !track.dragging && dragged_left.abs() > self.touch_slop {
                    track.dragging = true;
                    self.drag.set(Some(track));
                    self.set_scroll_state(ScrollState::Dragging);
                }
                if track.dragging {
                    self.report_progress(dragged_left);
                }
                true
            }
            PointerEventKind::Up | PointerEventKind::Cancel => {
                let Some(track) = self.drag.take() else {
                    return false;
                };
                if track.dragging {
                    let dragged_left = if event.kind == PointerEventKind::Up {
                        track.down_x - x
                    } else {
                        0.0
                    };
                    self.settle(dragged_left);
                }
                true
            }
        }
    }

    fn current_item(&self) -> i32 {
        self.current.get()
    }

    fn page_count(&self) -> usize {
        self.page_count
    }

    fn visible_screen_rect(&self) -> Rect {
        self.screen_rect.get()
    }

    fn add_page_change_listener(&self, listener: Rc<dyn PageChangeListener>) {
        self.listeners.borrow_mut().push(listener);
    }
}

impl View for HeadlessPager {
    fn type_name(&self) -> &'static str {
        "HeadlessPager"
    }

    fn as_paged_view(self: Rc<Self>) -> Option<Rc<dyn PagedView>> {
        Some(self)
    }
}
