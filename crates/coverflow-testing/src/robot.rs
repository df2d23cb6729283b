//! Robot-style touch driver.
//!
//! `TouchRobot` produces timestamped single-pointer events and feeds them to
//! a [`PagerContainer`], so tests read as a sequence of user interactions.
//!
//! # Example
//!
//! ```
//! use coverflow::{PagerContainer, Rect, View};
//! use coverflow_testing::{ClickRecorder, HeadlessPager, TouchRobot};
//! use std::rc::Rc;
//!
//! let pager = Rc::new(HeadlessPager::new(5, Rect::from_ltrb(50.0, 0.0, 400.0, 200.0)));
//! let children: Vec<Rc<dyn View>> = vec![pager.clone()];
//! let mut container = PagerContainer::attach_paged_view(children).unwrap();
//! container.on_size_changed(450.0, 200.0);
//!
//! let clicks = ClickRecorder::new();
//! container.set_on_click_item_listener(clicks.listener());
//!
//! let mut robot = TouchRobot::new();
//! robot.tap(&mut container, 420.0, 100.0);
//! assert_eq!(clicks.clicks(), vec![1]);
//! ```

use coverflow::PagerContainer;
use coverflow_foundation::gesture_constants::LONG_PRESS_TIMEOUT_MS;
use coverflow_foundation::{PointerDispatcher, PointerEvent, PointerEventKind, PointerId};
use coverflow_ui_graphics::Point;

/// Frame interval between generated move events.
const FRAME_MS: u64 = 16;

/// Time between press and release of a generated tap.
const TAP_DURATION_MS: u64 = 60;

#[derive(Debug, Clone)]
pub struct TouchRobot {
    clock_ms: u64,
    pointer: PointerId,
}

impl Default for TouchRobot {
    fn default() -> Self {
        Self::new()
    }
}

impl TouchRobot {
    pub fn new() -> Self {
        Self {
            clock_ms: 0,
            pointer: 0,
        }
    }

    pub fn now(&self) -> u64 {
        self.clock_ms
    }

    pub fn advance_time(&mut self, millis: u64) {
        self.clock_ms += millis;
    }

    /// Builds an event at `(x, y)` stamped with the current time. The
    /// container is assumed to sit at the screen origin, so the local and
    /// raw positions coincide.
    pub fn event(&self, kind: PointerEventKind, x: f32, y: f32) -> PointerEvent {
        let point = Point::new(x, y);
        PointerEvent::new(kind, point, point)
            .with_uptime(self.clock_ms)
            .with_id(self.pointer)
    }

    pub fn down(&mut self, container: &mut PagerContainer, x: f32, y: f32) -> bool {
        let event = self.event(PointerEventKind::Down, x, y);
        container.dispatch_touch(&event)
    }

    pub fn move_to(&mut self, container: &mut PagerContainer, x: f32, y: f32) -> bool {
        self.advance_time(FRAME_MS);
        let event = self.event(PointerEventKind::Move, x, y);
        container.dispatch_touch(&event)
    }

    pub fn up(&mut self, container: &mut PagerContainer, x: f32, y: f32) -> bool {
        let event = self.event(PointerEventKind::Up, x, y);
        container.dispatch_touch(&event)
    }

    pub fn cancel(&mut self, container: &mut PagerContainer, x: f32, y: f32) -> bool {
        let event = self.event(PointerEventKind::Cancel, x, y);
        container.dispatch_touch(&event)
    }

    /// Press and quick release at one spot. Returns what the release
    /// reported.
    pub fn tap(&mut self, container: &mut PagerContainer, x: f32, y: f32) -> bool {
        self.down(container, x, y);
        self.advance_time(TAP_DURATION_MS);
        self.up(container, x, y)
    }

    /// Press, hold past the long-press timeout, release.
    pub fn long_press(&mut self, container: &mut PagerContainer, x: f32, y: f32) -> bool {
        self.down(container, x, y);
        self.advance_time(LONG_PRESS_TIMEOUT_MS);
        self.up(container, x, y)
    }

    /// Press at `from`, move to `to` in `steps` frames, release at `to`.
    pub fn drag(
        &mut self,
        container: &mut PagerContainer,
        from: Point,
        to: Point,
        steps: usize,
    ) {
        self.down(container, from.x, from.y);
        let steps = steps.max(1);
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            let x = from.x + (to.x - from.x) * t;
            let y = from.y + (to.y - from.y) * t;
            self.move_to(container, x, y);
        }
        self.up(container, to.x, to.y);
    }

    /// Enqueues a tap instead of delivering it, for hosts that batch input
    /// through a [`PointerDispatcher`].
    pub fn queue_tap(&mut self, dispatcher: &mut PointerDispatcher, x: f32, y: f32) {
        dispatcher.push(self.event(PointerEventKind::Down, x, y));
        self.advance_time(TAP_DURATION_MS);
        dispatcher.push(self.event(PointerEventKind::Up, x, y));
    }

    /// Enqueues a drag instead of delivering it.
    pub fn queue_drag(&mut self, dispatcher: &mut PointerDispatcher, from: Point, to: Point) {
        dispatcher.push(self.event(PointerEventKind::Down, from.x, from.y));
        self.advance_time(FRAME_MS);
        let mid = Point::new((from.x + to.x) / 2.0, (from.y + to.y) / 2.0);
        dispatcher.push(self.event(PointerEventKind::Move, mid.x, mid.y));
        self.advance_time(FRAME_MS);
        dispatcher.push(self.event(PointerEventKind::Move, to.x, to.y));
        dispatcher.push(self.event(PointerEventKind::Up, to.x, to.y));
    }
}
