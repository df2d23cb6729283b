use crate::pager::PagedView;
use coverflow_foundation::{GestureListener, PointerEvent};
use coverflow_ui_graphics::{Point, Rect};
use std::rc::Rc;

/// Which visible page a single tap landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TapResolution {
    Previous,
    Current,
    Next,
}

impl TapResolution {
    /// Classifies a tap by its x coordinate against the pager's bounds. Taps
    /// exactly on an edge belong to the neighbour on that side.
    pub fn resolve(tap_x: f32, pager_rect: Rect) -> Self {
        if tap_x >= pager_rect.right() {
            TapResolution::Next
        } else if tap_x <= pager_rect.left() {
            TapResolution::Previous
        } else {
            TapResolution::Current
        }
    }

    pub fn target_index(self, current_item: i32) -> i32 {
        match self {
            TapResolution::Previous => current_item.saturating_sub(1),
            TapResolution::Current => current_item,
            TapResolution::Next => current_item.saturating_add(1),
        }
    }
}

/// What to do with a resolved index that falls outside `0..page_count`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ClickIndexPolicy {
    /// Report the index as resolved, even if negative or past the last page.
    #[default]
    PassThrough,
    /// Clamp into `0..page_count`. Nothing is reported for an empty pager.
    Clamp,
    /// Drop the click.
    Ignore,
}

impl ClickIndexPolicy {
    pub fn apply(self, index: i32, page_count: usize) -> Option<i32> {
        let last = i32::try_from(page_count).unwrap_or(i32::MAX) - 1;
        match self {
            ClickIndexPolicy::PassThrough => Some(index),
            ClickIndexPolicy::Clamp if last < 0 => None,
            ClickIndexPolicy::Clamp => Some(index.clamp(0, last)),
            ClickIndexPolicy::Ignore => (0..=last).contains(&index).then_some(index),
        }
    }
}

/// Gesture handler that turns single taps into page clicks.
pub(crate) struct PageTapResolver {
    pager: Rc<dyn PagedView>,
    parent_origin: Point,
    policy: ClickIndexPolicy,
    listener: Option<Rc<dyn Fn(i32)>>,
}

impl PageTapResolver {
    pub(crate) fn new(pager: Rc<dyn PagedView>, policy: ClickIndexPolicy) -> Self {
        Self {
            pager,
            parent_origin: Point::ZERO,
            policy,
            listener: None,
        }
    }

    pub(crate) fn set_parent_origin(&mut self, origin: Point) {
        self.parent_origin = origin;
    }

    pub(crate) fn set_listener(&mut self, listener: Option<Rc<dyn Fn(i32)>>) {
        self.listener = listener;
    }

    /// Pager bounds relative to the container's parent.
    pub(crate) fn pager_rect(&self) -> Rect {
        self.pager
            .visible_screen_rect()
            .translate(-self.parent_origin.x, -self.parent_origin.y)
    }

    /// Resolves and reports one tap. Always consumes it.
    ///
    /// The raw screen x of the tap is compared against the pager bounds
    /// taken relative to the parent, so a container placed away from its
    /// parent's origin shifts the tap zones by that distance.
    pub(crate) fn resolve(&self, event: &PointerEvent) -> bool {
        let rect = self.pager_rect();
        let tap_x = event.global_position.x;
        let resolution = TapResolution::resolve(tap_x, rect);
        let current = self.pager.current_item();
        let index = resolution.target_index(current);
        log::debug!(
            "tap at x={tap_x} against pager [{}, {}] resolved to {resolution:?} (index {index})",
            rect.left(),
            rect.right()
        );

        let Some(listener) = self.listener.as_ref() else {
            return true;
        };
        match self.policy.apply(index, self.pager.page_count()) {
            Some(index) => listener(index),
            None => log::debug!("click on out-of-range index {index} dropped by {:?}", self.policy),
        }
        true
    }
}

impl GestureListener for PageTapResolver {
    fn on_single_tap_up(&mut self, event: &PointerEvent) -> bool {
        self.resolve(event)
    }

    fn on_long_press(&mut self, event: &PointerEvent) {
        log::debug!(
            "long press at x={} is not a page click",
            event.global_position.x
        );
    }
}
