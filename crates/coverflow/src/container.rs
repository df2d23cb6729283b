//! The pager container.
//!
//! The container sees every touch before the pager does. It remaps the touch
//! onto the pager's center, runs it through the tap/drag classifier and then
//! forwards it to the pager. Two delegates do the actual work: a
//! [`PageTapResolver`] receives recognised gestures and a [`RedrawGate`]
//! subscribes to the pager's page-change notifications.

use crate::error::ConfigurationError;
use crate::geometry::ContainerGeometry;
use crate::options::{PagerContainerOptions, RenderHints};
use crate::pager::{PageChangeListener, PagedView, View};
use crate::remap::remap;
use crate::scroll_state::{RedrawGate, ScrollState};
use crate::tap_resolution::PageTapResolver;
use coverflow_foundation::{PointerEvent, PointerEventKind, TapGesture};
use coverflow_ui_graphics::{Point, Rect, Size};
use std::rc::Rc;

pub struct PagerContainer {
    geometry: ContainerGeometry,
    pager: Rc<dyn PagedView>,
    gesture: TapGesture,
    tap_resolver: PageTapResolver,
    redraw_gate: Rc<RedrawGate>,
    options: PagerContainerOptions,
}

impl std::fmt::Debug for PagerContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PagerContainer")
            .field("geometry", &self.geometry)
            .field("scroll_state", &self.redraw_gate.scroll_state())
            .field("options", &self.options)
            .finish()
    }
}

impl PagerContainer {
    /// Attaches the inflated children with default options.
    ///
    /// The first child must be a paged view. Any further children are
    /// ignored.
    pub fn attach_paged_view(children: Vec<Rc<dyn View>>) -> Result<Self, ConfigurationError> {
        Self::attach_paged_view_with_options(children, PagerContainerOptions::default())
    }

    pub fn attach_paged_view_with_options(
        children: Vec<Rc<dyn View>>,
        options: PagerContainerOptions,
    ) -> Result<Self, ConfigurationError> {
        let mut children = children.into_iter();
        let first = children.next().ok_or(ConfigurationError::MissingChild)?;
        let found = first.type_name();
        let pager = first
            .as_paged_view()
            .ok_or(ConfigurationError::NotAPagedView { found })?;

        let ignored = children.count();
        if ignored > 0 {
            log::warn!("pager container ignores {ignored} extra child view(s)");
        }

        Ok(Self::with_pager(pager, options))
    }

    /// Wraps an already resolved pager handle.
    pub fn with_pager(pager: Rc<dyn PagedView>, options: PagerContainerOptions) -> Self {
        let redraw_gate = Rc::new(RedrawGate::new());
        pager.add_page_change_listener(redraw_gate.clone());

        Self {
            geometry: ContainerGeometry::new(),
            gesture: TapGesture::with_thresholds(
                options.touch_slop_px(),
                options.long_press_timeout_ms,
            ),
            tap_resolver: PageTapResolver::new(pager.clone(), options.click_index_policy),
            pager,
            redraw_gate,
            options,
        }
    }

    pub fn paged_view(&self) -> &Rc<dyn PagedView> {
        &self.pager
    }

    pub fn geometry(&self) -> &ContainerGeometry {
        &self.geometry
    }

    pub fn options(&self) -> &PagerContainerOptions {
        &self.options
    }

    pub fn render_hints(&self) -> RenderHints {
        self.options.render_hints
    }

    pub fn scroll_state(&self) -> ScrollState {
        self.redraw_gate.scroll_state()
    }

    /// Pager bounds relative to the container's parent, as used for taps.
    pub fn pager_rect(&self) -> Rect {
        self.tap_resolver.pager_rect()
    }

    /// Must run on every resize; the previous center is stale until it does.
    pub fn on_size_changed(&mut self, width: f32, height: f32) {
        self.geometry.on_size_changed(Size::new(width, height));
        log::debug!(
            "container resized to {width}x{height}, center {:?}",
            self.geometry.center()
        );
    }

    /// Records the parent's screen origin, used to place the pager's screen
    /// bounds in parent coordinates when resolving taps.
    pub fn on_parent_positioned(&mut self, origin: Point) {
        self.tap_resolver.set_parent_origin(origin);
    }

    /// Entry point for every touch the container receives.
    ///
    /// The event is remapped onto the pager's center, classified and then
    /// forwarded to the pager. Returns true if either the classifier or the
    /// pager consumed it.
    pub fn dispatch_touch(&mut self, event: &PointerEvent) -> bool {
        if event.kind == PointerEventKind::Down {
            self.geometry.on_touch_down(event.position);
        }
        let offset = self.geometry.remap_offset();
        let remapped = remap(event, offset);
        log::trace!(
            "{:?} at {:?} remapped by {:?}",
            event.kind,
            event.position,
            offset
        );

        let by_gesture = self
            .gesture
            .on_pointer_event(&remapped, &mut self.tap_resolver);
        let by_pager = self.pager.dispatch_touch_event(&remapped);
        by_gesture || by_pager
    }

    /// Touches delivered straight to the pager.
    ///
    /// They are already in pager coordinates, so only the classifier sees
    /// them; the pager handles them itself unless this returns true. A host
    /// routes each touch to either this or [`dispatch_touch`], never both.
    ///
    /// [`dispatch_touch`]: PagerContainer::dispatch_touch
    pub fn on_pager_touch(&mut self, event: &PointerEvent) -> bool {
        self.gesture.on_pointer_event(event, &mut self.tap_resolver)
    }

    /// Resolves a tap into a page click. Always consumes the tap.
    pub fn on_single_tap_up(&mut self, event: &PointerEvent) -> bool {
        self.tap_resolver.resolve(event)
    }

    pub fn on_page_scrolled(
        &self,
        position: i32,
        position_offset: f32,
        position_offset_pixels: i32,
    ) {
        self.redraw_gate
            .on_page_scrolled(position, position_offset, position_offset_pixels);
    }

    pub fn on_page_selected(&self, position: i32) {
        self.redraw_gate.on_page_selected(position);
    }

    pub fn on_page_scroll_state_changed(&self, state: ScrollState) {
        self.redraw_gate.on_page_scroll_state_changed(state);
    }

    /// Replaces any previously registered click listener.
    pub fn set_on_click_item_listener(&mut self, listener: impl Fn(i32) + 'static) {
        self.tap_resolver.set_listener(Some(Rc::new(listener)));
    }

    pub fn clear_on_click_item_listener(&mut self) {
        self.tap_resolver.set_listener(None);
    }

    /// Called whenever the container must be redrawn while pages move.
    pub fn set_on_invalidate(&self, invalidate: impl Fn() + 'static) {
        self.redraw_gate.set_on_invalidate(Rc::new(invalidate));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct StubPager {
        current: Cell<i32>,
        rect: Cell<Rect>,
        received: RefCell<Vec<PointerEvent>>,
        listeners: RefCell<Vec<Rc<dyn PageChangeListener>>>,
    }

    impl PagedView for StubPager {
        fn dispatch_touch_event(&self, event: &PointerEvent) -> bool {
            self.received.borrow_mut().push(event.clone());
            true
        }

        fn current_item(&self) -> i32 {
            self.current.get()
        }

        fn page_count(&self) -> usize {
            5
        }

        fn visible_screen_rect(&self) -> Rect {
            self.rect.get()
        }

        fn add_page_change_listener(&self, listener: Rc<dyn PageChangeListener>) {
            self.listeners.borrow_mut().push(listener);
        }
    }

    impl View for StubPager {
        fn type_name(&self) -> &'static str {
            "StubPager"
        }

        fn as_paged_view(self: Rc<Self>) -> Option<Rc<dyn PagedView>> {
            Some(self)
        }
    }

    struct Label;

    impl View for Label {
        fn type_name(&self) -> &'static str {
            "Label"
        }
    }

    fn attach(pager: &Rc<StubPager>) -> PagerContainer {
        let children: Vec<Rc<dyn View>> = vec![pager.clone()];
        PagerContainer::attach_paged_view(children).unwrap()
    }

    fn event(kind: PointerEventKind, x: f32, y: f32, uptime_ms: u64) -> PointerEvent {
        let point = Point::new(x, y);
        PointerEvent::new(kind, point, point).with_uptime(uptime_ms)
    }

    #[test]
    fn attach_requires_a_child() {
        let err = PagerContainer::attach_paged_view(Vec::new()).unwrap_err();
        assert_eq!(err, ConfigurationError::MissingChild);
    }

    #[test]
    fn attach_rejects_non_pager_root() {
        let children: Vec<Rc<dyn View>> = vec![Rc::new(Label), Rc::new(StubPager::default())];
        let err = PagerContainer::attach_paged_view(children).unwrap_err();
        assert_eq!(err, ConfigurationError::NotAPagedView { found: "Label" });
    }

    #[test]
    fn attach_subscribes_to_page_changes() {
        let pager = Rc::new(StubPager::default());
        let container = attach(&pager);

        assert_eq!(pager.listeners.borrow().len(), 1);
        pager.listeners.borrow()[0].on_page_scroll_state_changed(ScrollState::Settling);
        assert_eq!(container.scroll_state(), ScrollState::Settling);
    }

    #[test]
    fn touch_down_is_forwarded_at_center() {
        let pager = Rc::new(StubPager::default());
        let mut container = attach(&pager);
        container.on_size_changed(300.0, 200.0);

        assert!(container.dispatch_touch(&event(PointerEventKind::Down, 10.0, 100.0, 0)));

        let received = pager.received.borrow();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].position, Point::new(150.0, 100.0));
        assert_eq!(received[0].global_position, Point::new(10.0, 100.0));
        assert_eq!(
            container.geometry().last_touch_down(),
            Some(Point::new(10.0, 100.0))
        );
    }

    #[test]
    fn mid_stream_events_are_forwarded_unshifted() {
        let pager = Rc::new(StubPager::default());
        let mut container = attach(&pager);
        container.on_size_changed(300.0, 200.0);

        container.dispatch_touch(&event(PointerEventKind::Move, 42.0, 17.0, 0));

        assert_eq!(pager.received.borrow()[0].position, Point::new(42.0, 17.0));
    }

    #[test]
    fn tap_without_listener_is_still_consumed() {
        let pager = Rc::new(StubPager::default());
        pager.rect.set(Rect::from_ltrb(50.0, 0.0, 400.0, 200.0));
        let mut container = attach(&pager);

        assert!(container.on_single_tap_up(&event(PointerEventKind::Up, 200.0, 10.0, 0)));
    }

    fn clicks_for_raw_taps(origin: Point, raw_xs: &[f32]) -> Vec<i32> {
        let pager = Rc::new(StubPager::default());
        pager.rect.set(Rect::from_ltrb(150.0, 0.0, 500.0, 200.0));
        pager.current.set(2);
        let mut container = attach(&pager);
        container.on_parent_positioned(origin);

        let clicks = Rc::new(RefCell::new(Vec::new()));
        let sink = clicks.clone();
        container.set_on_click_item_listener(move |index| sink.borrow_mut().push(index));

        for &x in raw_xs {
            container.on_single_tap_up(&event(PointerEventKind::Up, x, 10.0, 0));
        }
        let recorded = clicks.borrow().clone();
        recorded
    }

    #[test]
    fn parent_origin_moves_pager_rect_into_parent_space() {
        let pager = Rc::new(StubPager::default());
        pager.rect.set(Rect::from_ltrb(150.0, 40.0, 500.0, 240.0));
        let mut container = attach(&pager);
        assert_eq!(container.pager_rect(), pager.rect.get());

        container.on_parent_positioned(Point::new(100.0, 40.0));

        assert_eq!(
            container.pager_rect(),
            Rect::from_ltrb(50.0, 0.0, 400.0, 200.0)
        );
    }

    #[test]
    fn parent_origin_shifts_tap_zones() {
        // Raw x 450 lies inside the pager on screen but right of it once the
        // pager rect is taken relative to a parent 100px to the left.
        assert_eq!(clicks_for_raw_taps(Point::ZERO, &[450.0]), vec![2]);
        assert_eq!(clicks_for_raw_taps(Point::new(100.0, 0.0), &[450.0]), vec![3]);

        assert_eq!(
            clicks_for_raw_taps(Point::new(100.0, 0.0), &[400.0, 200.0, 50.0, 30.0]),
            vec![3, 2, 1, 1]
        );
        assert_eq!(
            clicks_for_raw_taps(Point::ZERO, &[500.0, 200.0, 150.0]),
            vec![3, 2, 1]
        );
    }

    #[test]
    fn pager_touch_taps_resolve_without_remapping() {
        let pager = Rc::new(StubPager::default());
        pager.rect.set(Rect::from_ltrb(50.0, 0.0, 400.0, 200.0));
        let mut container = attach(&pager);

        let clicks = Rc::new(RefCell::new(Vec::new()));
        let sink = clicks.clone();
        container.set_on_click_item_listener(move |index| sink.borrow_mut().push(index));

        assert!(!container.on_pager_touch(&event(PointerEventKind::Down, 200.0, 50.0, 0)));
        assert!(container.on_pager_touch(&event(PointerEventKind::Up, 200.0, 50.0, 30)));

        assert_eq!(*clicks.borrow(), vec![0]);
        assert!(pager.received.borrow().is_empty());
    }
}
