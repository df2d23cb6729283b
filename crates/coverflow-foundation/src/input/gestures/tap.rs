//! Single-tap / drag recogniser.
//!
//! Classifies a single-pointer touch sequence as either a tap (released
//! within the touch slop and before the long-press timeout), a long press,
//! or a drag (moved past the slop). Taps and long presses are reported to a
//! [`GestureListener`]; drags are left entirely to the pager.

use crate::gesture_constants::{LONG_PRESS_TIMEOUT_MS, TOUCH_SLOP};
use crate::input::types::{PointerEvent, PointerEventKind};
use coverflow_ui_graphics::Point;

/// Receives gestures recognised by [`TapGesture`].
pub trait GestureListener {
    /// Returns whether the listener consumed the releasing event.
    fn on_single_tap_up(&mut self, event: &PointerEvent) -> bool;

    fn on_long_press(&mut self, _event: &PointerEvent) {}
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum TapState {
    Idle,
    Pressed { down: Point, down_uptime_ms: u64 },
    Dragging,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TapGesture {
    touch_slop: f32,
    long_press_timeout_ms: u64,
    state: TapState,
}

impl Default for TapGesture {
    fn default() -> Self {
        Self::new()
    }
}

impl TapGesture {
    /// Recogniser using the default slop at density 1.0.
    pub fn new() -> Self {
        Self::with_thresholds(TOUCH_SLOP.0, LONG_PRESS_TIMEOUT_MS)
    }

    /// `touch_slop` is in pixels.
    pub fn with_thresholds(touch_slop: f32, long_press_timeout_ms: u64) -> Self {
        Self {
            touch_slop,
            long_press_timeout_ms,
            state: TapState::Idle,
        }
    }

    pub fn reset(&mut self) {
        self.state = TapState::Idle;
    }

    /// Feeds one event through the recogniser. Returns whatever the listener
    /// returned for a tap completed by this event, or `false` otherwise.
    pub fn on_pointer_event(
        &mut self,
        event: &PointerEvent,
        listener: &mut dyn GestureListener,
    ) -> bool {
        match event.kind {
            PointerEventKind::Down => {
                self.state = TapState::Pressed {
                    down: event.position,
                    down_uptime_ms: event.uptime_ms,
                };
                false
            }
            PointerEventKind::Move => {
                if let TapState::Pressed { down, .. } = self.state {
                    if down.distance_to(event.position) > self.touch_slop {
                        log::trace!("pointer {} left touch slop, tracking drag", event.id);
                        self.state = TapState::Dragging;
                    }
                }
                false
            }
            PointerEventKind::Up => {
                let state = std::mem::replace(&mut self.state, TapState::Idle);
                match state {
                    TapState::Pressed { down_uptime_ms, .. } => {
                        let held = event.uptime_ms.saturating_sub(down_uptime_ms);
                        if held >= self.long_press_timeout_ms {
                            listener.on_long_press(event);
                            false
                        } else {
                            listener.on_single_tap_up(event)
                        }
                    }
                    TapState::Dragging | TapState::Idle => false,
                }
            }
            PointerEventKind::Cancel => {
                self.reset();
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        taps: Vec<Point>,
        long_presses: usize,
    }

    impl GestureListener for Recorder {
        fn on_single_tap_up(&mut self, event: &PointerEvent) -> bool {
            self.taps.push(event.position);
            true
        }

        fn on_long_press(&mut self, _event: &PointerEvent) {
            self.long_presses += 1;
        }
    }

    fn event(kind: PointerEventKind, x: f32, y: f32, uptime_ms: u64) -> PointerEvent {
        let point = Point::new(x, y);
        PointerEvent::new(kind, point, point).with_uptime(uptime_ms)
    }

    #[test]
    fn quick_release_is_a_tap() {
        let mut gesture = TapGesture::new();
        let mut recorder = Recorder::default();

        assert!(!gesture.on_pointer_event(
            &event(PointerEventKind::Down, 10.0, 10.0, 0),
            &mut recorder
        ));
        assert!(!gesture.on_pointer_event(
            &event(PointerEventKind::Move, 13.0, 12.0, 20),
            &mut recorder
        ));
        assert!(gesture.on_pointer_event(
            &event(PointerEventKind::Up, 13.0, 12.0, 60),
            &mut recorder
        ));

        assert_eq!(recorder.taps, vec![Point::new(13.0, 12.0)]);
        assert_eq!(gesture, TapGesture::new());
    }

    #[test]
    fn moving_past_slop_suppresses_tap() {
        let mut gesture = TapGesture::new();
        let mut recorder = Recorder::default();

        gesture.on_pointer_event(&event(PointerEventKind::Down, 10.0, 10.0, 0), &mut recorder);
        gesture.on_pointer_event(&event(PointerEventKind::Move, 30.0, 10.0, 16), &mut recorder);
        // Returning inside the slop does not revive the tap.
        gesture.on_pointer_event(&event(PointerEventKind::Move, 10.0, 10.0, 32), &mut recorder);
        let consumed =
            gesture.on_pointer_event(&event(PointerEventKind::Up, 10.0, 10.0, 48), &mut recorder);

        assert!(!consumed);
        assert!(recorder.taps.is_empty());
    }

    #[test]
    fn slop_is_configurable() {
        let mut gesture = TapGesture::with_thresholds(2.0, LONG_PRESS_TIMEOUT_MS);
        let mut recorder = Recorder::default();

        gesture.on_pointer_event(&event(PointerEventKind::Down, 0.0, 0.0, 0), &mut recorder);
        gesture.on_pointer_event(&event(PointerEventKind::Move, 3.0, 0.0, 16), &mut recorder);
        gesture.on_pointer_event(&event(PointerEventKind::Up, 3.0, 0.0, 32), &mut recorder);

        assert!(recorder.taps.is_empty());
    }

    #[test]
    fn long_hold_reports_long_press_instead_of_tap() {
        let mut gesture = TapGesture::new();
        let mut recorder = Recorder::default();

        gesture.on_pointer_event(&event(PointerEventKind::Down, 10.0, 10.0, 0), &mut recorder);
        gesture.on_pointer_event(
            &event(PointerEventKind::Up, 10.0, 10.0, LONG_PRESS_TIMEOUT_MS),
            &mut recorder,
        );

        assert!(recorder.taps.is_empty());
        assert_eq!(recorder.long_presses, 1);
    }

    #[test]
    fn events_without_a_down_are_ignored() {
        let mut gesture = TapGesture::new();
        let mut recorder = Recorder::default();

        assert!(!gesture.on_pointer_event(
            &event(PointerEventKind::Move, 100.0, 10.0, 0),
            &mut recorder
        ));
        assert!(!gesture.on_pointer_event(
            &event(PointerEventKind::Up, 100.0, 10.0, 10),
            &mut recorder
        ));

        assert!(recorder.taps.is_empty());
    }

    #[test]
    fn cancel_drops_the_pending_tap() {
        let mut gesture = TapGesture::with_thresholds(4.0, 300);
        let mut recorder = Recorder::default();

        gesture.on_pointer_event(&event(PointerEventKind::Down, 0.0, 0.0, 0), &mut recorder);
        gesture.on_pointer_event(&event(PointerEventKind::Cancel, 0.0, 0.0, 5), &mut recorder);
        gesture.on_pointer_event(&event(PointerEventKind::Up, 0.0, 0.0, 10), &mut recorder);

        assert!(recorder.taps.is_empty());
    }
}
