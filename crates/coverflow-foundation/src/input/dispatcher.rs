//! Pointer input dispatcher plumbing.
//!
//! Platform integrations enqueue raw pointer events as they arrive and drain
//! them into the container once per frame, in arrival order.

use super::types::{PointerEvent, PointerId};
use smallvec::SmallVec;

#[derive(Default)]
pub struct PointerDispatcher {
    queue: SmallVec<[(PointerId, PointerEvent); 8]>,
}

impl PointerDispatcher {
    pub fn new() -> Self {
        Self {
            queue: SmallVec::new(),
        }
    }

    pub fn push(&mut self, event: PointerEvent) {
        self.queue.push((event.id, event));
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn drain<F>(&mut self, mut handler: F)
    where
        F: FnMut(PointerId, PointerEvent),
    {
        for (id, event) in self.queue.drain(..) {
            handler(id, event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::types::PointerEventKind;
    use coverflow_ui_graphics::Point;

    #[test]
    fn drains_in_arrival_order() {
        let mut dispatcher = PointerDispatcher::new();
        dispatcher.push(PointerEvent::new(
            PointerEventKind::Down,
            Point::ZERO,
            Point::ZERO,
        ));
        dispatcher.push(PointerEvent::new(
            PointerEventKind::Up,
            Point::ZERO,
            Point::ZERO,
        ));
        assert_eq!(dispatcher.len(), 2);

        let mut kinds = Vec::new();
        dispatcher.drain(|_, event| kinds.push(event.kind));

        assert_eq!(kinds, vec![PointerEventKind::Down, PointerEventKind::Up]);
        assert!(dispatcher.is_empty());
    }
}
