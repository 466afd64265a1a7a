//! Pointer-down fan-out with scoped subscriptions.
//!
//! The UI shell reports every pointer press once per frame. Widgets that need
//! to react to presses anywhere on screen (outside-click dismissal) subscribe
//! while mounted; dropping the returned [`Subscription`] removes the handler.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned screen region, bounds inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub min: Point,
    pub max: Point,
}

impl Region {
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

type Handler = Rc<RefCell<dyn FnMut(Point)>>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    handlers: Vec<(u64, Handler)>,
}

/// Source of pointer-down events, owned by the application root.
#[derive(Clone, Default)]
pub struct PointerEvents {
    inner: Rc<RefCell<Listeners>>,
}

impl PointerEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: FnMut(Point) + 'static,
    {
        let mut listeners = self.inner.borrow_mut();
        let id = listeners.next_id;
        listeners.next_id += 1;
        let handler: Handler = Rc::new(RefCell::new(handler));
        listeners.handlers.push((id, handler));
        log::debug!("Pointer subscription {} installed", id);

        Subscription {
            id,
            listeners: Rc::downgrade(&self.inner),
        }
    }

    /// Delivers a press to every live subscriber.
    pub fn pointer_down(&self, at: Point) {
        // Snapshot first so handlers may subscribe or unsubscribe.
        let handlers: Vec<Handler> = self
            .inner
            .borrow()
            .handlers
            .iter()
            .map(|(_, h)| h.clone())
            .collect();

        for handler in handlers {
            let mut callback = handler.borrow_mut();
            (*callback)(at);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().handlers.len()
    }
}

/// Guard for an installed handler. Dropping it unsubscribes.
#[must_use = "dropping the subscription removes the handler immediately"]
pub struct Subscription {
    id: u64,
    listeners: Weak<RefCell<Listeners>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.borrow_mut().handlers.retain(|(id, _)| *id != self.id);
            log::debug!("Pointer subscription {} removed", self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_region_contains_bounds() {
        let region = Region::new(Point::new(0.0, 0.0), Point::new(10.0, 5.0));
        assert!(region.contains(Point::new(0.0, 0.0)));
        assert!(region.contains(Point::new(10.0, 5.0)));
        assert!(!region.contains(Point::new(10.1, 5.0)));
        assert!(!region.contains(Point::new(-1.0, 2.0)));
    }

    #[test]
    fn test_dropping_subscription_removes_handler() {
        let events = PointerEvents::new();
        let hits = Rc::new(Cell::new(0));

        let counter = hits.clone();
        let subscription = events.subscribe(move |_| counter.set(counter.get() + 1));
        assert_eq!(events.listener_count(), 1);

        events.pointer_down(Point::new(1.0, 1.0));
        assert_eq!(hits.get(), 1);

        drop(subscription);
        assert_eq!(events.listener_count(), 0);

        events.pointer_down(Point::new(1.0, 1.0));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_remount_does_not_duplicate_handlers() {
        let events = PointerEvents::new();
        let hits = Rc::new(Cell::new(0));

        for _ in 0..3 {
            let counter = hits.clone();
            let _subscription = events.subscribe(move |_| counter.set(counter.get() + 1));
        }

        assert_eq!(events.listener_count(), 0);
        events.pointer_down(Point::new(0.0, 0.0));
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_subscription_outliving_source_is_harmless() {
        let events = PointerEvents::new();
        let subscription = events.subscribe(|_| {});
        drop(events);
        drop(subscription);
    }
}
