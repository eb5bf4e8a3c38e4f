//! Shared event queues with scoped registration.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use crate::event::WindowEvent;

type Queues = RefCell<HashMap<u64, Rc<RefCell<Vec<WindowEvent>>>>>;

/// A fan-out point between the host event loop and any number of
/// components.
///
/// The host pushes each translated event once; every live
/// [`Subscription`] receives a copy and drains its queue on its own
/// schedule (typically once per frame). Registration is scoped:
/// dropping a subscription removes its queue, so a component that is
/// torn down early stops receiving events without any explicit
/// deregistration call.
pub struct EventHub {
    queues: Rc<Queues>,
    next_id: u64,
}

impl Default for EventHub {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHub {
    /// Creates a hub with no subscribers.
    pub fn new() -> EventHub {
        EventHub {
            queues: Rc::new(RefCell::new(HashMap::new())),
            next_id: 0,
        }
    }

    /// Registers a new subscriber.
    pub fn subscribe(&mut self) -> Subscription {
        let id = self.next_id;
        self.next_id += 1;

        let queue = Rc::new(RefCell::new(Vec::new()));
        self.queues.borrow_mut().insert(id, queue.clone());
        log::debug!("event subscription {} registered", id);

        Subscription {
            id,
            queue,
            queues: Rc::downgrade(&self.queues),
        }
    }

    /// Pushes one event to every live subscriber.
    pub fn push(&self, event: WindowEvent) {
        for queue in self.queues.borrow().values() {
            queue.borrow_mut().push(event);
        }
    }

    /// The number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.queues.borrow().len()
    }
}

/// A scoped registration on an [`EventHub`].
///
/// Dropping the subscription deregisters it. The guard outliving the
/// hub is fine; the queue simply stops being fed.
pub struct Subscription {
    id: u64,
    queue: Rc<RefCell<Vec<WindowEvent>>>,
    queues: Weak<Queues>,
}

impl Subscription {
    /// Takes every event received since the last drain, in arrival
    /// order.
    pub fn drain(&self) -> Vec<WindowEvent> {
        std::mem::take(&mut *self.queue.borrow_mut())
    }

    /// The number of queued, undrained events.
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(queues) = self.queues.upgrade() {
            queues.borrow_mut().remove(&self.id);
            log::debug!("event subscription {} released", self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Action, Key, Modifiers};

    fn key_press(key: Key) -> WindowEvent {
        WindowEvent::Key(key, Action::Press, Modifiers::empty())
    }

    #[test]
    fn events_fan_out_to_all_subscribers() {
        let mut hub = EventHub::new();
        let a = hub.subscribe();
        let b = hub.subscribe();

        hub.push(key_press(Key::Left));

        assert_eq!(a.drain(), vec![key_press(Key::Left)]);
        assert_eq!(b.drain(), vec![key_press(Key::Left)]);
        assert_eq!(a.pending(), 0);
    }

    #[test]
    fn drop_deregisters() {
        let mut hub = EventHub::new();
        let a = hub.subscribe();
        assert_eq!(hub.subscriber_count(), 1);

        drop(a);
        assert_eq!(hub.subscriber_count(), 0);

        // Pushing to an empty hub is a no-op.
        hub.push(key_press(Key::Right));
    }

    #[test]
    fn subscription_survives_hub_teardown() {
        let mut hub = EventHub::new();
        let a = hub.subscribe();
        hub.push(key_press(Key::Left));
        drop(hub);

        // Queued events remain readable; dropping the guard afterwards
        // must not panic.
        assert_eq!(a.drain().len(), 1);
    }

    #[test]
    fn drain_preserves_order() {
        let mut hub = EventHub::new();
        let a = hub.subscribe();

        hub.push(key_press(Key::Left));
        hub.push(key_press(Key::Right));

        let drained = a.drain();
        assert_eq!(drained[0], key_press(Key::Left));
        assert_eq!(drained[1], key_press(Key::Right));
    }
}
