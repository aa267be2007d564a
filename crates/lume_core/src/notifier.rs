//! Synchronous change notification
//!
//! A [`Notifier`] is owned by whatever holds the state being observed. Owners
//! call [`Notifier::notify`] after every mutation with the fully-updated value;
//! listeners run immediately, in the order they subscribed.
//!
//! Nothing is global: consumers receive the owner by reference and subscribe
//! explicitly, and keep the returned [`ListenerId`] to unsubscribe.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    pub struct ListenerId;
}

type Listener<T> = Box<dyn FnMut(&T)>;

/// Registry of listeners for values of type `T`
pub struct Notifier<T> {
    listeners: SlotMap<ListenerId, Listener<T>>,
    /// Subscription order (slot order is not stable once keys are reused)
    order: Vec<ListenerId>,
    /// Number of notifications emitted so far
    revision: u64,
}

impl<T> Notifier<T> {
    pub fn new() -> Self {
        Self {
            listeners: SlotMap::with_key(),
            order: Vec::new(),
            revision: 0,
        }
    }

    /// Register a listener, returning its id
    pub fn subscribe(&mut self, listener: impl FnMut(&T) + 'static) -> ListenerId {
        let id = self.listeners.insert(Box::new(listener));
        self.order.push(id);
        tracing::trace!(listeners = self.order.len(), "Notifier::subscribe");
        id
    }

    /// Remove a listener. Returns false if the id was unknown.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        if self.listeners.remove(id).is_none() {
            return false;
        }
        self.order.retain(|existing| *existing != id);
        true
    }

    /// Deliver `value` to every listener and bump the revision
    pub fn notify(&mut self, value: &T) {
        self.revision += 1;
        for id in &self.order {
            if let Some(listener) = self.listeners.get_mut(*id) {
                listener(value);
            }
        }
    }

    /// Number of notifications emitted since creation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn listener_count(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Drop every listener. The revision is preserved.
    pub fn clear(&mut self) {
        self.listeners.clear();
        self.order.clear();
    }
}

impl<T> Default for Notifier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Notifier<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("listeners", &self.order.len())
            .field("revision", &self.revision)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn listeners_run_in_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut notifier = Notifier::new();

        for name in ["a", "b", "c"] {
            let log = log.clone();
            notifier.subscribe(move |v: &i32| log.borrow_mut().push(format!("{name}{v}")));
        }

        notifier.notify(&1);
        assert_eq!(*log.borrow(), vec!["a1", "b1", "c1"]);
    }

    #[test]
    fn unsubscribe_keeps_order_after_slot_reuse() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut notifier = Notifier::new();

        let push = |tag: &'static str| {
            let log = log.clone();
            move |_: &()| log.borrow_mut().push(tag)
        };

        let first = notifier.subscribe(push("first"));
        notifier.subscribe(push("second"));
        assert!(notifier.unsubscribe(first));
        assert!(!notifier.unsubscribe(first));

        // Reuses the freed slot but must still run last
        notifier.subscribe(push("third"));
        notifier.notify(&());

        assert_eq!(*log.borrow(), vec!["second", "third"]);
        assert_eq!(notifier.listener_count(), 2);
    }

    #[test]
    fn revision_counts_every_notify() {
        let mut notifier: Notifier<u8> = Notifier::default();
        assert_eq!(notifier.revision(), 0);
        notifier.notify(&0);
        notifier.notify(&0);
        assert_eq!(notifier.revision(), 2);

        notifier.clear();
        assert!(notifier.is_empty());
        assert_eq!(notifier.revision(), 2);
    }
}
