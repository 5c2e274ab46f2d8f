//! Change events and the listener registry.

use crate::cart::CartLine;
use crate::ids::ProductId;
use serde::Serialize;

/// Which branch of merge-on-add an `add_item` call took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOutcome {
    /// A new line was appended.
    Inserted,
    /// An existing line's quantity was increased.
    Updated,
    /// Nothing changed: a zero quantity that would not alter the cart.
    Ignored,
}

/// A change applied to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CartEvent {
    ItemAdded { id: ProductId, quantity: u32 },
    QuantityIncreased { id: ProductId, added: u32, quantity: u32 },
    QuantityChanged { id: ProductId, quantity: u32 },
    ItemRemoved { id: ProductId },
    NoteChanged { id: ProductId },
    Cleared,
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&CartEvent, &[CartLine])>;

/// Ordered set of change listeners.
#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: Vec<(SubscriptionId, Listener)>,
}

impl Listeners {
    pub(crate) fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&CartEvent, &[CartLine]) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len_before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() < len_before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Call every listener in subscription order.
    pub(crate) fn emit(&mut self, event: &CartEvent, lines: &[CartLine]) {
        for (_, listener) in &mut self.entries {
            listener(event, lines);
        }
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_emit_in_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = Listeners::default();

        let first = Rc::clone(&log);
        listeners.subscribe(move |_, _| first.borrow_mut().push("first"));
        let second = Rc::clone(&log);
        listeners.subscribe(move |_, _| second.borrow_mut().push("second"));

        listeners.emit(&CartEvent::Cleared, &[]);
        assert_eq!(*log.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_unsubscribe() {
        let count = Rc::new(RefCell::new(0));
        let mut listeners = Listeners::default();

        let c = Rc::clone(&count);
        let id = listeners.subscribe(move |_, _| *c.borrow_mut() += 1);
        assert_eq!(listeners.len(), 1);

        assert!(listeners.unsubscribe(id));
        assert!(!listeners.unsubscribe(id));
        listeners.emit(&CartEvent::Cleared, &[]);
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_event_serialization() {
        let event = CartEvent::QuantityChanged {
            id: ProductId::new("a"),
            quantity: 5,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"type":"quantity_changed","id":"a","quantity":5}"#);
    }
}
