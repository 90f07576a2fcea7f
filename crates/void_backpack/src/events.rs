//! Inventory change notification
//!
//! Observers register a zero-argument callback. Every successful mutation
//! fans out synchronously to all observers, in registration order, before the
//! mutating call returns.

use std::fmt;

/// Change listener
pub type InventoryListener = Box<dyn Fn() + Send + Sync>;

/// Subscriber ID
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriberId(pub u64);

/// Registered change observers
pub struct InventoryObservers {
    listeners: Vec<(SubscriberId, InventoryListener)>,
    next_subscriber_id: u64,
}

impl InventoryObservers {
    /// Create an empty observer list
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
            next_subscriber_id: 1,
        }
    }

    /// Register a listener
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriberId
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = SubscriberId(self.next_subscriber_id);
        self.next_subscriber_id += 1;

        let listener: InventoryListener = Box::new(listener);
        self.listeners.push((id, listener));
        id
    }

    /// Remove a listener, returns false if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub_id, _)| *sub_id != id);
        self.listeners.len() != before
    }

    /// Invoke every listener once
    pub fn notify(&self) {
        for (_, listener) in &self.listeners {
            listener();
        }
    }

    /// Number of registered listeners
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Check if no listener is registered
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl Default for InventoryObservers {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InventoryObservers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InventoryObservers")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
