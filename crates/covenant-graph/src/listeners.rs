//! Ordered registry of breach listeners.
//!
//! A list, not a set: registering the same listener twice makes it fire
//! twice, and removal drops only the first matching registration.

use std::sync::Arc;

use covenant_core::models::BreachEvent;

/// Callback invoked synchronously for every emitted breach event.
pub type BreachListener = Arc<dyn Fn(&BreachEvent) + Send + Sync>;

#[derive(Default, Clone)]
pub struct ListenerRegistry {
    listeners: Vec<BreachListener>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, listener: BreachListener) {
        self.listeners.push(listener);
    }

    /// Remove the first registration sharing `listener`'s allocation.
    /// Returns false when none matched.
    pub fn remove(&mut self, listener: &BreachListener) -> bool {
        let target = Arc::as_ptr(listener) as *const ();
        match self
            .listeners
            .iter()
            .position(|l| Arc::as_ptr(l) as *const () == target)
        {
            Some(pos) => {
                self.listeners.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Call every listener, in registration order.
    pub fn notify(&self, event: &BreachEvent) {
        for listener in &self.listeners {
            listener(event);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl std::fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
