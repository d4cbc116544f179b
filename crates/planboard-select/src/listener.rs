//! Outside-click listener registration.
//!
//! A select control listens for pointer presses outside its bounds only
//! while it is open. The host's event source implements
//! [`PointerListeners`]; the control holds a [`ListenerGuard`] for as long
//! as it is open, and dropping the guard (on close or when the control is
//! dropped) detaches the listener.
//!
//! [`ListenerRegistry`] is an in-memory implementation that keeps track of
//! live listeners, for hosts that dispatch events themselves and for tests
//! that check nothing leaks.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use tracing::trace;

/// Handle identifying one attached listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Raw id, for logging.
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Abstraction over the host's outside-pointer event source.
pub trait PointerListeners {
    /// Starts delivering outside-pointer events; returns the listener's id.
    fn attach(&self) -> ListenerId;

    /// Stops delivering events to `id`.
    fn detach(&self, id: ListenerId);
}

/// Scoped listener registration: attached on creation, detached on drop.
pub struct ListenerGuard {
    registry: Rc<dyn PointerListeners>,
    id: ListenerId,
}

impl ListenerGuard {
    /// Attaches a listener to `registry`.
    pub fn attach(registry: Rc<dyn PointerListeners>) -> Self {
        let id = registry.attach();
        trace!(listener = id.get(), "outside-click listener attached");
        Self { registry, id }
    }

    /// The attached listener's id.
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.registry.detach(self.id);
        trace!(listener = self.id.get(), "outside-click listener detached");
    }
}

impl fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGuard").field("id", &self.id).finish()
    }
}

/// In-memory listener bookkeeping.
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    next_id: Cell<u64>,
    live: RefCell<Vec<ListenerId>>,
}

impl ListenerRegistry {
    /// Creates an empty registry, ready to share with controls.
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Number of listeners currently attached.
    pub fn live_count(&self) -> usize {
        self.live.borrow().len()
    }

    /// Returns `true` if `id` is attached.
    pub fn is_live(&self, id: ListenerId) -> bool {
        self.live.borrow().contains(&id)
    }

    /// Ids of all attached listeners, oldest first.
    pub fn live(&self) -> Vec<ListenerId> {
        self.live.borrow().clone()
    }
}

impl PointerListeners for ListenerRegistry {
    fn attach(&self) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.live.borrow_mut().push(id);
        id
    }

    fn detach(&self, id: ListenerId) {
        self.live.borrow_mut().retain(|live| *live != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_detaches_on_drop() {
        let registry = ListenerRegistry::new();
        let guard = ListenerGuard::attach(registry.clone());
        assert_eq!(registry.live_count(), 1);
        assert!(registry.is_live(guard.id()));

        drop(guard);
        assert_eq!(registry.live_count(), 0);
    }

    #[test]
    fn ids_are_unique() {
        let registry = ListenerRegistry::new();
        let a = ListenerGuard::attach(registry.clone());
        let b = ListenerGuard::attach(registry.clone());
        assert_ne!(a.id(), b.id());
        assert_eq!(registry.live(), vec![a.id(), b.id()]);
    }
}
