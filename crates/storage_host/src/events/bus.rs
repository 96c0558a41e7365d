//! Synchronous in-process listener registry for [`StorageChangeEvent`]s.

use std::{cell::RefCell, fmt, rc::Rc};

use super::StorageChangeEvent;

type Listener = Rc<dyn Fn(&StorageChangeEvent)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Handle returned by [`ChangeBus::subscribe`], used to unsubscribe.
pub struct ListenerId(u64);

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(ListenerId, Listener)>,
}

#[derive(Clone, Default)]
/// Observer list that fans change events out to every registered listener.
///
/// Clones share one registry. Dispatch is synchronous and follows registration order; listener
/// panics are not caught.
pub struct ChangeBus {
    inner: Rc<RefCell<Registry>>,
}

impl fmt::Debug for ChangeBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeBus")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl ChangeBus {
    /// Registers `listener` and returns its handle.
    pub fn subscribe(&self, listener: impl Fn(&StorageChangeEvent) + 'static) -> ListenerId {
        let mut registry = self.inner.borrow_mut();
        let id = ListenerId(registry.next_id);
        registry.next_id += 1;
        registry.listeners.push((id, Rc::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` when `id` is not registered.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut registry = self.inner.borrow_mut();
        let before = registry.listeners.len();
        registry.listeners.retain(|(existing, _)| *existing != id);
        registry.listeners.len() != before
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Delivers `event` to every listener registered when dispatch starts.
    ///
    /// Listeners may subscribe or unsubscribe during dispatch; those changes apply to the next
    /// event.
    pub fn notify(&self, event: &StorageChangeEvent) {
        let snapshot: Vec<Listener> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in snapshot {
            listener(event);
        }
    }
}
