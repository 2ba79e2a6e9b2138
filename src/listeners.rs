//! Process-wide keyboard listeners with scoped registration.
//!
//! Registering a listener hands back a `ListenerGuard`; the listener stays
//! active exactly as long as the guard lives.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

/// Key name used for escape-to-dismiss. Matches egui's `Key::Escape.name()`.
pub const ESCAPE: &str = "Escape";

/// Whether the key went down or came back up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventKind {
    Down,
    Up,
}

/// A keyboard event delivered to listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub kind: KeyEventKind,
    pub key: String,
}

impl KeyEvent {
    pub fn down(key: impl Into<String>) -> Self {
        Self { kind: KeyEventKind::Down, key: key.into() }
    }

    pub fn up(key: impl Into<String>) -> Self {
        Self { kind: KeyEventKind::Up, key: key.into() }
    }

    pub fn is_escape_up(&self) -> bool {
        self.kind == KeyEventKind::Up && self.key == ESCAPE
    }
}

pub type KeyListener = Rc<dyn Fn(&KeyEvent)>;

/// Registry of active key listeners, keyed by registration order.
#[derive(Default)]
pub struct KeyListeners {
    next_id: u64,
    entries: BTreeMap<u64, KeyListener>,
}

impl KeyListeners {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, listener: KeyListener) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.insert(id, listener);
        id
    }

    fn remove(&mut self, id: u64) -> bool {
        self.entries.remove(&id).is_some()
    }

    fn snapshot(&self) -> Vec<KeyListener> {
        self.entries.values().cloned().collect()
    }
}

/// Register `listener` in `registry` and return the guard that owns it.
pub fn register(registry: &Rc<RefCell<KeyListeners>>, listener: KeyListener) -> ListenerGuard {
    let id = registry.borrow_mut().insert(listener);
    tracing::trace!(id, "key listener attached");
    ListenerGuard { registry: Rc::downgrade(registry), id }
}

/// Deliver `event` to every listener registered at the time of the call.
///
/// The registry is not borrowed while listeners run, so a listener may
/// attach or detach listeners (for example by unmounting a modal).
pub fn dispatch(registry: &Rc<RefCell<KeyListeners>>, event: &KeyEvent) -> usize {
    let listeners = registry.borrow().snapshot();
    for listener in &listeners {
        listener(event);
    }
    listeners.len()
}

/// Keeps one listener registered; dropping it detaches the listener.
#[must_use = "dropping the guard detaches the listener immediately"]
pub struct ListenerGuard {
    registry: Weak<RefCell<KeyListeners>>,
    id: u64,
}

impl ListenerGuard {
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            if registry.borrow_mut().remove(self.id) {
                tracing::trace!(id = self.id, "key listener detached");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_guard_detaches_on_drop() {
        let registry = Rc::new(RefCell::new(KeyListeners::default()));
        let guard = register(&registry, Rc::new(|_: &KeyEvent| {}));
        assert_eq!(registry.borrow().len(), 1);
        drop(guard);
        assert!(registry.borrow().is_empty());
    }

    #[test]
    fn test_dispatch_reaches_every_listener() {
        let registry = Rc::new(RefCell::new(KeyListeners::default()));
        let hits = Rc::new(Cell::new(0));
        let h1 = hits.clone();
        let h2 = hits.clone();
        let _a = register(&registry, Rc::new(move |_: &KeyEvent| h1.set(h1.get() + 1)));
        let _b = register(&registry, Rc::new(move |_: &KeyEvent| h2.set(h2.get() + 1)));

        assert_eq!(dispatch(&registry, &KeyEvent::up(ESCAPE)), 2);
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn test_listener_may_detach_during_dispatch() {
        let registry = Rc::new(RefCell::new(KeyListeners::default()));
        let slot: Rc<RefCell<Option<ListenerGuard>>> = Rc::new(RefCell::new(None));
        let slot_inner = slot.clone();
        let guard = register(&registry, Rc::new(move |_: &KeyEvent| {
            drop(slot_inner.borrow_mut().take());
        }));
        *slot.borrow_mut() = Some(guard);

        dispatch(&registry, &KeyEvent::up("a"));
        assert!(registry.borrow().is_empty());
    }

    #[test]
    fn test_guard_outliving_registry_is_harmless() {
        let registry = Rc::new(RefCell::new(KeyListeners::default()));
        let guard = register(&registry, Rc::new(|_: &KeyEvent| {}));
        drop(registry);
        drop(guard);
    }

    #[test]
    fn test_escape_up_detection() {
        assert!(KeyEvent::up("Escape").is_escape_up());
        assert!(!KeyEvent::down("Escape").is_escape_up());
        assert!(!KeyEvent::up("Enter").is_escape_up());
    }
}
