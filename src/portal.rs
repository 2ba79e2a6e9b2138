//! The host document: named mount points and the global key listeners.
//!
//! Modals do not render where they are declared. They attach their tree to
//! a slot in a well-known mount point (`"portal"`) which the host paints in
//! its own layer, above the regular content.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use crate::error::{ModalError, Result};
use crate::listeners::{self, KeyEvent, KeyListener, KeyListeners, ListenerGuard};
use crate::modal::DialogAction;
use crate::node::{self, Node};

/// Id of the mount point modals render into.
pub const PORTAL_ID: &str = "portal";

/// Identifies one slot inside a mount point.
pub type SlotKey = u64;

pub type ActionHandler = Rc<dyn Fn(DialogAction)>;

struct Slot {
    node: Option<Node>,
    on_action: ActionHandler,
}

#[derive(Default)]
struct MountPoint {
    slots: BTreeMap<SlotKey, Slot>,
}

#[derive(Default)]
struct MountPoints {
    next_key: SlotKey,
    points: BTreeMap<String, MountPoint>,
}

/// Shared handle to the host document. Cloning is cheap.
#[derive(Clone, Default)]
pub struct Document {
    mounts: Rc<RefCell<MountPoints>>,
    listeners: Rc<RefCell<KeyListeners>>,
}

impl Document {
    /// A document without any mount point.
    pub fn new() -> Self {
        Self::default()
    }

    /// A document with the standard `"portal"` mount point.
    pub fn with_portal() -> Self {
        let document = Self::new();
        document
            .mounts
            .borrow_mut()
            .points
            .insert(PORTAL_ID.to_string(), MountPoint::default());
        document
    }

    /// Add a mount point. Ids are unique within a document.
    pub fn add_mount_point(&self, id: &str) -> Result<()> {
        let mut mounts = self.mounts.borrow_mut();
        if mounts.points.contains_key(id) {
            return Err(ModalError::DuplicateMountPoint(id.to_string()));
        }
        mounts.points.insert(id.to_string(), MountPoint::default());
        Ok(())
    }

    pub fn has_mount_point(&self, id: &str) -> bool {
        self.mounts.borrow().points.contains_key(id)
    }

    /// Reserve a slot in mount point `id`.
    pub fn create_portal(&self, id: &str, on_action: ActionHandler) -> Result<Portal> {
        let mut mounts = self.mounts.borrow_mut();
        let key = mounts.next_key;
        let point = mounts
            .points
            .get_mut(id)
            .ok_or_else(|| ModalError::MissingMountPoint(id.to_string()))?;
        point.slots.insert(key, Slot { node: None, on_action });
        mounts.next_key += 1;

        Ok(Portal {
            mounts: Rc::downgrade(&self.mounts),
            mount_id: id.to_string(),
            key,
        })
    }

    /// Trees currently attached to mount point `id`, in slot order.
    pub fn mounted(&self, id: &str) -> Vec<(SlotKey, Node)> {
        self.mounts
            .borrow()
            .points
            .get(id)
            .map(|point| {
                point
                    .slots
                    .iter()
                    .filter_map(|(key, slot)| slot.node.clone().map(|node| (*key, node)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of trees attached to mount point `id`.
    pub fn mounted_count(&self, id: &str) -> usize {
        self.mounts
            .borrow()
            .points
            .get(id)
            .map(|point| point.slots.values().filter(|slot| slot.node.is_some()).count())
            .unwrap_or(0)
    }

    /// Resolve a click on the node at `path` in slot `key` of mount point `id`
    /// and hand the resulting actions to the slot's owner.
    pub fn dispatch_click(&self, id: &str, key: SlotKey, path: &[usize]) -> usize {
        // Resolve under the borrow, run handlers after releasing it
        let resolved = {
            let mounts = self.mounts.borrow();
            mounts
                .points
                .get(id)
                .and_then(|point| point.slots.get(&key))
                .and_then(|slot| {
                    slot.node
                        .as_ref()
                        .map(|root| (node::dispatch_click(root, path), slot.on_action.clone()))
                })
        };

        match resolved {
            Some((actions, on_action)) => {
                let count = actions.len();
                for action in actions {
                    on_action(action);
                }
                count
            }
            None => 0,
        }
    }

    pub fn add_key_listener(&self, listener: KeyListener) -> ListenerGuard {
        listeners::register(&self.listeners, listener)
    }

    pub fn key_listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn dispatch_key(&self, event: &KeyEvent) -> usize {
        listeners::dispatch(&self.listeners, event)
    }
}

/// One reserved slot in a mount point. Dropping it removes the slot.
pub struct Portal {
    mounts: Weak<RefCell<MountPoints>>,
    mount_id: String,
    key: SlotKey,
}

impl Portal {
    pub fn key(&self) -> SlotKey {
        self.key
    }

    pub fn mount_id(&self) -> &str {
        &self.mount_id
    }

    /// Attach `node`, replacing whatever this slot held.
    pub fn set(&self, node: Node) {
        self.with_slot(|slot| slot.node = Some(node));
    }

    /// Detach the slot's tree, keeping the slot reserved.
    pub fn clear(&self) {
        self.with_slot(|slot| slot.node = None);
    }

    pub fn is_attached(&self) -> bool {
        let Some(mounts) = self.mounts.upgrade() else {
            return false;
        };
        let mounts = mounts.borrow();
        mounts
            .points
            .get(&self.mount_id)
            .and_then(|point| point.slots.get(&self.key))
            .map(|slot| slot.node.is_some())
            .unwrap_or(false)
    }

    fn with_slot(&self, f: impl FnOnce(&mut Slot)) {
        if let Some(mounts) = self.mounts.upgrade() {
            let mut mounts = mounts.borrow_mut();
            if let Some(slot) = mounts
                .points
                .get_mut(&self.mount_id)
                .and_then(|point| point.slots.get_mut(&self.key))
            {
                f(slot);
            }
        }
    }
}

impl Drop for Portal {
    fn drop(&mut self) {
        if let Some(mounts) = self.mounts.upgrade() {
            let removed = mounts
                .borrow_mut()
                .points
                .get_mut(&self.mount_id)
                .and_then(|point| point.slots.remove(&self.key));
            drop(removed);
        }
    }
}
