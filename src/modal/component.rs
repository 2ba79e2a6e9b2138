//! The mounted modal component.
//!
//! A `Modal` owns two scoped resources for as long as it lives: a slot in
//! the document's mount point and one key listener for escape-to-dismiss.
//! Both are released when the modal is dropped.

use std::cell::Cell;
use std::rc::Rc;

use crate::config::DialogConfig;
use crate::error::{ModalError, Result};
use crate::listeners::{KeyEvent, KeyListener, ListenerGuard};
use crate::node::Node;
use crate::portal::{ActionHandler, Document, Portal, SlotKey, PORTAL_ID};

use super::actions::{DialogAction, DismissSource};
use super::view::{self, RenderResult};

/// Callback invoked when the modal asks to be closed.
pub type Dismiss = Rc<dyn Fn()>;

/// What the escape listener needs to know about the latest render.
#[derive(Debug, Clone, Copy, Default)]
struct EscapePolicy {
    open: bool,
    enabled: bool,
}

impl EscapePolicy {
    fn armed(&self) -> bool {
        self.open && self.enabled
    }
}

/// A modal mounted into a document.
pub struct Modal {
    document: Document,
    portal: Portal,
    escape: Rc<Cell<EscapePolicy>>,
    _key_listener: ListenerGuard,
    last: RenderResult,
}

impl Modal {
    /// Mount into the document's `"portal"` mount point.
    pub fn mount(document: &Document, dismiss: impl Fn() + 'static) -> Result<Self> {
        Self::mount_at(document, PORTAL_ID, Rc::new(dismiss))
    }

    pub fn builder() -> ModalBuilder {
        ModalBuilder::default()
    }

    fn mount_at(document: &Document, mount_id: &str, dismiss: Dismiss) -> Result<Self> {
        let on_action: ActionHandler = {
            let dismiss = dismiss.clone();
            Rc::new(move |action| perform(&dismiss, action))
        };
        // Reserve the slot first so a missing mount point leaks no listener
        let portal = document.create_portal(mount_id, on_action)?;

        let escape = Rc::new(Cell::new(EscapePolicy::default()));
        let listener: KeyListener = {
            let escape = Rc::downgrade(&escape);
            Rc::new(move |event: &KeyEvent| {
                let Some(escape) = escape.upgrade() else {
                    return;
                };
                if event.is_escape_up() && escape.get().armed() {
                    // Dismissed means closed until the next render says otherwise
                    escape.set(EscapePolicy {
                        open: false,
                        ..escape.get()
                    });
                    perform(&dismiss, DialogAction::dismiss(DismissSource::EscapeKey));
                }
            })
        };
        let key_listener = document.add_key_listener(listener);

        tracing::debug!(mount_id, slot = portal.key(), "modal mounted");

        Ok(Self {
            document: document.clone(),
            portal,
            escape,
            _key_listener: key_listener,
            last: RenderResult::Hidden,
        })
    }

    /// Render for this frame and attach the result to the mount point.
    ///
    /// An invalid `config` is rejected before the mount point is touched, so
    /// the previous frame's tree stays in place.
    pub fn render(&mut self, open: bool, config: &DialogConfig, content: Node) -> Result<&RenderResult> {
        config.validate()?;

        self.escape.set(EscapePolicy {
            open,
            enabled: config.dismiss_on_escape,
        });

        let result = view::render(open, config, content);
        match result.node() {
            Some(node) => self.portal.set(node.clone()),
            None => self.portal.clear(),
        }
        self.last = result;
        Ok(&self.last)
    }

    /// Click the node at `path` of the current tree. Returns the number of
    /// actions performed.
    pub fn click(&self, path: &[usize]) -> usize {
        self.document
            .dispatch_click(self.portal.mount_id(), self.portal.key(), path)
    }

    pub fn last_render(&self) -> &RenderResult {
        &self.last
    }

    /// Whether the latest render was told the modal is open and it has not
    /// been dismissed with escape since.
    pub fn is_open(&self) -> bool {
        self.escape.get().open
    }

    pub fn slot_key(&self) -> SlotKey {
        self.portal.key()
    }

    /// Unmount explicitly. Dropping the modal does the same.
    pub fn unmount(self) {}
}

impl Drop for Modal {
    fn drop(&mut self) {
        tracing::debug!(slot = self.portal.key(), "modal unmounted");
    }
}

fn perform(dismiss: &Dismiss, action: DialogAction) {
    match action {
        DialogAction::Dismiss { source } => {
            tracing::debug!(?source, "modal dismissed");
            dismiss();
        }
    }
}

/// Builder for mounting with a non-default mount point.
#[derive(Default)]
pub struct ModalBuilder {
    dismiss: Option<Dismiss>,
    mount_id: Option<String>,
}

impl ModalBuilder {
    pub fn dismiss(mut self, dismiss: impl Fn() + 'static) -> Self {
        self.dismiss = Some(Rc::new(dismiss));
        self
    }

    pub fn mount_point(mut self, id: impl Into<String>) -> Self {
        self.mount_id = Some(id.into());
        self
    }

    /// Mount the modal. Fails fast if no dismiss callback was supplied.
    pub fn mount(self, document: &Document) -> Result<Modal> {
        let dismiss = self.dismiss.ok_or(ModalError::MissingDismiss)?;
        let mount_id = self.mount_id.as_deref().unwrap_or(PORTAL_ID);
        Modal::mount_at(document, mount_id, dismiss)
    }
}
