//! Dialog action types - rendered nodes carry actions instead of callbacks.
//!
//! A click or key event resolves to a `DialogAction`; the owning `Modal`
//! turns it into a call of the caller's dismiss callback.

/// What triggered a dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissSource {
    Overlay,
    CloseIcon,
    FooterButton,
    EscapeKey,
}

/// Actions a rendered modal can ask its owner to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    Dismiss { source: DismissSource },
}

impl DialogAction {
    pub fn dismiss(source: DismissSource) -> Self {
        Self::Dismiss { source }
    }
}
