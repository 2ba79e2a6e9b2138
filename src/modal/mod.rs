//! The modal dialog component.
//!
//! # Architecture
//!
//! - `view`: pure `render(open, config, content)` producing one of
//!   `Open`, `LoadingOnly` or `Hidden`
//! - `component`: `Modal`, which mounts into a `Document`, attaches each
//!   frame's tree to the `"portal"` mount point and owns the escape listener
//! - `actions`: what clicks and key events resolve to
//!
//! Rendered nodes carry `DialogAction`s rather than callbacks; the mounted
//! `Modal` maps every `Dismiss` to one call of the caller's dismiss callback.

mod actions;
mod component;
mod view;

pub use actions::{DialogAction, DismissSource};
pub use component::{Dismiss, Modal, ModalBuilder};
pub use view::{render, DialogView, RenderResult, FOOTER_BUTTON_LABEL};
