//! A modal dialog widget for egui, with a loading spinner.
//!
//! The widget is split into a framework-free core and an egui layer:
//!
//! - `modal`: pure rendering (`render`) and the mounted `Modal` component
//! - `visibility`: the open/closed flag and the `use_modal` hook
//! - `spinner`: the stateless loading placeholder
//! - `node`, `classes`: the rendered tree and its class-name contract
//! - `portal`, `listeners`: the host document, its mount points and the
//!   scoped global key listeners
//! - `ui`: painting mounted trees and forwarding input with egui
//!
//! ```no_run
//! use portal_modal::{DialogConfig, Modal, Node, Tag, EguiHost, use_modal};
//!
//! # fn frame(ctx: &eframe::egui::Context) -> portal_modal::Result<()> {
//! let host = EguiHost::default();
//! let (_, toggle) = use_modal(ctx, "greeting", false);
//! let mut modal = Modal::mount(host.document(), toggle.as_dismiss())?;
//!
//! // every frame
//! host.forward_input(ctx);
//! let (open, _) = use_modal(ctx, "greeting", false);
//! let config = DialogConfig::new().dismiss_on_escape(true).style_suffix("dark");
//! modal.render(open, &config, Node::new(Tag::P).with_text("Hello"))?;
//! host.show(ctx);
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod classes;
pub mod config;
pub mod error;
pub mod listeners;
pub mod logging;
pub mod modal;
pub mod node;
pub mod portal;
pub mod spinner;
pub mod ui;
pub mod validation;
pub mod visibility;

#[cfg(test)]
mod integration_tests;

pub use classes::ClassName;
pub use config::DialogConfig;
pub use error::{ModalError, Result};
pub use listeners::{KeyEvent, ListenerGuard};
pub use modal::{render, DialogAction, DialogView, DismissSource, Modal, ModalBuilder, RenderResult};
pub use node::{Node, NodePath, Tag};
pub use portal::{Document, Portal, PORTAL_ID};
pub use ui::{EguiHost, Stylesheet};
pub use visibility::{use_modal, DialogVisibility, Toggle};
