//! egui rendering for mounted modals.
//!
//! - `host`: owns the document, forwards keyboard input, paints the portal
//! - `painter`: turns a node tree into egui areas, frames and widgets
//! - `theme`: class-name stylesheets

pub mod host;
pub mod painter;
pub mod theme;

pub use host::{key_events, EguiHost};
pub use theme::{ClassStyle, ResolvedStyle, Stylesheet};
