//! Dialog rendering orchestration

use eframe::egui;

use super::DemoApp;
use crate::config::DialogConfig;
use crate::node::{Node, Tag};
use crate::visibility::use_modal;

impl DemoApp {
    /// Render every demo modal for this frame
    pub(super) fn render_dialogs(&mut self, ctx: &egui::Context) {
        let suffix = self.style_suffix();

        for demo in &mut self.modals {
            let (open, _) = use_modal(ctx, demo.id, false);
            let mut config = demo.config.clone();
            config.style_suffix = suffix.clone();
            let content = demo.content();
            if let Err(e) = demo.modal.render(open, &config, content) {
                tracing::warn!(id = demo.id, "Failed to render modal: {}", e);
            }
        }

        // Never opened; the spinner flag alone decides whether it shows
        let mut spinner_config = DialogConfig::new().show_spinner(self.spinner_until.is_some());
        spinner_config.style_suffix = suffix;
        if let Err(e) = self
            .spinner_modal
            .render(false, &spinner_config, Node::new(Tag::Div))
        {
            tracing::warn!("Failed to render spinner: {}", e);
        }
    }
}
