//! Core DemoApp struct definition and initialization

use std::time::Instant;

use eframe::egui;

use crate::config::{load_settings, save_settings, DialogConfig, Settings};
use crate::error::Result;
use crate::modal::Modal;
use crate::node::{Node, Tag};
use crate::ui::{EguiHost, Stylesheet};
use crate::visibility::{use_modal, Toggle};

/// One demo modal: what it shows, how it is configured, and its mounted state.
pub struct DemoModal {
    pub id: &'static str,
    pub button_label: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub config: DialogConfig,
    pub toggle: Toggle,
    pub modal: Modal,
}

impl DemoModal {
    pub fn content(&self) -> Node {
        Node::new(Tag::Div)
            .with_child(Node::new(Tag::H1).with_text(self.title))
            .with_child(Node::new(Tag::P).with_text(self.body))
    }
}

pub struct DemoApp {
    pub host: EguiHost,
    pub settings: Settings,
    pub modals: Vec<DemoModal>,

    // Loading placeholder shown for a short while after a click
    pub spinner_modal: Modal,
    pub spinner_until: Option<Instant>,
}

struct DemoSpec {
    id: &'static str,
    button_label: &'static str,
    title: &'static str,
    body: &'static str,
    config: DialogConfig,
}

fn demo_specs() -> Vec<DemoSpec> {
    vec![
        DemoSpec {
            id: "classic",
            button_label: "Modal (classic Modal)",
            title: "Hello, Modal 1",
            body: "bla bla bla 1",
            config: DialogConfig::new().show_close_icon(true),
        },
        DemoSpec {
            id: "close_escape",
            button_label: "Modal (with closeEscape)",
            title: "Hello, Modal 2",
            body: "bla bla bla 2",
            config: DialogConfig::new().show_close_icon(true).dismiss_on_escape(true),
        },
        DemoSpec {
            id: "close_overlay",
            button_label: "Modal (with closeOverlay)",
            title: "Hello, Modal 3",
            body: "bla bla bla 3",
            config: DialogConfig::new().show_close_icon(true).dismiss_on_overlay(true),
        },
        DemoSpec {
            id: "button_footer",
            button_label: "Modal (with buttonFooter)",
            title: "Hello, Modal 4",
            body: "bla bla bla 4",
            config: DialogConfig::new()
                .show_close_icon(false)
                .dismiss_on_overlay(true)
                .show_footer_button(true),
        },
    ]
}

impl DemoApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self> {
        let settings = match load_settings() {
            Ok(Some(settings)) => settings,
            Ok(None) => Settings::default(),
            Err(e) => {
                tracing::warn!("Failed to load settings, using defaults: {}", e);
                Settings::default()
            }
        };

        match settings.theme.as_str() {
            "light" => cc.egui_ctx.set_visuals(egui::Visuals::light()),
            _ => cc.egui_ctx.set_visuals(egui::Visuals::dark()),
        }

        let stylesheet = settings.stylesheet.clone().unwrap_or_default();
        Self::with_settings(&cc.egui_ctx, settings, stylesheet)
    }

    /// Build the app against an existing context.
    pub fn with_settings(
        ctx: &egui::Context,
        settings: Settings,
        stylesheet: Stylesheet,
    ) -> Result<Self> {
        let host = EguiHost::new(stylesheet);

        let mut modals = Vec::new();
        for spec in demo_specs() {
            let (_, toggle) = use_modal(ctx, spec.id, false);
            let modal = Modal::mount(host.document(), toggle.as_dismiss())?;
            modals.push(DemoModal {
                id: spec.id,
                button_label: spec.button_label,
                title: spec.title,
                body: spec.body,
                config: spec.config,
                toggle,
                modal,
            });
        }

        // Nothing in the spinner can dismiss; it times out instead
        let spinner_modal = Modal::mount(host.document(), || {
            tracing::debug!("spinner dismissed");
        })?;

        Ok(Self {
            host,
            settings,
            modals,
            spinner_modal,
            spinner_until: None,
        })
    }

    /// Style suffix applied to every demo modal.
    pub fn style_suffix(&self) -> Option<String> {
        self.settings
            .dialog
            .style_suffix
            .clone()
            .or_else(|| (self.settings.theme == "dark").then(|| "dark".to_string()))
    }

    pub(super) fn toggle_theme(&mut self, ctx: &egui::Context) {
        if self.settings.theme == "dark" {
            self.settings.theme = "light".to_string();
            ctx.set_visuals(egui::Visuals::light());
        } else {
            self.settings.theme = "dark".to_string();
            ctx.set_visuals(egui::Visuals::dark());
        }
    }

    /// Persist settings; called when the window closes.
    pub(super) fn persist_settings(&self) {
        if let Err(e) = save_settings(&self.settings) {
            tracing::warn!("Failed to save settings: {}", e);
        }
    }
}
