//! Main update loop

use std::time::{Duration, Instant};

use eframe::egui;

use super::DemoApp;

/// How long the loading placeholder stays up
const SPINNER_DURATION: Duration = Duration::from_secs(2);

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Key releases first, so escape acts on what was visible last frame
        self.host.forward_input(ctx);

        if let Some(until) = self.spinner_until {
            if Instant::now() >= until {
                self.spinner_until = None;
            } else {
                ctx.request_repaint_after(until.saturating_duration_since(Instant::now()));
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("portal-modal demo");
            ui.separator();
            ui.add_space(8.0);

            for demo in &self.modals {
                if ui.button(demo.button_label).clicked() {
                    demo.toggle.toggle();
                }
                ui.add_space(4.0);
            }

            ui.separator();
            if ui.button("Loading (spinner)").clicked() {
                self.spinner_until = Some(Instant::now() + SPINNER_DURATION);
                ctx.request_repaint_after(SPINNER_DURATION);
            }

            let theme_label = format!("Theme: {}", self.settings.theme);
            if ui.button(theme_label).clicked() {
                self.toggle_theme(ctx);
            }
        });

        self.render_dialogs(ctx);
        self.host.show(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.persist_settings();
    }
}
