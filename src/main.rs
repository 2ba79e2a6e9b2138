//! portal-modal demo - one button per modal configuration.

use eframe::egui;

use portal_modal::app::DemoApp;
use portal_modal::config::{load_settings, DEFAULT_LOG_LEVEL};
use portal_modal::logging::init_logging;

fn main() -> eframe::Result<()> {
    let level = load_settings()
        .ok()
        .flatten()
        .map(|settings| settings.log_level)
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
    init_logging(&level);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("portal-modal demo")
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "portal-modal demo",
        options,
        Box::new(|cc| Ok(Box::new(DemoApp::new(cc)?))),
    )
}
