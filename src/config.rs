//! Dialog configuration and persisted demo settings.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::error::{ModalError, Result};
use crate::ui::theme::Stylesheet;
use crate::validation::validate_style_suffix;

// Default configuration
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_THEME: &str = "dark";

/// Per-render options for a modal.
///
/// Every flag is independent. Read-only during a render; callers build a
/// fresh value (or reuse one) each frame.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct DialogConfig {
    /// Escape key-up closes the modal
    pub dismiss_on_escape: bool,
    /// Clicking the backdrop closes the modal
    pub dismiss_on_overlay: bool,
    /// Show the close icon in the header
    pub show_close_icon: bool,
    /// Show the "Close Modal" button in the footer
    pub show_footer_button: bool,
    /// While closed, render the loading spinner instead of nothing
    pub show_spinner: bool,
    /// Appended to every class name as `<base>-<suffix>`
    pub style_suffix: Option<String>,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            dismiss_on_escape: false,
            dismiss_on_overlay: false,
            show_close_icon: true,
            show_footer_button: false,
            show_spinner: false,
            style_suffix: None,
        }
    }
}

impl DialogConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dismiss_on_escape(mut self, enabled: bool) -> Self {
        self.dismiss_on_escape = enabled;
        self
    }

    pub fn dismiss_on_overlay(mut self, enabled: bool) -> Self {
        self.dismiss_on_overlay = enabled;
        self
    }

    pub fn show_close_icon(mut self, enabled: bool) -> Self {
        self.show_close_icon = enabled;
        self
    }

    pub fn show_footer_button(mut self, enabled: bool) -> Self {
        self.show_footer_button = enabled;
        self
    }

    pub fn show_spinner(mut self, enabled: bool) -> Self {
        self.show_spinner = enabled;
        self
    }

    pub fn style_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.style_suffix = Some(suffix.into());
        self
    }

    pub fn suffix(&self) -> Option<&str> {
        self.style_suffix.as_deref()
    }

    /// Check the options that can be invalid.
    pub fn validate(&self) -> Result<()> {
        if let Some(suffix) = self.suffix() {
            validate_style_suffix(suffix)?;
        }
        Ok(())
    }
}

/// Settings for the demo application.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Settings {
    pub log_level: String,
    pub theme: String,
    pub dialog: DialogConfig,
    /// Replaces the built-in stylesheet when present
    pub stylesheet: Option<Stylesheet>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            theme: DEFAULT_THEME.to_string(),
            dialog: DialogConfig::default(),
            stylesheet: None,
        }
    }
}

pub fn settings_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from("com", "portal-modal", "portal-modal")
        .ok_or(ModalError::NoConfigDir)?;
    let dir = proj.config_dir();
    fs::create_dir_all(dir)?;
    Ok(dir.join("settings.json"))
}

/// Load settings from the platform config dir. A missing file is not an error.
pub fn load_settings() -> Result<Option<Settings>> {
    let path = settings_path()?;
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&path)?;
    parse_settings(&content).map(Some)
}

pub fn parse_settings(content: &str) -> Result<Settings> {
    let settings: Settings = serde_json::from_str(content)?;
    settings.dialog.validate()?;
    Ok(settings)
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    let path = settings_path()?;
    let mut file = fs::File::create(&path)?;
    let data = serde_json::to_string_pretty(settings)?;
    file.write_all(data.as_bytes())?;
    tracing::debug!(path = %path.display(), "settings saved");
    Ok(())
}
