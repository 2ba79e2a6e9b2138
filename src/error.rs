//! Error types for mounting, rendering and settings I/O.

use thiserror::Error;

/// Errors raised by the modal widget and its settings layer.
#[derive(Error, Debug)]
pub enum ModalError {
    /// A modal was mounted without a dismiss callback
    #[error("Modal mounted without a dismiss callback")]
    MissingDismiss,

    /// The document has no mount point with this id
    #[error("Mount point not found: {0}")]
    MissingMountPoint(String),

    /// The document already has a mount point with this id
    #[error("Mount point already exists: {0}")]
    DuplicateMountPoint(String),

    /// The style suffix would not produce a usable class name
    #[error("Invalid style suffix '{suffix}': {reason}")]
    InvalidStyleSuffix { suffix: String, reason: String },

    /// No platform config directory could be determined
    #[error("Failed to determine config directory")]
    NoConfigDir,

    /// Reading or writing the settings file failed
    #[error("Settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file is not valid JSON for `Settings`
    #[error("Malformed settings: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ModalError>;
