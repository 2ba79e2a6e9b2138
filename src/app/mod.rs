//! Demo application showing each modal configuration
//!
//! - `core`: DemoApp struct and initialization
//! - `update`: Main update loop
//! - `dialogs`: Per-frame modal rendering

pub mod core;
pub mod dialogs;
pub mod update;

pub use self::core::{DemoApp, DemoModal};
