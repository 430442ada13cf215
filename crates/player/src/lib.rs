//! Character sheet player.
//!
//! A Dioxus form bound to the sheet domain, with platform adapters for the
//! browser (wasm) and the desktop webview selected at compile time.

pub mod application;
pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod state;
pub mod ui;

pub use ui::presentation;

// Re-export commonly used entrypoints
pub use ui::app;
pub use ui::{use_platform, Platform, ShellKind};
