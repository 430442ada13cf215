//! Platform-specific implementations
//!
//! This module provides platform-specific implementations of the
//! provider traits defined in ports/outbound/platform.rs.
//!
//! The correct platform is selected at compile time based on the target architecture.

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
mod desktop;

#[cfg(target_arch = "wasm32")]
pub use wasm::{create_platform, WasmDocumentProvider, WasmLocaleProvider};

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::{
    create_platform, separators_for_locale, DesktopDocumentProvider, DesktopLocaleProvider,
};
