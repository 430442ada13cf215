//! Platform DI Container
//!
//! This module provides the `Platform` struct - a dependency injection container
//! that aggregates the platform-specific providers behind port traits.
//!
//! Usage:
//! - Created by `create_platform()` in infrastructure/platform/desktop.rs or wasm.rs
//! - Injected into Dioxus context by `main.rs` as `Arc<dyn PlatformPort>`
//! - Accessed in UI via `use_platform()`

use std::sync::Arc;

use crate::ports::outbound::{DocumentProvider, LocaleProvider, PlatformPort};

/// Unified platform services container
#[derive(Clone)]
pub struct Platform {
    document: Arc<dyn DocumentProviderDyn>,
    locale: Arc<dyn LocaleProviderDyn>,
}

// =============================================================================
// Dynamic trait versions for Arc storage (need Send + Sync for Dioxus context)
// =============================================================================

trait DocumentProviderDyn: Send + Sync {
    fn set_page_title(&self, title: &str);
    fn set_root_class(&self, class_name: &str);
    fn prefers_dark_mode(&self) -> bool;
}

trait LocaleProviderDyn: Send + Sync {
    fn format_number(&self, value: f64) -> String;
}

// =============================================================================
// Blanket implementations - convert port traits to dyn-safe wrappers
// =============================================================================

impl<T: DocumentProvider + Send + Sync> DocumentProviderDyn for T {
    fn set_page_title(&self, title: &str) {
        DocumentProvider::set_page_title(self, title)
    }
    fn set_root_class(&self, class_name: &str) {
        DocumentProvider::set_root_class(self, class_name)
    }
    fn prefers_dark_mode(&self) -> bool {
        DocumentProvider::prefers_dark_mode(self)
    }
}

impl<T: LocaleProvider + Send + Sync> LocaleProviderDyn for T {
    fn format_number(&self, value: f64) -> String {
        LocaleProvider::format_number(self, value)
    }
}

// =============================================================================
// Platform implementation
// =============================================================================

impl Platform {
    /// Create a new Platform with the given providers
    pub fn new<D, L>(document: D, locale: L) -> Self
    where
        D: DocumentProvider + Send + Sync,
        L: LocaleProvider + Send + Sync,
    {
        Self {
            document: Arc::new(document),
            locale: Arc::new(locale),
        }
    }
}

// =============================================================================
// PlatformPort implementation - lets the UI use the trait abstraction
// =============================================================================

impl PlatformPort for Platform {
    fn set_page_title(&self, title: &str) {
        self.document.set_page_title(title)
    }

    fn set_root_class(&self, class_name: &str) {
        self.document.set_root_class(class_name)
    }

    fn prefers_dark_mode(&self) -> bool {
        self.document.prefers_dark_mode()
    }

    fn format_number(&self, value: f64) -> String {
        self.locale.format_number(value)
    }
}
