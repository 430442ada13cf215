//! PlatformPort - Unified platform services interface
//!
//! This trait provides a single injectable interface for the platform
//! operations the sheet needs, so components and the sheet model don't
//! depend on the concrete `Platform` container.

/// Unified platform services port
///
/// Implemented by the `Platform` struct in `state/platform.rs`.
///
/// Use via Dioxus context: `use_context::<Arc<dyn PlatformPort>>()`
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait PlatformPort: Send + Sync {
    // -------------------------------------------------------------------------
    // Document operations
    // -------------------------------------------------------------------------

    /// Set the page title
    fn set_page_title(&self, title: &str);

    /// Replace the class attribute of the document root element
    fn set_root_class(&self, class_name: &str);

    /// Whether the host reports a dark color-scheme preference
    fn prefers_dark_mode(&self) -> bool;

    // -------------------------------------------------------------------------
    // Locale operations
    // -------------------------------------------------------------------------

    /// Format a number with the host's default locale rules
    fn format_number(&self, value: f64) -> String;
}
