//! Platform abstraction ports for cross-platform compatibility
//!
//! These traits abstract platform-specific operations so that:
//! 1. The sheet model and components remain platform-agnostic
//! 2. web-sys and webview code is isolated in infrastructure
//! 3. Handlers are testable with mock implementations
//!
//! NOTE: The `Platform` struct (DI container) that aggregates these traits
//! lives in `state/platform.rs`, not here.

/// Browser document operations
pub trait DocumentProvider: Clone + 'static {
    /// Set the page title
    fn set_page_title(&self, title: &str);

    /// Replace the class attribute of the document root element
    fn set_root_class(&self, class_name: &str);

    /// Whether the host reports a dark color-scheme preference
    fn prefers_dark_mode(&self) -> bool;
}

/// Host number formatting
pub trait LocaleProvider: Clone + 'static {
    /// Format a number with the host's default locale rules
    fn format_number(&self, value: f64) -> String;
}
