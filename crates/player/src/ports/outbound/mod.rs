//! Outbound ports - Interfaces for the host environment
//!
//! These ports define the contracts that platform adapters must implement,
//! allowing the sheet model to reach the document and the host's number
//! formatting without depending on web-sys or the desktop webview.

pub mod platform;
pub mod platform_port;

pub use platform::{DocumentProvider, LocaleProvider};
pub use platform_port::PlatformPort;

#[cfg(any(test, feature = "testing"))]
pub use platform_port::MockPlatformPort;
