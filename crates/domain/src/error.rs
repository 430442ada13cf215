//! Unified error type for the domain layer
//!
//! Every failure path in the sheet is recoverable, so these errors are
//! logged and handled locally by callers rather than shown to the user.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// An input event named a field the sheet does not have
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// No theme matches the requested name
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    /// Text could not be read as a number
    #[error("Parse error: {0}")]
    Parse(String),

    /// The formatted probe value did not have the expected layout
    #[error("Locale probe {probe:?} is unusable: {reason}")]
    LocaleProbe { probe: String, reason: &'static str },
}

impl DomainError {
    /// Create an unknown field error
    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField(name.into())
    }

    /// Create an unknown theme error
    pub fn unknown_theme(name: impl Into<String>) -> Self {
        Self::UnknownTheme(name.into())
    }

    /// Create a parse error for text with no leading number
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a locale probe error
    pub fn locale_probe(probe: impl Into<String>, reason: &'static str) -> Self {
        Self::LocaleProbe {
            probe: probe.into(),
            reason,
        }
    }
}
