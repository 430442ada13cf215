//! Player configuration from environment variables.
//!
//! | Variable           | Values              | Effect                                   |
//! |--------------------|---------------------|------------------------------------------|
//! | `CHARSHEET_SHELL`  | `desktop`, `mobile` | Layout shell (wasm picks by window width) |
//! | `CHARSHEET_THEME`  | `light`, `dark`     | Initial theme, overriding the host       |
//! | `CHARSHEET_LOCALE` | locale tag          | Desktop number format                    |
//!
//! `CHARSHEET_LOCALE` falls back to `LC_ALL`, `LC_NUMERIC` and `LANG`.
//! Invalid values are logged and ignored.

use std::str::FromStr;

use charsheet_domain::{find_theme, ThemeDescriptor};
use thiserror::Error;

use crate::ui::ShellKind;

pub const SHELL_VAR: &str = "CHARSHEET_SHELL";
pub const THEME_VAR: &str = "CHARSHEET_THEME";
pub const LOCALE_VAR: &str = "CHARSHEET_LOCALE";

const LOCALE_FALLBACK_VARS: [&str; 3] = ["LC_ALL", "LC_NUMERIC", "LANG"];

/// Errors from reading configuration values
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{var} has invalid value {value:?}, expected one of: {expected}")]
    InvalidValue {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl FromStr for ShellKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "desktop" => Ok(ShellKind::Desktop),
            "mobile" => Ok(ShellKind::Mobile),
            _ => Err(ConfigError::InvalidValue {
                var: SHELL_VAR,
                value: s.to_string(),
                expected: "desktop, mobile",
            }),
        }
    }
}

/// Startup configuration for the player
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerConfig {
    /// Forced layout shell
    pub shell: Option<ShellKind>,
    /// Forced initial theme
    pub theme: Option<&'static ThemeDescriptor>,
    /// Locale tag for desktop number formatting
    pub locale: Option<String>,
}

impl PlayerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which returns a variable's value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let shell = value(SHELL_VAR).and_then(|raw| match raw.parse::<ShellKind>() {
            Ok(shell) => Some(shell),
            Err(e) => {
                tracing::warn!("{}", e);
                None
            }
        });

        let theme = value(THEME_VAR).and_then(|raw| match find_theme(&raw) {
            Ok(theme) => Some(theme),
            Err(e) => {
                tracing::warn!("{} is ignored: {}", THEME_VAR, e);
                None
            }
        });

        let locale = value(LOCALE_VAR)
            .or_else(|| LOCALE_FALLBACK_VARS.iter().find_map(|&key| value(key)));

        Self {
            shell,
            theme,
            locale,
        }
    }
}
