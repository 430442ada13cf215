//! Desktop platform implementations
//!
//! The desktop build renders into a webview, so document changes are sent
//! through Dioxus `eval`. Number formatting and the dark-mode preference
//! come from the process environment.

use charsheet_domain::LocaleSeparators;

use crate::config::PlayerConfig;
use crate::ports::outbound::platform::{DocumentProvider, LocaleProvider};
use crate::state::Platform;

/// Desktop document provider backed by the webview
#[derive(Clone, Default)]
pub struct DesktopDocumentProvider {
    prefers_dark: bool,
}

impl DesktopDocumentProvider {
    pub fn new(prefers_dark: bool) -> Self {
        Self { prefers_dark }
    }

    /// Read the dark-mode preference from `GTK_THEME` (e.g. `Adwaita:dark`).
    pub fn from_env() -> Self {
        let prefers_dark = std::env::var("GTK_THEME")
            .map(|theme| theme.to_ascii_lowercase().contains("dark"))
            .unwrap_or(false);
        Self::new(prefers_dark)
    }

    fn run_script(&self, script: String) {
        let _ = dioxus::document::eval(&script);
    }
}

/// Quote a string as a JavaScript literal.
fn js_string(value: &str) -> Option<String> {
    match serde_json::to_string(value) {
        Ok(quoted) => Some(quoted),
        Err(e) => {
            tracing::error!("Failed to encode script argument: {}", e);
            None
        }
    }
}

impl DocumentProvider for DesktopDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Some(title) = js_string(title) {
            self.run_script(format!("document.title = {};", title));
        }
    }

    fn set_root_class(&self, class_name: &str) {
        if let Some(class_name) = js_string(class_name) {
            self.run_script(format!(
                "document.documentElement.className = {};",
                class_name
            ));
        }
    }

    fn prefers_dark_mode(&self) -> bool {
        self.prefers_dark
    }
}

/// Desktop locale provider formatting with separators chosen from a locale tag
#[derive(Clone, Default)]
pub struct DesktopLocaleProvider {
    separators: LocaleSeparators,
}

impl DesktopLocaleProvider {
    pub fn new(separators: LocaleSeparators) -> Self {
        Self { separators }
    }

    pub fn for_locale(tag: Option<&str>) -> Self {
        let separators = tag.map(separators_for_locale).unwrap_or_default();
        tracing::debug!(locale = ?tag, ?separators, "Desktop number format");
        Self::new(separators)
    }
}

impl LocaleProvider for DesktopLocaleProvider {
    fn format_number(&self, value: f64) -> String {
        self.separators.format_number(value)
    }
}

/// Separators for a POSIX or BCP 47 locale tag such as `de_DE.UTF-8` or `fr-CA`.
pub fn separators_for_locale(tag: &str) -> LocaleSeparators {
    let tag = tag.split(['.', '@']).next().unwrap_or(tag);
    let mut parts = tag.split(['_', '-']);
    let language = parts.next().unwrap_or("").to_ascii_lowercase();
    let region = parts.next().unwrap_or("").to_ascii_uppercase();

    match (language.as_str(), region.as_str()) {
        ("de", "CH") | ("de", "LI") => LocaleSeparators::new('\u{2019}', '.'),
        ("fr", _) => LocaleSeparators::new('\u{202f}', ','),
        (
            "de" | "es" | "it" | "nl" | "pt" | "da" | "id" | "tr" | "el" | "ro" | "hr" | "sl"
            | "sr" | "vi",
            _,
        ) => LocaleSeparators::new('.', ','),
        (
            "ru" | "uk" | "pl" | "cs" | "sk" | "sv" | "fi" | "nb" | "nn" | "no" | "hu" | "bg"
            | "lt" | "lv" | "et",
            _,
        ) => LocaleSeparators::new('\u{a0}', ','),
        _ => LocaleSeparators::default(),
    }
}

/// Create a Platform instance for desktop
pub fn create_platform(config: &PlayerConfig) -> Platform {
    Platform::new(
        DesktopDocumentProvider::from_env(),
        DesktopLocaleProvider::for_locale(config.locale.as_deref()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use charsheet_domain::PROBE_VALUE;

    #[test]
    fn test_separators_for_posix_tags() {
        assert_eq!(separators_for_locale("en_US.UTF-8"), LocaleSeparators::default());
        assert_eq!(
            separators_for_locale("de_DE.UTF-8"),
            LocaleSeparators::new('.', ',')
        );
        assert_eq!(
            separators_for_locale("de_CH.UTF-8"),
            LocaleSeparators::new('\u{2019}', '.')
        );
        assert_eq!(separators_for_locale("C"), LocaleSeparators::default());
    }

    #[test]
    fn test_separators_for_bcp47_tags() {
        assert_eq!(
            separators_for_locale("fr-CA"),
            LocaleSeparators::new('\u{202f}', ',')
        );
        assert_eq!(
            separators_for_locale("sv-SE"),
            LocaleSeparators::new('\u{a0}', ',')
        );
    }

    #[test]
    fn test_probe_round_trips_through_detection() {
        for tag in ["en_GB", "de_AT", "fr_FR", "pl_PL", "de_CH"] {
            let provider = DesktopLocaleProvider::for_locale(Some(tag));
            let probe = provider.format_number(PROBE_VALUE);
            assert_eq!(
                LocaleSeparators::from_probe(&probe),
                Ok(separators_for_locale(tag)),
                "probe {:?} for {}",
                probe,
                tag
            );
        }
    }

    #[test]
    fn test_document_preference() {
        assert!(DesktopDocumentProvider::new(true).prefers_dark_mode());
        assert!(!DesktopDocumentProvider::default().prefers_dark_mode());
    }
}
