//! WASM platform implementations
//!
//! Provides platform-specific implementations for the browser using
//! web-sys and js-sys.

use crate::config::PlayerConfig;
use crate::ports::outbound::platform::{DocumentProvider, LocaleProvider};
use crate::state::Platform;
use wasm_bindgen::JsValue;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// WASM document provider using the browser DOM
#[derive(Clone, Default)]
pub struct WasmDocumentProvider;

impl DocumentProvider for WasmDocumentProvider {
    fn set_page_title(&self, title: &str) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
        }
    }

    fn set_root_class(&self, class_name: &str) {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        match root {
            Some(root) => root.set_class_name(class_name),
            None => tracing::warn!("No document root to apply theme class to"),
        }
    }

    fn prefers_dark_mode(&self) -> bool {
        web_sys::window()
            .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
            .map(|query| query.matches())
            .unwrap_or(false)
    }
}

/// WASM locale provider using `Intl.NumberFormat` with the default locale
#[derive(Clone, Default)]
pub struct WasmLocaleProvider;

impl LocaleProvider for WasmLocaleProvider {
    fn format_number(&self, value: f64) -> String {
        let format = js_sys::Intl::NumberFormat::new(&js_sys::Array::new(), &js_sys::Object::new())
            .format();
        match format.call1(&JsValue::UNDEFINED, &JsValue::from_f64(value)) {
            Ok(formatted) => formatted.as_string().unwrap_or_else(|| value.to_string()),
            Err(e) => {
                tracing::warn!("Intl.NumberFormat failed: {:?}", e);
                value.to_string()
            }
        }
    }
}

/// Create a Platform instance for the browser
pub fn create_platform(_config: &PlayerConfig) -> Platform {
    Platform::new(WasmDocumentProvider, WasmLocaleProvider)
}
