//! Thin, fail-soft wrappers over the browser globals the site touches.
//!
//! Every helper returns `None`/does nothing outside a browser so components
//! can be rendered on the host in tests.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;
use web_sys::{Storage, Window};

/// Retrieve the global `window`, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Access `localStorage`; `None` when blocked or unavailable.
#[must_use]
pub fn local_storage() -> Option<Storage> {
    window().and_then(|win| win.local_storage().ok().flatten())
}

/// The browser's preferred language tag, e.g. `it-IT`.
#[must_use]
pub fn navigator_language() -> Option<String> {
    window().and_then(|win| win.navigator().language())
}

/// Reflect the active language on `<html lang>`.
pub fn set_document_lang(code: &str) {
    if let Some(el) = window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element())
    {
        let _ = el.set_attribute("lang", code);
    }
}

/// Convert a JavaScript error value into a readable message.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn host_has_no_browser_globals() {
        assert!(window().is_none());
        assert!(local_storage().is_none());
        assert!(navigator_language().is_none());
        set_document_lang("it");
    }
}
