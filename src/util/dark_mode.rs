//! Dark mode preference persistence and application.
//!
//! Reads the preference from `localStorage` and applies a `data-theme`
//! attribute to the `<html>` element. Writes go back to `localStorage` on
//! every change. Requires a browser environment; native builds no-op.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "rosterdesk_dark";

/// Read the dark mode preference from localStorage.
///
/// Returns `true` only if the user previously enabled dark mode; an absent
/// or unreadable value means disabled.
pub fn read_preference() -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                return val == "true";
            }
        }
        false
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Apply `enabled` to the document root and persist it.
pub fn set(enabled: bool) {
    apply(enabled);
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, if enabled { "true" } else { "false" });
            }
        }
    }
}

/// Flip the preference, persist the new value, and return it.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    set(next);
    next
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", if enabled { "dark" } else { "light" });
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = enabled;
    }
}
