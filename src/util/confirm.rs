//! Native confirmation dialog wrapper.

#[cfg(test)]
#[path = "confirm_test.rs"]
mod confirm_test;

/// Ask the user to confirm via the browser's blocking dialog.
///
/// Returns `false` when declined or when no browser window is available,
/// so callers abort rather than act without consent.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window().is_some_and(|w| w.confirm_with_message(message).unwrap_or(false))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        false
    }
}
