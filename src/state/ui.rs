//! Cross-page presentation state.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state shared across pages via context.
///
/// Holds the live dark-mode flag so every toggle control (navbar button,
/// settings checkbox) renders from the same source of truth. Persistence
/// lives in `util::dark_mode`, not here.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
}
