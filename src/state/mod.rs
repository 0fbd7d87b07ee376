//! Owned client-side state modules.
//!
//! DESIGN
//! ======
//! State structs here are plain data, free of Leptos types; pages wrap them
//! in `RwSignal`s at initialization. Keeping the structs plain keeps the
//! cache and filter logic testable on a native host.

pub mod draft;
pub mod roster;
pub mod toasts;
pub mod ui;
