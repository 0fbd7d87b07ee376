//! Utility helpers isolating browser/environment concerns.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages and components call these instead of touching `web-sys` directly,
//! so browser-only behavior stays centralized and native builds keep
//! compiling with safe no-ops.

pub mod confirm;
pub mod dark_mode;
