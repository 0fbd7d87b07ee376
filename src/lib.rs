//! Rosterdesk: a browser client for a student records backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend is an external HTTP service exposing `/api/students` and
//! `/api/stats`; this crate renders the students, dashboard, and settings
//! pages and mutates records exclusively through that API. It compiles to
//! WebAssembly with the `csr` feature; without it, browser-only calls
//! degrade to no-ops so the logic layer stays testable on a native host.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
