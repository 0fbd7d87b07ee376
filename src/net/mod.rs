//! Networking modules for the student records HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls against the external backend, `types` defines
//! the shared wire schema. There is no push channel; every refresh is a
//! client-initiated fetch.

pub mod api;
pub mod types;
