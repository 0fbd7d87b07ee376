//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped state and orchestration and delegates
//! rendering details to `components`. Pages talk to the backend only
//! through `net::api`; there is no cross-page communication.

pub mod dashboard;
pub mod settings;
pub mod students;
