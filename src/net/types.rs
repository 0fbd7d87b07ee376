//! Wire DTOs for the student records backend.
//!
//! DESIGN
//! ======
//! These types mirror the backend JSON payloads so serde round-trips stay
//! lossless. The backend owns identity: `id` is assigned on create and the
//! client never fabricates or rewrites one.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A student record as returned by the collection and mutation endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Backend-assigned identifier, immutable once created.
    pub id: i64,
    /// Given name, non-empty for well-formed records.
    pub first_name: String,
    /// Family name, non-empty for well-formed records.
    pub last_name: String,
    /// Contact email; uniqueness is enforced by the backend.
    pub email: String,
    /// Declared major, absent for undeclared students.
    #[serde(default)]
    pub major: Option<String>,
}

/// Body for `POST /api/students` and `PUT /api/students/{id}`.
///
/// Exactly the four editable fields; `id` travels in the URL, never the body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// `None` serializes as `null`, which the backend stores as no major.
    pub major: Option<String>,
}

/// Aggregate snapshot from `GET /api/stats`.
///
/// Ephemeral: fetched once per dashboard view and never cached.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    /// Total number of student records.
    pub total_students: i64,
    /// Number of distinct declared majors.
    pub total_majors: i64,
    /// Bounded most-recent-first sample; length is decided by the backend.
    #[serde(default)]
    pub recent_students: Vec<Student>,
}
