//! REST API helpers for the student records backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning errors so pure logic stays testable
//! without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<T, String>` where the error is already a
//! human-readable message. Callers surface it as a single notification and
//! never retry; there is no timeout and no cancellation.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{StatsSnapshot, Student, StudentPayload};
#[cfg(any(test, feature = "csr"))]
use serde::Deserialize;

/// Student collection endpoint.
pub const STUDENTS_ENDPOINT: &str = "/api/students";
/// Aggregate stats endpoint.
pub const STATS_ENDPOINT: &str = "/api/stats";

#[cfg(any(test, feature = "csr"))]
fn student_endpoint(id: i64) -> String {
    format!("{STUDENTS_ENDPOINT}/{id}")
}

#[cfg(any(test, feature = "csr"))]
fn save_failed_fallback() -> String {
    "Failed to save student".to_owned()
}

/// Non-2xx mutation responses carry `{"error": "..."}`; anything else falls
/// back to the generic message.
#[cfg(any(test, feature = "csr"))]
fn error_from_body(body: &str, fallback: String) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        error: String,
    }
    serde_json::from_str::<ErrorBody>(body).map_or(fallback, |b| b.error)
}

/// Fetch the full student collection from `GET /api/students`.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-OK status.
pub async fn fetch_students() -> Result<Vec<Student>, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(STUDENTS_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("students request failed: {}", resp.status()));
        }
        resp.json::<Vec<Student>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err("not available outside the browser".to_owned())
    }
}

/// Create a student via `POST /api/students`.
///
/// # Errors
///
/// Returns the backend's `{error}` message on a non-2xx response, or a
/// generic save-failure message when the body is absent or unparseable.
pub async fn create_student(payload: &StudentPayload) -> Result<Student, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(STUDENTS_ENDPOINT)
            .json(payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(error_from_body(&body, save_failed_fallback()));
        }
        resp.json::<Student>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = payload;
        Err("not available outside the browser".to_owned())
    }
}

/// Update a student via `PUT /api/students/{id}`.
///
/// # Errors
///
/// Same failure mapping as [`create_student`].
pub async fn update_student(id: i64, payload: &StudentPayload) -> Result<Student, String> {
    #[cfg(feature = "csr")]
    {
        let url = student_endpoint(id);
        let resp = gloo_net::http::Request::put(&url)
            .json(payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(error_from_body(&body, save_failed_fallback()));
        }
        resp.json::<Student>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (id, payload);
        Err("not available outside the browser".to_owned())
    }
}

/// Delete a student via `DELETE /api/students/{id}`.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-OK status. The
/// response body is not inspected.
pub async fn delete_student(id: i64) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let url = student_endpoint(id);
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("delete request failed: {}", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        Err("not available outside the browser".to_owned())
    }
}

/// Fetch the aggregate snapshot from `GET /api/stats`.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-OK status.
pub async fn fetch_stats() -> Result<StatsSnapshot, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(STATS_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("stats request failed: {}", resp.status()));
        }
        resp.json::<StatsSnapshot>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err("not available outside the browser".to_owned())
    }
}
