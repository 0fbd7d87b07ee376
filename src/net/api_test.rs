use super::*;

#[test]
fn student_endpoint_formats_expected_path() {
    assert_eq!(student_endpoint(7), "/api/students/7");
}

#[test]
fn collection_endpoints_are_stable() {
    assert_eq!(STUDENTS_ENDPOINT, "/api/students");
    assert_eq!(STATS_ENDPOINT, "/api/stats");
}

#[test]
fn error_from_body_extracts_backend_message() {
    let message = error_from_body(r#"{"error":"email taken"}"#, save_failed_fallback());
    assert_eq!(message, "email taken");
}

#[test]
fn error_from_body_falls_back_on_unparseable_body() {
    let message = error_from_body("<html>502</html>", save_failed_fallback());
    assert_eq!(message, "Failed to save student");
}

#[test]
fn error_from_body_falls_back_on_empty_body() {
    let message = error_from_body("", save_failed_fallback());
    assert_eq!(message, "Failed to save student");
}

#[test]
fn error_from_body_falls_back_on_missing_error_key() {
    let message = error_from_body(r#"{"detail":"nope"}"#, save_failed_fallback());
    assert_eq!(message, "Failed to save student");
}
