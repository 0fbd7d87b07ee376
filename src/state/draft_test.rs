use super::*;

fn existing_student() -> Student {
    Student {
        id: 42,
        first_name: "Ann".to_owned(),
        last_name: "Lee".to_owned(),
        email: "ann@example.com".to_owned(),
        major: Some("Physics".to_owned()),
    }
}

#[test]
fn blank_draft_has_no_identity_and_empty_fields() {
    let draft = StudentDraft::blank();
    assert_eq!(draft.id, None);
    assert!(!draft.is_edit());
    assert!(draft.first_name.is_empty());
    assert!(draft.last_name.is_empty());
    assert!(draft.email.is_empty());
    assert!(draft.major.is_empty());
}

#[test]
fn edit_draft_populates_all_fields_including_identity() {
    let draft = StudentDraft::for_edit(&existing_student());
    assert_eq!(draft.id, Some(42));
    assert!(draft.is_edit());
    assert_eq!(draft.first_name, "Ann");
    assert_eq!(draft.last_name, "Lee");
    assert_eq!(draft.email, "ann@example.com");
    assert_eq!(draft.major, "Physics");
}

#[test]
fn edit_draft_renders_missing_major_as_empty_field() {
    let mut student = existing_student();
    student.major = None;
    let draft = StudentDraft::for_edit(&student);
    assert!(draft.major.is_empty());
}

#[test]
fn payload_carries_the_four_editable_fields() {
    let draft = StudentDraft::for_edit(&existing_student());
    let payload = draft.payload();
    assert_eq!(payload.first_name, "Ann");
    assert_eq!(payload.last_name, "Lee");
    assert_eq!(payload.email, "ann@example.com");
    assert_eq!(payload.major.as_deref(), Some("Physics"));
}

#[test]
fn payload_maps_empty_major_to_none() {
    let draft = StudentDraft::blank();
    assert_eq!(draft.payload().major, None);
}

#[test]
fn modal_title_switches_on_mode() {
    assert_eq!(modal_title(false), "Add New Student");
    assert_eq!(modal_title(true), "Edit Student");
}

#[test]
fn submit_label_switches_on_mode_and_busy_state() {
    assert_eq!(submit_label(false, false), "Save Student");
    assert_eq!(submit_label(true, false), "Update Student");
    assert_eq!(submit_label(false, true), "Saving...");
    assert_eq!(submit_label(true, true), "Saving...");
}

#[test]
fn success_message_switches_on_mode() {
    assert_eq!(success_message(false), "Added successfully");
    assert_eq!(success_message(true), "Updated successfully");
}
