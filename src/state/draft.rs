//! Modal form state for creating and editing students.
//!
//! DESIGN
//! ======
//! The draft carries the backend identity explicitly instead of hiding it
//! in a form field: `id: None` means create, `id: Some` means edit. The
//! page swaps the whole draft on open, so a cancelled edit never leaks
//! stale field values into the next session of the modal.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use crate::net::types::{Student, StudentPayload};

/// Editable form fields plus the identity of the student being edited.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StudentDraft {
    /// Present iff the draft edits an existing student.
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Kept as the raw input value; empty means no major.
    pub major: String,
}

impl StudentDraft {
    /// Fresh draft for the create flow: all fields cleared, no identity.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Draft populated from an existing student for the edit flow.
    pub fn for_edit(student: &Student) -> Self {
        Self {
            id: Some(student.id),
            first_name: student.first_name.clone(),
            last_name: student.last_name.clone(),
            email: student.email.clone(),
            major: student.major.clone().unwrap_or_default(),
        }
    }

    /// Whether submitting this draft updates an existing student.
    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Request body of exactly the four editable fields.
    pub fn payload(&self) -> StudentPayload {
        StudentPayload {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            major: if self.major.is_empty() {
                None
            } else {
                Some(self.major.clone())
            },
        }
    }
}

/// Modal heading for the active mode.
pub fn modal_title(is_edit: bool) -> &'static str {
    if is_edit { "Edit Student" } else { "Add New Student" }
}

/// Submit button label, with the busy label while a save is in flight.
pub fn submit_label(is_edit: bool, saving: bool) -> &'static str {
    if saving {
        "Saving..."
    } else if is_edit {
        "Update Student"
    } else {
        "Save Student"
    }
}

/// Success notification for a completed save.
pub fn success_message(is_edit: bool) -> &'static str {
    if is_edit {
        "Updated successfully"
    } else {
        "Added successfully"
    }
}
