//! Roster table with per-row edit/delete actions.
//!
//! DESIGN
//! ======
//! Row actions are a typed command enum dispatched through a single
//! callback; the page resolves the acted-upon student by id against its
//! in-memory roster. Rendering is a pure projection of the sequence it is
//! given: the empty-state element shows iff that sequence is empty.

#[cfg(test)]
#[path = "student_table_test.rs"]
mod student_table_test;

use leptos::prelude::*;

use crate::net::types::Student;

/// Command issued by a row's action buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Delete,
}

/// Two-letter uppercased initials; missing name parts contribute nothing.
pub fn initials(first_name: &str, last_name: &str) -> String {
    let mut out = String::new();
    if let Some(c) = first_name.chars().next() {
        out.extend(c.to_uppercase());
    }
    if let Some(c) = last_name.chars().next() {
        out.extend(c.to_uppercase());
    }
    out
}

/// Display form of a student's full name.
pub fn full_name(student: &Student) -> String {
    format!("{} {}", student.first_name, student.last_name)
}

/// Major column text; absent or empty majors render a placeholder.
pub fn major_display(major: Option<&str>) -> String {
    match major {
        Some(major) if !major.is_empty() => major.to_owned(),
        _ => "-".to_owned(),
    }
}

/// Student roster table, or the empty-state element when there are no rows.
#[component]
pub fn StudentTable(
    students: Signal<Vec<Student>>,
    on_action: Callback<(RowAction, i64)>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !students.get().is_empty()
            fallback=|| {
                view! {
                    <div class="empty-state">
                        <p class="empty-state__title">"No students found"</p>
                        <p class="empty-state__hint">"Add a student to get started."</p>
                    </div>
                }
            }
        >
            <table class="student-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Major"</th>
                        <th>"ID"</th>
                        <th class="student-table__actions-head"></th>
                    </tr>
                </thead>
                <tbody>
                    <For each=move || students.get() key=|s| s.id let(student)>
                        <StudentRow student on_action/>
                    </For>
                </tbody>
            </table>
        </Show>
    }
}

#[component]
fn StudentRow(student: Student, on_action: Callback<(RowAction, i64)>) -> impl IntoView {
    let id = student.id;
    let avatar = initials(&student.first_name, &student.last_name);
    let name = full_name(&student);
    let major = major_display(student.major.as_deref());

    view! {
        <tr>
            <td>
                <div class="student-table__name-cell">
                    <span class="student-table__initials">{avatar}</span>
                    <span class="student-table__name">{name}</span>
                </div>
            </td>
            <td>{student.email.clone()}</td>
            <td>{major}</td>
            <td class="student-table__id">{format!("#{id}")}</td>
            <td class="student-table__actions">
                <button
                    class="btn btn--small"
                    on:click=move |_| on_action.run((RowAction::Edit, id))
                    title="Edit"
                >
                    "Edit"
                </button>
                <button
                    class="btn btn--small btn--danger"
                    on:click=move |_| on_action.run((RowAction::Delete, id))
                    title="Delete"
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
