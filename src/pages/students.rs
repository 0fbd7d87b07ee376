//! Students page: roster table, search, and the create/edit modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the roster cache for the lifetime of the route. Every mutation goes
//! through the backend and is followed by a full roster re-fetch; the table
//! never shows optimistic state. Edit and delete resolve their target
//! against the last-loaded snapshot, which can lag the backend by one
//! round-trip.

use leptos::prelude::*;

use crate::components::student_form_modal::StudentFormModal;
use crate::components::student_table::{RowAction, StudentTable};
use crate::components::toast_host::{ToastsSignal, notify_error, notify_success, use_toasts};
use crate::state::draft::{StudentDraft, success_message};
use crate::state::roster::{RosterState, filter_students};

/// Fetch the collection and replace the roster wholesale.
///
/// On failure the previous roster stays rendered; the only signal to the
/// user is one error toast.
fn load_roster(roster: RwSignal<RosterState>, toasts: ToastsSignal) {
    roster.update(|r| r.loading = true);
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_students().await {
            Ok(students) => {
                roster.update(|r| {
                    r.students = students;
                    r.loading = false;
                });
            }
            Err(err) => {
                log::error!("roster fetch failed: {err}");
                notify_error(toasts, "Failed to load students");
                roster.update(|r| r.loading = false);
            }
        }
    });
}

/// Students management page.
#[component]
pub fn StudentsPage() -> impl IntoView {
    let toasts = use_toasts();
    let roster = RwSignal::new(RosterState::default());
    let search = RwSignal::new(String::new());
    let draft = RwSignal::new(None::<StudentDraft>);
    let saving = RwSignal::new(false);

    let filtered = Signal::derive(move || filter_students(&roster.get().students, &search.get()));

    let on_add = move |_| draft.set(Some(StudentDraft::blank()));
    let on_cancel = Callback::new(move |()| draft.set(None));

    let on_action = Callback::new(move |(action, id): (RowAction, i64)| match action {
        RowAction::Edit => {
            if let Some(student) = roster.get_untracked().students.iter().find(|s| s.id == id) {
                draft.set(Some(StudentDraft::for_edit(student)));
            }
        }
        RowAction::Delete => {
            if !crate::util::confirm::confirm("Are you sure?") {
                return;
            }
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_student(id).await {
                    Ok(()) => {
                        notify_success(toasts, "Student removed");
                        load_roster(roster, toasts);
                    }
                    Err(err) => {
                        log::error!("delete of student {id} failed: {err}");
                        notify_error(toasts, "Failed to delete");
                    }
                }
            });
        }
    });

    let on_submit = Callback::new(move |()| {
        if saving.get_untracked() {
            return;
        }
        let Some(current) = draft.get_untracked() else {
            return;
        };
        saving.set(true);
        leptos::task::spawn_local(async move {
            let payload = current.payload();
            let result = match current.id {
                Some(id) => crate::net::api::update_student(id, &payload).await.map(|_| ()),
                None => crate::net::api::create_student(&payload).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    notify_success(toasts, success_message(current.is_edit()));
                    draft.set(None);
                    load_roster(roster, toasts);
                }
                Err(err) => notify_error(toasts, err),
            }
            saving.set(false);
        });
    });

    // Handlers are wired; one initial load, then only successful mutations
    // trigger a re-fetch.
    load_roster(roster, toasts);

    view! {
        <div class="students-page">
            <header class="students-page__header">
                <div>
                    <h1>"Students"</h1>
                    <p class="students-page__subtitle">"Manage student records"</p>
                </div>
                <button class="btn btn--primary" on:click=on_add>"+ Add Student"</button>
            </header>

            <input
                class="students-page__search"
                type="search"
                placeholder="Search by name, email, or major..."
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />

            <Show
                when=move || !(roster.get().loading && roster.get().students.is_empty())
                fallback=|| view! { <p class="students-page__loading">"Loading students..."</p> }
            >
                <StudentTable students=filtered on_action=on_action/>
            </Show>

            <Show when=move || draft.get().is_some()>
                <StudentFormModal draft saving on_cancel on_submit/>
            </Show>
        </div>
    }
}
