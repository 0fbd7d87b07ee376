//! Create/edit student modal dialog.

use leptos::prelude::*;

use crate::state::draft::{StudentDraft, modal_title, submit_label};

/// Modal form bound to the page's draft signal.
///
/// The dialog never resets fields itself: the page swaps in a fresh draft on
/// every open, and a failed save keeps the draft (and the dialog) intact so
/// the user can retry.
#[component]
pub fn StudentFormModal(
    draft: RwSignal<Option<StudentDraft>>,
    saving: RwSignal<bool>,
    on_cancel: Callback<()>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let is_edit = move || draft.get().is_some_and(|d| d.is_edit());

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_cancel.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div
                class="dialog"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <h2>{move || modal_title(is_edit())}</h2>
                <form class="dialog__form" on:submit=on_form_submit>
                    <label class="dialog__label">
                        "First Name"
                        <input
                            class="dialog__input"
                            type="text"
                            required
                            prop:value=move || draft.get().map(|d| d.first_name).unwrap_or_default()
                            on:input=move |ev| {
                                draft.update(|d| {
                                    if let Some(d) = d {
                                        d.first_name = event_target_value(&ev);
                                    }
                                });
                            }
                        />
                    </label>
                    <label class="dialog__label">
                        "Last Name"
                        <input
                            class="dialog__input"
                            type="text"
                            required
                            prop:value=move || draft.get().map(|d| d.last_name).unwrap_or_default()
                            on:input=move |ev| {
                                draft.update(|d| {
                                    if let Some(d) = d {
                                        d.last_name = event_target_value(&ev);
                                    }
                                });
                            }
                        />
                    </label>
                    <label class="dialog__label">
                        "Email"
                        <input
                            class="dialog__input"
                            type="email"
                            required
                            prop:value=move || draft.get().map(|d| d.email).unwrap_or_default()
                            on:input=move |ev| {
                                draft.update(|d| {
                                    if let Some(d) = d {
                                        d.email = event_target_value(&ev);
                                    }
                                });
                            }
                        />
                    </label>
                    <label class="dialog__label">
                        "Major"
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="Optional"
                            prop:value=move || draft.get().map(|d| d.major).unwrap_or_default()
                            on:input=move |ev| {
                                draft.update(|d| {
                                    if let Some(d) = d {
                                        d.major = event_target_value(&ev);
                                    }
                                });
                            }
                        />
                    </label>
                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            class="btn btn--primary"
                            disabled=move || saving.get()
                        >
                            {move || submit_label(is_edit(), saving.get())}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
