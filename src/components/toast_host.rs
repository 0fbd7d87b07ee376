//! Toast container and notification helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `notify` resolves the toast context optionally: callers in a tree with no
//! `ToastsState` provider get a silent no-op rather than a panic. Each toast
//! runs its own display and fade timers; nothing caps how many stack up.

#[cfg(test)]
#[path = "toast_host_test.rs"]
mod toast_host_test;

use leptos::prelude::*;

use crate::state::toasts::{Toast, ToastKind, ToastsState};

/// Optional handle to the shared toast list.
pub type ToastsSignal = Option<RwSignal<ToastsState>>;

/// Resolve the toast context, if one was provided.
pub fn use_toasts() -> ToastsSignal {
    use_context::<RwSignal<ToastsState>>()
}

/// Show a transient notification and schedule its removal.
pub fn notify(toasts: ToastsSignal, kind: ToastKind, message: impl Into<String>) {
    let Some(signal) = toasts else {
        return;
    };
    let Some(id) = signal.try_update(|state| state.push(kind, message.into())) else {
        return;
    };
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(crate::state::toasts::TOAST_DISPLAY_MS).await;
        let _ = signal.try_update(|state| state.mark_leaving(id));
        gloo_timers::future::TimeoutFuture::new(crate::state::toasts::TOAST_FADE_MS).await;
        let _ = signal.try_update(|state| state.dismiss(id));
    });
    #[cfg(not(feature = "csr"))]
    let _ = id;
}

/// Show a success toast.
pub fn notify_success(toasts: ToastsSignal, message: impl Into<String>) {
    notify(toasts, ToastKind::Success, message);
}

/// Show an error toast.
pub fn notify_error(toasts: ToastsSignal, message: impl Into<String>) {
    notify(toasts, ToastKind::Error, message);
}

fn toast_class(kind: ToastKind, leaving: bool) -> String {
    let base = match kind {
        ToastKind::Success => "toast toast--success",
        ToastKind::Error => "toast toast--error",
    };
    if leaving {
        format!("{base} toast--leaving")
    } else {
        base.to_owned()
    }
}

/// Fixed-position container rendering the shared toast list.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toast-container">
            {toasts.map(|signal| {
                view! {
                    <For
                        each=move || signal.get().items().to_vec()
                        key=|toast| toast.id
                        let(toast)
                    >
                        <ToastItem toast signal/>
                    </For>
                }
            })}
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast, signal: RwSignal<ToastsState>) -> impl IntoView {
    let id = toast.id;
    let kind = toast.kind;

    // The class tracks the live entry so the leaving flag drives the
    // fade-out transition; a toast already dismissed counts as leaving.
    view! {
        <div class=move || {
            let leaving = signal
                .get()
                .items()
                .iter()
                .find(|t| t.id == id)
                .is_none_or(|t| t.leaving);
            toast_class(kind, leaving)
        }>
            <span>{toast.message.clone()}</span>
        </div>
    }
}
