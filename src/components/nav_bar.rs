//! Top navigation bar shared by all pages.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::ui::UiState;

/// Brand, page links, and the dark-mode toggle button.
#[component]
pub fn NavBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <header class="nav-bar">
            <span class="nav-bar__brand">"Rosterdesk"</span>
            <nav class="nav-bar__links">
                <A href="/">"Students"</A>
                <A href="/dashboard">"Dashboard"</A>
                <A href="/settings">"Settings"</A>
            </nav>
            <span class="nav-bar__spacer"></span>
            <button
                class="btn nav-bar__dark-toggle"
                on:click=move |_| {
                    let current = ui.get().dark_mode;
                    let next = crate::util::dark_mode::toggle(current);
                    ui.update(|u| u.dark_mode = next);
                }
                title="Toggle dark mode"
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>
        </header>
    }
}
