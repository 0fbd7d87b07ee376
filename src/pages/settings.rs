//! Settings page hosting the appearance preference.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Settings page with the dark-mode toggle.
#[component]
pub fn SettingsPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_change = move |ev: leptos::ev::Event| {
        let enabled = event_target_checked(&ev);
        crate::util::dark_mode::set(enabled);
        ui.update(|u| u.dark_mode = enabled);
    };

    view! {
        <div class="settings-page">
            <header class="settings-page__header">
                <h1>"Settings"</h1>
                <p class="settings-page__subtitle">"Preferences for this browser"</p>
            </header>

            <section class="settings-page__section">
                <h2>"Appearance"</h2>
                <label class="settings-page__toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || ui.get().dark_mode
                        on:change=on_change
                    />
                    <span>"Dark mode"</span>
                </label>
                <p class="settings-page__hint">
                    "The choice is stored locally and survives reloads."
                </p>
            </section>
        </div>
    }
}
