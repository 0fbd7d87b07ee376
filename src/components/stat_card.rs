//! Dashboard counter card.

#[cfg(test)]
#[path = "stat_card_test.rs"]
mod stat_card_test;

use leptos::prelude::*;

/// Counter text, with a placeholder until the value has loaded.
pub fn stat_display(value: Option<i64>) -> String {
    value.map_or_else(|| "—".to_owned(), |v| v.to_string())
}

/// A single labeled counter on the dashboard.
#[component]
pub fn StatCard(label: &'static str, value: Signal<Option<i64>>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__value">{move || stat_display(value.get())}</span>
            <span class="stat-card__label">{label}</span>
        </div>
    }
}
