//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::components::toast_host::ToastHost;
use crate::pages::{dashboard::DashboardPage, settings::SettingsPage, students::StudentsPage};
use crate::state::{toasts::ToastsState, ui::UiState};

/// Root application component.
///
/// Provides the shared state contexts, applies the persisted theme before
/// the first routed page renders, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let toasts = RwSignal::new(ToastsState::default());
    provide_context(ui);
    provide_context(toasts);

    let stored = crate::util::dark_mode::read_preference();
    crate::util::dark_mode::apply(stored);
    ui.update(|u| u.dark_mode = stored);

    view! {
        <Title text="Rosterdesk"/>

        <Router>
            <NavBar/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=StudentsPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("settings") view=SettingsPage/>
                </Routes>
            </main>
        </Router>
        <ToastHost/>
    }
}
