//! Dashboard page: aggregate counters and the recent-students table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stats are fetched exactly once at page initialization; there is no
//! refresh trigger and no polling. A failed fetch leaves the pre-load
//! placeholders in place and raises one error toast.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::stat_card::StatCard;
use crate::components::student_table::{full_name, major_display};
use crate::components::toast_host::{notify_error, use_toasts};
use crate::net::types::{StatsSnapshot, Student};

fn recent_students(stats: &Option<StatsSnapshot>) -> Vec<Student> {
    stats
        .as_ref()
        .map(|s| s.recent_students.clone())
        .unwrap_or_default()
}

/// Dashboard page with stat cards and recent students.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let toasts = use_toasts();
    let stats = RwSignal::new(None::<StatsSnapshot>);

    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_stats().await {
            Ok(snapshot) => stats.set(Some(snapshot)),
            Err(err) => {
                log::error!("stats fetch failed: {err}");
                notify_error(toasts, "Could not load dashboard data");
            }
        }
    });

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Dashboard"</h1>
                <p class="dashboard-page__subtitle">"Overview of the student body"</p>
            </header>

            <div class="dashboard-page__cards">
                <StatCard
                    label="Total Students"
                    value=Signal::derive(move || stats.get().map(|s| s.total_students))
                />
                <StatCard
                    label="Majors"
                    value=Signal::derive(move || stats.get().map(|s| s.total_majors))
                />
            </div>

            <section class="dashboard-page__recent">
                <h2>"Recent Students"</h2>
                <Show
                    when=move || !recent_students(&stats.get()).is_empty()
                    fallback=|| view! { <p class="dashboard-page__empty">"No students yet."</p> }
                >
                    <table class="student-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Email"</th>
                                <th>"Major"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || recent_students(&stats.get())
                                key=|s| s.id
                                let(student)
                            >
                                <tr>
                                    <td>{full_name(&student)}</td>
                                    <td>{student.email.clone()}</td>
                                    <td>{major_display(student.major.as_deref())}</td>
                                </tr>
                            </For>
                        </tbody>
                    </table>
                </Show>
            </section>
        </div>
    }
}
