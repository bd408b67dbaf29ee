//! Dashboard Page
//!
//! Grouped fatalities table and chart. Data is fetched once, on mount.

use leptos::*;

use crate::components::{ErrorMessage, FatalitiesChart, FatalitiesTable, Status};
use crate::state::dashboard::use_dashboard;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let dashboard = use_dashboard();

    // Fetch data on mount
    create_effect(move |_| {
        spawn_local(async move {
            dashboard.fetch_data().await;
        });
    });

    view! {
        <div class="dashboard">
            <header class="page-header">
                <h1>"Road Fatalities"</h1>
                <p class="subtitle">"Grouped monthly fatalities"</p>
                <Status />
            </header>

            <ErrorMessage />

            <section class="card">
                <h2>"Monthly Trend"</h2>
                <FatalitiesChart />
            </section>

            <section class="card">
                <h2>"Monthly Totals"</h2>
                <FatalitiesTable />
            </section>
        </div>
    }
}
