//! App Root Component
//!
//! Provides the dashboard state and lays out the page.

use leptos::*;

use crate::config::DashboardConfig;
use crate::pages::Dashboard;
use crate::state::dashboard::provide_dashboard;

/// Root application component
#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    provide_dashboard(config);

    view! {
        <main class="container">
            <Dashboard />
        </main>
    }
}
