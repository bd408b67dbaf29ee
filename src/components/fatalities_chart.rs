//! Fatalities Chart Component
//!
//! Canvas the line chart is drawn on. The chart itself is built by
//! `DashboardView::render_chart`.

use leptos::*;

use crate::state::dashboard::use_dashboard;

#[component]
pub fn FatalitiesChart() -> impl IntoView {
    let dashboard = use_dashboard();
    let canvas_ref = dashboard.canvas;

    on_cleanup(move || dashboard.destroy_chart());

    view! {
        <div class="chart-container">
            <canvas
                id="fatalitiesChart"
                node_ref=canvas_ref
                width="800"
                height="400"
            />
        </div>
    }
}
