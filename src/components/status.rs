//! Status Line Component
//!
//! Loading indicator and last-updated time.

use leptos::*;

use crate::state::dashboard::use_dashboard;

#[component]
pub fn Status() -> impl IntoView {
    let dashboard = use_dashboard();

    view! {
        <div class="status">
            {move || {
                if dashboard.loading.get() {
                    view! {
                        <span class="status-loading">
                            <span class="loading-spinner" />
                            <span>"Loading..."</span>
                        </span>
                    }.into_view()
                } else {
                    view! {
                        <span class="status-updated">
                            {move || {
                                dashboard.last_updated.get()
                                    .and_then(|ts| chrono::DateTime::from_timestamp_millis(ts))
                                    .map(|dt| format!("Last updated: {}", dt.format("%H:%M:%S")))
                                    .unwrap_or_else(|| "Not loaded".to_string())
                            }}
                        </span>
                    }.into_view()
                }
            }}
        </div>
    }
}
