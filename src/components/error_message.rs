//! Error Message Component
//!
//! Error region, hidden until a message is set.

use leptos::*;

use crate::state::dashboard::use_dashboard;

#[component]
pub fn ErrorMessage() -> impl IntoView {
    let dashboard = use_dashboard();
    let error = dashboard.error;

    view! {
        <div
            id="errorMessage"
            class="error-message"
            role="alert"
            style:display=move || if error.with(Option::is_some) { "block" } else { "none" }
        >
            {move || error.get().unwrap_or_default()}
        </div>
    }
}
