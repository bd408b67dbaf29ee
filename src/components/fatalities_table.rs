//! Fatalities Table Component
//!
//! Grouped fatalities as plain text rows.

use leptos::*;

use crate::state::dashboard::use_dashboard;

/// Table with one row per record: index, Year, Month, Fatalities
#[component]
pub fn FatalitiesTable() -> impl IntoView {
    let dashboard = use_dashboard();

    view! {
        <table id="fatalitiesTable" class="data-table">
            <thead>
                <tr>
                    <th>"#"</th>
                    <th>"Year"</th>
                    <th>"Month"</th>
                    <th>"Fatalities"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    dashboard.rows.get()
                        .into_iter()
                        .map(|row| {
                            let [index, year, month, fatalities] = row.cells();
                            view! {
                                <tr>
                                    <td>{index}</td>
                                    <td>{year}</td>
                                    <td>{month}</td>
                                    <td>{fatalities}</td>
                                </tr>
                            }
                        })
                        .collect_view()
                }}
            </tbody>
        </table>
    }
}
