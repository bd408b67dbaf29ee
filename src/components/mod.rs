//! UI Components
//!
//! Leptos components for the fatalities dashboard.

pub mod error_message;
pub mod fatalities_chart;
pub mod fatalities_table;
pub mod status;

pub use error_message::ErrorMessage;
pub use fatalities_chart::FatalitiesChart;
pub use fatalities_table::FatalitiesTable;
pub use status::Status;
