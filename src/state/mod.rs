//! State Management
//!
//! Reactive dashboard state.

pub mod dashboard;
pub mod table;

pub use dashboard::DashboardView;
pub use table::TableRow;
