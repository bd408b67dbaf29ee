//! # Fatalities Dashboard
//!
//! Client-side rendered Leptos widget that fetches grouped monthly road
//! fatalities from a REST endpoint, lists them in a table and plots them as a
//! line chart.
//!
//! ## Modules
//!
//! - [`api`]: HTTP client for the grouped fatalities endpoint
//! - [`chart`]: Line chart configuration, lifecycle and canvas renderer
//! - [`state`]: `DashboardView` and the table projection
//! - [`components`] / [`pages`]: Leptos views
//! - [`config`]: Embedded TOML configuration

pub mod api;
pub mod app;
pub mod chart;
pub mod components;
pub mod config;
pub mod error;
pub mod model;
pub mod pages;
pub mod state;

pub use chart::{ChartConfig, ChartInstance, ChartSlot};
pub use config::DashboardConfig;
pub use error::{ChartError, ConfigError, FetchError};
pub use model::Record;
pub use state::{DashboardView, TableRow};
