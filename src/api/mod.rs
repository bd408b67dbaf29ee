//! HTTP API
//!
//! Client for the grouped fatalities endpoint.

pub mod client;

pub use client::fetch_grouped_fatalities;
