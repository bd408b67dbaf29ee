//! Line Chart
//!
//! `ChartConfig` describes the single-series fatalities line chart. A renderer
//! turns it into a live `ChartInstance`, and `ChartSlot` guarantees that at most
//! one instance is attached at a time.

pub mod canvas;
pub mod scale;

use serde::Serialize;

use crate::config::ChartStyle;
use crate::model::Record;

pub use canvas::CanvasLineChart;

/// X axis title
pub const X_AXIS_TITLE: &str = "Month";
/// Y axis title
pub const Y_AXIS_TITLE: &str = "Fatalities";

/// Chart type
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
}

/// Legend placement
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Bottom,
}

/// Full chart configuration
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

/// Category labels and the single dataset
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub border_color: String,
    pub background_color: String,
    pub border_width: f64,
    pub fill: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartOptions {
    pub responsive: bool,
    pub plugins: Plugins,
    pub scales: Scales,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Legend {
    pub display: bool,
    pub position: LegendPosition,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub title: AxisTitle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AxisTitle {
    pub display: bool,
    pub text: String,
}

impl AxisTitle {
    fn shown(text: &str) -> Self {
        Self {
            display: true,
            text: text.to_string(),
        }
    }
}

impl ChartConfig {
    /// Build the fatalities line chart for `records`, keeping their order.
    pub fn line(records: &[Record], style: &ChartStyle) -> Self {
        Self {
            kind: ChartKind::Line,
            data: ChartData {
                labels: labels(records),
                datasets: vec![Dataset {
                    label: style.dataset_label.clone(),
                    data: series(records),
                    border_color: style.border_color.clone(),
                    background_color: style.background_color.clone(),
                    border_width: style.border_width,
                    fill: style.fill,
                }],
            },
            options: ChartOptions {
                responsive: true,
                plugins: Plugins {
                    legend: Legend {
                        display: true,
                        position: LegendPosition::Top,
                    },
                },
                scales: Scales {
                    x: Axis {
                        title: AxisTitle::shown(X_AXIS_TITLE),
                        begin_at_zero: None,
                    },
                    y: Axis {
                        title: AxisTitle::shown(Y_AXIS_TITLE),
                        begin_at_zero: Some(true),
                    },
                },
            },
        }
    }

    /// The one dataset this chart draws
    pub fn dataset(&self) -> Option<&Dataset> {
        self.data.datasets.first()
    }

    pub fn is_empty(&self) -> bool {
        self.dataset().map(|d| d.data.is_empty()).unwrap_or(true)
    }
}

/// `"{Month} {Year}"` per record, in input order
pub fn labels(records: &[Record]) -> Vec<String> {
    records.iter().map(Record::label).collect()
}

/// Fatalities per record, in input order
pub fn series(records: &[Record]) -> Vec<f64> {
    records.iter().map(|r| r.fatalities).collect()
}

/// A rendered chart that owns resources on its canvas
pub trait ChartInstance {
    /// Release listeners and clear the drawing surface
    fn destroy(&mut self);
}

/// Holder of the single live chart instance.
///
/// The previous instance is always destroyed before its replacement is built,
/// so a canvas never carries two overlapping charts.
pub struct ChartSlot<C: ChartInstance> {
    current: Option<C>,
}

impl<C: ChartInstance> Default for ChartSlot<C> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<C: ChartInstance> ChartSlot<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Destroy the current instance, then store the one produced by `build`.
    ///
    /// If `build` fails the slot stays empty.
    pub fn replace_with<E, F>(&mut self, build: F) -> Result<&mut C, E>
    where
        F: FnOnce() -> Result<C, E>,
    {
        self.clear();
        let chart = build()?;
        Ok(self.current.insert(chart))
    }

    /// Destroy the current instance without replacing it
    pub fn clear(&mut self) {
        if let Some(mut chart) = self.current.take() {
            chart.destroy();
        }
    }

    pub fn is_attached(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&C> {
        self.current.as_ref()
    }
}
