//! Dashboard View State
//!
//! Owns the table rows, the error region and the single chart instance, and
//! implements the fetch → table / chart projections.

use leptos::*;

use crate::api;
use crate::chart::{CanvasLineChart, ChartConfig, ChartSlot};
use crate::config::DashboardConfig;
use crate::error::FetchError;
use crate::model::Record;
use crate::state::table::{table_rows, TableRow};

/// State behind the fatalities table, chart and error region
#[derive(Clone, Copy)]
pub struct DashboardView {
    /// Rows currently shown in the table body
    pub rows: RwSignal<Vec<TableRow>>,
    /// Error text; `Some` makes the error region visible
    pub error: RwSignal<Option<String>>,
    /// A request is in flight
    pub loading: RwSignal<bool>,
    /// Millisecond timestamp of the last successful load
    pub last_updated: RwSignal<Option<i64>>,
    /// Configuration of the most recently rendered chart
    pub chart_config: RwSignal<Option<ChartConfig>>,
    /// Canvas the chart is drawn on
    pub canvas: NodeRef<html::Canvas>,
    chart: StoredValue<ChartSlot<CanvasLineChart>>,
    config: StoredValue<DashboardConfig>,
}

impl DashboardView {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            rows: create_rw_signal(Vec::new()),
            error: create_rw_signal(None),
            loading: create_rw_signal(false),
            last_updated: create_rw_signal(None),
            chart_config: create_rw_signal(None),
            canvas: create_node_ref(),
            chart: store_value(ChartSlot::new()),
            config: store_value(config),
        }
    }

    pub fn api_url(&self) -> String {
        self.config.with_value(|c| c.api.url.clone())
    }

    /// Request the grouped fatalities and project them into the table and
    /// chart. Failures are shown in the error region, never returned.
    pub async fn fetch_data(&self) {
        let url = self.api_url();
        log::debug!("Fetching grouped fatalities from {}", url);

        self.loading.set(true);
        let result = api::fetch_grouped_fatalities(&url).await;
        self.loading.set(false);

        self.apply_response(result);
    }

    /// Apply the outcome of a fetch.
    ///
    /// On failure the table and chart keep whatever they showed before.
    pub fn apply_response(&self, result: Result<Vec<Record>, FetchError>) {
        match result {
            Ok(records) => {
                log::info!("Fetched {} grouped fatalities records", records.len());
                self.error.set(None);
                self.populate_table(&records);
                self.render_chart(&records);
                self.last_updated
                    .set(Some(chrono::Utc::now().timestamp_millis()));
            }
            Err(e) => {
                log::error!("Error fetching data: {}", e);
                self.display_error(e.user_message());
            }
        }
    }

    /// Replace all table rows with one row per record, in input order
    pub fn populate_table(&self, records: &[Record]) {
        self.rows.set(table_rows(records));
    }

    /// Show `message` in the error region, overwriting any previous one
    pub fn display_error(&self, message: impl Into<String>) {
        self.error.set(Some(message.into()));
    }

    /// Destroy the current chart and draw a new one for `records`
    pub fn render_chart(&self, records: &[Record]) {
        let config = self
            .config
            .with_value(|c| ChartConfig::line(records, &c.chart));
        log::debug!(
            "Chart config: {}",
            serde_json::to_string(&config).unwrap_or_default()
        );
        self.chart_config.set(Some(config.clone()));

        let Some(canvas) = self.canvas.get_untracked() else {
            log::warn!("Chart canvas is not mounted; skipping render");
            return;
        };
        let canvas: web_sys::HtmlCanvasElement = (*canvas).clone();

        self.chart.update_value(|slot| {
            if let Err(e) = slot.replace_with(|| CanvasLineChart::new(canvas, config)) {
                log::error!("Failed to render chart: {}", e);
            }
        });
    }

    pub fn chart_attached(&self) -> bool {
        self.chart
            .try_with_value(|slot| slot.is_attached())
            .unwrap_or(false)
    }

    /// Release the chart's listeners when the view goes away
    pub fn destroy_chart(&self) {
        self.chart.try_update_value(|slot| slot.clear());
    }
}

/// Provide the dashboard view to all components
pub fn provide_dashboard(config: DashboardConfig) -> DashboardView {
    let view = DashboardView::new(config);
    provide_context(view);
    view
}

pub fn use_dashboard() -> DashboardView {
    use_context::<DashboardView>().expect("DashboardView not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> Vec<Record> {
        vec![Record::new(2023, "Jan", 5.0), Record::new(2023, "Feb", 3.0)]
    }

    #[test]
    fn test_successful_response_populates_table_and_chart() {
        let runtime = create_runtime();
        let view = DashboardView::new(DashboardConfig::default());

        view.apply_response(Ok(scenario()));

        let rows = view.rows.get_untracked();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].cells(), ["1", "2023", "Jan", "5"]);
        assert_eq!(rows[1].cells(), ["2", "2023", "Feb", "3"]);

        let chart = view.chart_config.get_untracked().unwrap();
        assert_eq!(chart.data.labels, vec!["Jan 2023", "Feb 2023"]);
        assert_eq!(chart.dataset().unwrap().data, vec![5.0, 3.0]);

        assert!(view.error.get_untracked().is_none());
        assert!(view.last_updated.get_untracked().is_some());

        runtime.dispose();
    }

    #[test]
    fn test_chart_and_table_share_order() {
        let runtime = create_runtime();
        let view = DashboardView::new(DashboardConfig::default());
        let records = vec![
            Record::new(2024, "June", 10.0),
            Record::new(2021, "April", 7.0),
            Record::new(2022, "January", 12.0),
        ];

        view.apply_response(Ok(records));

        let rows = view.rows.get_untracked();
        let chart = view.chart_config.get_untracked().unwrap();
        let series = &chart.dataset().unwrap().data;

        assert_eq!(rows.len(), chart.data.labels.len());
        assert_eq!(rows.len(), series.len());
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(chart.data.labels[i], format!("{} {}", row.month, row.year));
            assert_eq!(series[i].to_string(), row.fatalities);
        }

        runtime.dispose();
    }

    #[test]
    fn test_empty_response() {
        let runtime = create_runtime();
        let view = DashboardView::new(DashboardConfig::default());

        view.apply_response(Ok(Vec::new()));

        assert!(view.rows.get_untracked().is_empty());
        let chart = view.chart_config.get_untracked().unwrap();
        assert!(chart.data.labels.is_empty());
        assert!(chart.is_empty());
        assert!(view.error.get_untracked().is_none());

        runtime.dispose();
    }

    #[test]
    fn test_populate_table_clears_previous_rows() {
        let runtime = create_runtime();
        let view = DashboardView::new(DashboardConfig::default());

        view.populate_table(&scenario());
        view.populate_table(&[Record::new(2020, "Dec", 1.0)]);

        let rows = view.rows.get_untracked();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].cells(), ["1", "2020", "Dec", "1"]);

        runtime.dispose();
    }

    #[test]
    fn test_failure_keeps_prior_state() {
        let runtime = create_runtime();
        let view = DashboardView::new(DashboardConfig::default());

        view.apply_response(Ok(scenario()));
        view.apply_response(Err(FetchError::Network("connection refused".to_string())));

        let message = view.error.get_untracked().unwrap();
        assert!(!message.is_empty());
        assert_eq!(view.rows.get_untracked().len(), 2);
        assert_eq!(
            view.chart_config.get_untracked().unwrap().data.labels,
            vec!["Jan 2023", "Feb 2023"]
        );

        runtime.dispose();
    }

    #[test]
    fn test_failure_from_initial_state() {
        let runtime = create_runtime();
        let view = DashboardView::new(DashboardConfig::default());

        view.apply_response(Err(FetchError::Status {
            status: 503,
            status_text: "Service Unavailable".to_string(),
        }));

        assert!(view.error.get_untracked().unwrap().contains("503"));
        assert!(view.rows.get_untracked().is_empty());
        assert!(view.chart_config.get_untracked().is_none());
        assert!(!view.chart_attached());

        runtime.dispose();
    }

    #[test]
    fn test_display_error_overwrites() {
        let runtime = create_runtime();
        let view = DashboardView::new(DashboardConfig::default());

        view.display_error("first");
        view.display_error("second");
        view.display_error("second");

        assert_eq!(view.error.get_untracked().as_deref(), Some("second"));

        runtime.dispose();
    }

    #[test]
    fn test_success_hides_previous_error() {
        let runtime = create_runtime();
        let view = DashboardView::new(DashboardConfig::default());

        view.display_error("Error fetching fatalities data: Network error");
        view.apply_response(Ok(scenario()));

        assert!(view.error.get_untracked().is_none());

        runtime.dispose();
    }

    #[test]
    fn test_api_url_from_config() {
        let runtime = create_runtime();
        let view = DashboardView::new(DashboardConfig::default());

        assert_eq!(
            view.api_url(),
            "http://127.0.0.1:5000/api/grouped-fatalities"
        );

        runtime.dispose();
    }
}
