//! Data Model
//!
//! Wire types returned by the grouped fatalities endpoint.

use serde::{Deserialize, Serialize};

/// One grouped fatalities data point for a given year and month.
///
/// Records carry no identity beyond their position in the response. Any extra
/// fields the server emits (such as `id`) are ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Month")]
    pub month: String,
    #[serde(rename = "Fatalities")]
    pub fatalities: f64,
}

impl Record {
    pub fn new(year: i32, month: impl Into<String>, fatalities: f64) -> Self {
        Self {
            year,
            month: month.into(),
            fatalities,
        }
    }

    /// Chart label, e.g. `"Jan 2023"`
    pub fn label(&self) -> String {
        format!("{} {}", self.month, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_grouped_response() {
        let json = r#"[
            {"Year": 2023, "Month": "Jan", "Fatalities": 5},
            {"Year": 2023, "Month": "Feb", "Fatalities": 3}
        ]"#;

        let records: Vec<Record> = serde_json::from_str(json).unwrap();
        assert_eq!(
            records,
            vec![Record::new(2023, "Jan", 5.0), Record::new(2023, "Feb", 3.0)]
        );
    }

    #[test]
    fn test_decode_ignores_server_id() {
        let json = r#"[{"id": 12, "Year": 2021, "Month": "March", "Fatalities": 11}]"#;
        let records: Vec<Record> = serde_json::from_str(json).unwrap();
        assert_eq!(records[0].month, "March");
    }

    #[test]
    fn test_decode_rejects_missing_fields() {
        let json = r#"[{"Year": 2021, "Fatalities": 11}]"#;
        assert!(serde_json::from_str::<Vec<Record>>(json).is_err());
    }

    #[test]
    fn test_label() {
        assert_eq!(Record::new(2024, "December", 14.0).label(), "December 2024");
    }
}
