//! Table projection
//!
//! One display row per record, in response order.

use crate::model::Record;

/// A rendered table row. All cells are plain text.
#[derive(Clone, Debug, PartialEq)]
pub struct TableRow {
    /// 1-based position in the response
    pub index: usize,
    pub year: String,
    pub month: String,
    pub fatalities: String,
}

impl TableRow {
    pub fn new(index: usize, record: &Record) -> Self {
        Self {
            index,
            year: record.year.to_string(),
            month: record.month.clone(),
            fatalities: record.fatalities.to_string(),
        }
    }

    /// Cells in column order: index, Year, Month, Fatalities
    pub fn cells(&self) -> [String; 4] {
        [
            self.index.to_string(),
            self.year.clone(),
            self.month.clone(),
            self.fatalities.clone(),
        ]
    }
}

/// Project `records` into table rows without sorting or filtering
pub fn table_rows(records: &[Record]) -> Vec<TableRow> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| TableRow::new(i + 1, record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_rows() {
        let records = vec![Record::new(2023, "Jan", 5.0), Record::new(2023, "Feb", 3.0)];
        let rows = table_rows(&records);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].cells(), ["1", "2023", "Jan", "5"]);
        assert_eq!(rows[1].cells(), ["2", "2023", "Feb", "3"]);
    }

    #[test]
    fn test_index_is_one_based_position() {
        let records: Vec<Record> = (0..25)
            .map(|i| Record::new(2020 + i / 12, "Month", i as f64))
            .collect();
        let rows = table_rows(&records);

        assert_eq!(rows.len(), 25);
        for (pos, row) in rows.iter().enumerate() {
            assert_eq!(row.index, pos + 1);
        }
    }

    #[test]
    fn test_fractional_fatalities_kept() {
        let rows = table_rows(&[Record::new(2022, "May", 2.5)]);
        assert_eq!(rows[0].fatalities, "2.5");
    }

    #[test]
    fn test_empty() {
        assert!(table_rows(&[]).is_empty());
    }
}
