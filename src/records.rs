//! Header-to-record mapping: treats the first row of a range as field names
//! and turns the remaining rows into keyed records.

use serde_json::{Map, Value};

pub type Record = Map<String, Value>;

/// Renders a cell value the way the sheet displays it: strings lose their
/// JSON quotes, null becomes empty.
pub fn cell_display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

pub trait IntoCellStrings {
    fn into_cell_strings(self) -> Vec<Vec<String>>;
}

impl IntoCellStrings for Vec<Vec<Value>> {
    fn into_cell_strings(self) -> Vec<Vec<String>> {
        self.into_iter()
            .map(|row| row.iter().map(cell_display).collect())
            .collect()
    }
}

/// First row is the header; each following row zips against it. Short rows
/// fill missing fields with null, cells beyond the header width are dropped.
pub fn rows_to_records(rows: Vec<Vec<Value>>) -> Vec<Record> {
    let mut rows = rows.into_iter();
    let Some(header) = rows.next() else {
        return Vec::new();
    };
    let headers: Vec<String> = header.iter().map(cell_display).collect();

    rows.map(|row| {
        let mut cells = row.into_iter();
        headers
            .iter()
            .map(|name| (name.clone(), cells.next().unwrap_or(Value::Null)))
            .collect()
    })
    .collect()
}

/// Inverse shaping: lays out a record's fields in header order, null where a
/// field is absent.
pub fn record_to_row(headers: &[String], record: &Record) -> Vec<Value> {
    headers
        .iter()
        .map(|name| record.get(name).cloned().unwrap_or(Value::Null))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Vec<Value>> {
        vec![
            vec![Value::from("name"), Value::from("price")],
            vec![Value::from("BTC"), Value::from(60000)],
            vec![Value::from("ETH")],
        ]
    }

    #[test]
    fn test_rows_to_records() {
        let records = rows_to_records(rows());
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("name"), Some(&Value::from("BTC")));
        assert_eq!(records[0].get("price"), Some(&Value::from(60000)));
    }

    #[test]
    fn test_short_rows_fill_with_null() {
        let records = rows_to_records(rows());
        assert_eq!(records[1].get("name"), Some(&Value::from("ETH")));
        assert_eq!(records[1].get("price"), Some(&Value::Null));
    }

    #[test]
    fn test_extra_cells_are_dropped() {
        let records = rows_to_records(vec![
            vec![Value::from("a")],
            vec![Value::from(1), Value::from(2)],
        ]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].len(), 1);
        assert_eq!(records[0].get("a"), Some(&Value::from(1)));
    }

    #[test]
    fn test_empty_input() {
        assert!(rows_to_records(Vec::new()).is_empty());
    }

    #[test]
    fn test_header_only_input() {
        let records = rows_to_records(vec![vec![Value::from("name")]]);
        assert!(records.is_empty());
    }

    #[test]
    fn test_record_to_row() {
        let headers = vec!["name".to_string(), "price".to_string()];
        let mut record = Record::new();
        record.insert("price".to_string(), Value::from(42));
        let row = record_to_row(&headers, &record);
        assert_eq!(row, vec![Value::Null, Value::from(42)]);
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(cell_display(&Value::from("BTC")), "BTC");
        assert_eq!(cell_display(&Value::from(60000)), "60000");
        assert_eq!(cell_display(&Value::Null), "");
        assert_eq!(cell_display(&Value::from(true)), "true");
    }

    #[test]
    fn test_into_cell_strings() {
        let strings = rows().into_cell_strings();
        assert_eq!(strings[1], vec!["BTC".to_string(), "60000".to_string()]);
    }
}
