use std::borrow::Cow;

use google_sheets4::api::ValueRange;
use serde_json::Value;

/// Builders for the `ValueRange` payloads the API expects on writes and
/// appends. Everything is row-major.
pub trait ValueRangeFactory {
    fn from_rows(rows: Vec<Vec<Value>>) -> Self;
    fn from_single_row(cells: Vec<Value>) -> Self;
    fn from_string_rows<'a, T: Into<Cow<'a, str>> + Clone>(rows: &[Vec<T>]) -> Self;
}

fn wrap_value<'a, T: Into<Cow<'a, str>>>(value: T) -> Value {
    Value::String(value.into().into_owned())
}

impl ValueRangeFactory for ValueRange {
    fn from_rows(rows: Vec<Vec<Value>>) -> Self {
        ValueRange {
            major_dimension: Some("ROWS".to_string()),
            range: None,
            values: Some(rows),
        }
    }

    fn from_single_row(cells: Vec<Value>) -> Self {
        Self::from_rows(vec![cells])
    }

    fn from_string_rows<'a, T: Into<Cow<'a, str>> + Clone>(rows: &[Vec<T>]) -> Self {
        Self::from_rows(
            rows.iter()
                .map(|row| row.iter().map(|cell| wrap_value(cell.clone())).collect())
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_value() {
        assert_eq!(wrap_value("1"), Value::String("1".to_string()));
    }

    #[test]
    fn test_from_single_row() {
        let value_range = ValueRange::from_single_row(vec![Value::from("a"), Value::from(2)]);
        assert_eq!(
            value_range.major_dimension,
            Some("ROWS".to_string()),
            "Major dimension should be ROWS"
        );
        assert_eq!(value_range.range, None, "Range should be None");
        assert_eq!(
            value_range.values,
            Some(vec![vec![Value::from("a"), Value::from(2)]]),
            "Values should be a single row"
        );
    }

    #[test]
    fn test_from_rows() {
        let rows = vec![
            vec![Value::from("name"), Value::from("price")],
            vec![Value::from("BTC"), Value::from(60000)],
        ];
        let value_range = ValueRange::from_rows(rows.clone());
        assert_eq!(value_range.values, Some(rows));
    }

    #[test]
    fn test_from_string_rows() {
        let value_range = ValueRange::from_string_rows(&[
            vec!["a", "b"], //
            vec!["c", "d"],
        ]);
        assert_eq!(
            value_range.values,
            Some(vec![
                vec![Value::from("a"), Value::from("b")],
                vec![Value::from("c"), Value::from("d")],
            ])
        );
    }
}
