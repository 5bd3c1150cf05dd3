//! Row/column view of a payload, used for the `table` chart kind and the
//! tabular export formats.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::data::{RawData, display_value};

pub const HEADER_INDEX: &str = "索引";
pub const HEADER_KEY: &str = "键";
pub const HEADER_VALUE: &str = "值";

/// One table cell. Numbers stay numeric so spreadsheet exports keep them as
/// numbers; missing and `null` values are empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Empty,
    Number(f64),
    Text(String),
}

impl Cell {
    #[must_use]
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Empty,
            Some(Value::Number(n)) => n.as_f64().map_or_else(|| Self::Text(n.to_string()), Self::Number),
            Some(other) => Self::Text(display_value(other)),
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Lays `data` out as rows.
    ///
    /// Record arrays take their columns from the first record; other arrays
    /// list index and value; mappings list key and value. A `null` payload
    /// gives an empty table.
    #[must_use]
    pub fn from_value(data: &Value) -> Self {
        match RawData::classify(data) {
            RawData::Absent => Self::default(),
            RawData::Scalar(value) => Self {
                headers: vec![HEADER_VALUE.to_string()],
                rows: vec![vec![Cell::from_value(Some(value))]],
            },
            RawData::RecordArray(items) => {
                let headers: Vec<String> = items
                    .first()
                    .and_then(Value::as_object)
                    .map(|first| first.keys().cloned().collect())
                    .unwrap_or_default();
                let rows = items
                    .iter()
                    .map(|item| {
                        headers
                            .iter()
                            .map(|header| Cell::from_value(item.get(header)))
                            .collect()
                    })
                    .collect();
                Self { headers, rows }
            }
            RawData::TupleArray(items) | RawData::ScalarArray(items) => Self {
                headers: vec![HEADER_INDEX.to_string(), HEADER_VALUE.to_string()],
                rows: items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| vec![index_cell(i), Cell::from_value(Some(item))])
                    .collect(),
            },
            RawData::KeyValueMap(map) => Self {
                headers: vec![HEADER_KEY.to_string(), HEADER_VALUE.to_string()],
                rows: map
                    .iter()
                    .map(|(key, value)| vec![Cell::Text(key.clone()), Cell::from_value(Some(value))])
                    .collect(),
            },
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }
}

#[allow(clippy::cast_precision_loss)]
fn index_cell(i: usize) -> Cell {
    Cell::Number(i as f64)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
