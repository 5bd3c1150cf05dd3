//! Shape classification for untyped JSON payloads.
//!
//! Every payload handed to the chart pipeline is classified exactly once into a
//! [`RawData`] variant. Downstream code dispatches on the variant instead of
//! re-inspecting the JSON value.

use serde_json::{Map, Value};

/// A JSON object with insertion-ordered keys.
pub type Record = Map<String, Value>;

/// Classified view over a borrowed JSON payload.
///
/// Arrays are classified by their first element, matching how the chart
/// transforms read them: an object first element makes a record array, an
/// array first element makes a tuple array, anything else a scalar array.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawData<'a> {
    /// `null`: nothing to chart.
    Absent,
    /// A bare string, number or boolean.
    Scalar(&'a Value),
    /// Array whose first element is an object.
    RecordArray(&'a [Value]),
    /// Array whose first element is itself an array (`[x, y, r]` tuples).
    TupleArray(&'a [Value]),
    /// Array of scalars. Empty arrays land here too.
    ScalarArray(&'a [Value]),
    /// A single object mapping keys to values.
    KeyValueMap(&'a Record),
}

impl<'a> RawData<'a> {
    #[must_use]
    pub fn classify(value: &'a Value) -> Self {
        match value {
            Value::Null => Self::Absent,
            Value::Bool(_) | Value::Number(_) | Value::String(_) => Self::Scalar(value),
            Value::Object(map) => Self::KeyValueMap(map),
            Value::Array(items) => match items.first() {
                Some(Value::Object(_)) => Self::RecordArray(items),
                Some(Value::Array(_)) => Self::TupleArray(items),
                _ => Self::ScalarArray(items),
            },
        }
    }

    /// Elements of an array payload; empty for non-array shapes.
    #[must_use]
    pub const fn items(&self) -> &'a [Value] {
        match *self {
            Self::RecordArray(items) | Self::TupleArray(items) | Self::ScalarArray(items) => items,
            Self::Absent | Self::Scalar(_) | Self::KeyValueMap(_) => &[],
        }
    }

    /// Rows of a record or tuple array.
    pub fn rows(&self) -> impl Iterator<Item = Row<'a>> + 'a {
        let items = match *self {
            Self::RecordArray(items) | Self::TupleArray(items) => items,
            _ => &[],
        };
        items.iter().map(Row::new)
    }

    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(
            self,
            Self::RecordArray(_) | Self::TupleArray(_) | Self::ScalarArray(_)
        )
    }

    /// Number of data points: array length or mapping key count.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Absent => 0,
            Self::Scalar(_) => 1,
            Self::KeyValueMap(map) => map.len(),
            Self::RecordArray(items) | Self::TupleArray(items) | Self::ScalarArray(items) => {
                items.len()
            }
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One element of an array payload, addressed by field name.
///
/// Tuple rows expose their positions as fields `"0"`, `"1"`, ... so record
/// transforms can treat both forms alike.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Row<'a> {
    Record(&'a Record),
    Tuple(&'a [Value]),
    Scalar(&'a Value),
}

impl<'a> Row<'a> {
    #[must_use]
    pub fn new(value: &'a Value) -> Self {
        match value {
            Value::Object(map) => Self::Record(map),
            Value::Array(items) => Self::Tuple(items),
            other => Self::Scalar(other),
        }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        match *self {
            Self::Record(map) => map.get(key),
            Self::Tuple(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
            Self::Scalar(_) => None,
        }
    }

    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Numeric value of a field, if the field holds a JSON number.
    #[must_use]
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        match *self {
            Self::Record(map) => map.keys().cloned().collect(),
            Self::Tuple(items) => (0..items.len()).map(|i| i.to_string()).collect(),
            Self::Scalar(_) => Vec::new(),
        }
    }

    /// Field names holding JSON numbers, in field order.
    #[must_use]
    pub fn numeric_keys(&self) -> Vec<String> {
        self.keys()
            .into_iter()
            .filter(|key| self.get(key).is_some_and(Value::is_number))
            .collect()
    }

    #[must_use]
    pub const fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }

    #[must_use]
    pub const fn tuple_len(&self) -> Option<usize> {
        match self {
            Self::Tuple(items) => Some(items.len()),
            _ => None,
        }
    }
}

/// Numeric entries of a mapping, in key order.
#[must_use]
pub fn numeric_entries(map: &Record) -> Vec<(String, f64)> {
    map.iter()
        .filter_map(|(key, value)| value.as_f64().map(|n| (key.clone(), n)))
        .collect()
}

/// Renders a value as display text.
///
/// Strings are returned without quotes; nested arrays and objects are rendered
/// as compact JSON.
#[must_use]
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Display text for a value used as a label, or `None` when the value is
/// missing, `null`, `false`, zero or an empty string.
#[must_use]
pub fn label_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(display_value(other)),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
