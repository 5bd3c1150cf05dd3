use csv::{Terminator, WriterBuilder};
use serde_json::Value;

use crate::data::{RawData, Row, display_value};
use crate::error::{KortexError, Result};

/// Renders a payload as CSV.
///
/// Record and tuple arrays take their columns from the first row; scalar
/// arrays give one value per line; mappings give `key,value` pairs. Missing
/// and `null` cells are left empty.
pub(super) fn to_csv(data: &Value, include_header: bool) -> Result<Vec<u8>> {
    let shape = RawData::classify(data);
    let mut writer = WriterBuilder::new()
        .flexible(true)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    match shape {
        RawData::Absent => {}
        RawData::Scalar(value) => return Ok(display_value(value).into_bytes()),
        RawData::RecordArray(_) | RawData::TupleArray(_) => {
            let rows: Vec<Row<'_>> = shape.rows().collect();
            let headers = rows.first().map(Row::keys).unwrap_or_default();
            if include_header {
                writer.write_record(&headers)?;
            }
            for row in &rows {
                writer.write_record(headers.iter().map(|header| cell_text(row.get(header))))?;
            }
        }
        RawData::ScalarArray(items) => {
            for item in items {
                writer.write_record([cell_text(Some(item))])?;
            }
        }
        RawData::KeyValueMap(map) => {
            if include_header {
                writer.write_record(["key", "value"])?;
            }
            for (key, value) in map {
                writer.write_record([key.clone(), cell_text(Some(value))])?;
            }
        }
    }

    writer
        .into_inner()
        .map_err(|err| KortexError::Io(err.into_error()))
}

fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(other) => display_value(other),
    }
}
