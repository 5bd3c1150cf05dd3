//! Decides which chart kinds are plausible for a payload.
//!
//! The classifier never fails: absent or unrecognized data is simply not
//! suitable for anything.

use serde_json::Value;

use crate::data::{RawData, Record, Row, numeric_entries};

use super::kind::{ChartKind, MAX_CIRCULAR_POINTS, MIN_RADAR_DIMENSIONS};

/// Returns whether `data` can reasonably be drawn as `kind`.
#[must_use]
pub fn is_suitable(data: &Value, kind: ChartKind) -> bool {
    is_shape_suitable(&RawData::classify(data), kind)
}

/// Kinds suitable for `data`, in menu order.
#[must_use]
pub fn suitable_kinds(data: &Value) -> Vec<ChartKind> {
    let shape = RawData::classify(data);
    ChartKind::ALL
        .into_iter()
        .filter(|kind| is_shape_suitable(&shape, *kind))
        .collect()
}

/// Suitability over an already classified payload.
#[must_use]
pub fn is_shape_suitable(shape: &RawData<'_>, kind: ChartKind) -> bool {
    match *shape {
        RawData::Absent => false,
        _ if kind == ChartKind::Table => true,
        RawData::Scalar(_) => false,
        RawData::KeyValueMap(map) => is_mapping_suitable(map, kind),
        RawData::RecordArray(items) | RawData::TupleArray(items) | RawData::ScalarArray(items) => {
            is_sequence_suitable(items, kind)
        }
    }
}

fn is_sequence_suitable(items: &[Value], kind: ChartKind) -> bool {
    if items.is_empty() {
        return false;
    }
    match kind {
        ChartKind::Pie | ChartKind::Doughnut | ChartKind::PolarArea => {
            items.len() <= MAX_CIRCULAR_POINTS
        }
        ChartKind::Scatter => has_points(items, false),
        ChartKind::Bubble => has_points(items, true),
        ChartKind::Radar => items.iter().map(Row::new).all(|row| {
            row.is_record() && row.numeric_keys().len() >= MIN_RADAR_DIMENSIONS
        }),
        ChartKind::Bar | ChartKind::Line | ChartKind::Table => true,
    }
}

/// Every element is an `{x, y}` object, or every element is a tuple of at
/// least two entries. Bubbles additionally need a numeric radius: an `r`
/// field, or a numeric third tuple entry.
fn has_points(items: &[Value], needs_radius: bool) -> bool {
    let rows = || items.iter().map(Row::new);

    let object_form = rows().all(|row| row.is_record() && row.has("x") && row.has("y"));
    if object_form {
        return !needs_radius || rows().all(|row| row.number("r").is_some());
    }

    let tuple_form = rows().all(|row| row.tuple_len().is_some_and(|len| len >= 2));
    if tuple_form {
        return !needs_radius || rows().all(|row| row.number("2").is_some());
    }

    false
}

fn is_mapping_suitable(map: &Record, kind: ChartKind) -> bool {
    match kind {
        ChartKind::Pie | ChartKind::Doughnut | ChartKind::PolarArea => {
            (1..=MAX_CIRCULAR_POINTS).contains(&map.len())
        }
        ChartKind::Radar => numeric_entries(map).len() >= MIN_RADAR_DIMENSIONS,
        ChartKind::Bar
        | ChartKind::Line
        | ChartKind::Scatter
        | ChartKind::Bubble
        | ChartKind::Table => !map.is_empty(),
    }
}

#[cfg(test)]
#[path = "suitability_tests.rs"]
mod tests;
