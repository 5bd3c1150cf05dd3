//! Ordered table of shape-specific series transforms.
//!
//! Each transform states its precondition and returns `None` when the payload
//! does not meet it, handing over to the next entry. Palettes are drawn only
//! after a precondition holds, so a rejected transform never consumes colors.

use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use super::{
    ColorSpec, Dataset, LABEL_COUNT, LABEL_DATA, LABEL_POINTS, LABEL_VALUES, NormalizedSeries,
    Point, SeriesData, position_label, series_label,
};
use crate::chart::{ChartConfig, ChartKind, DEFAULT_BUBBLE_RADIUS, MIN_RADAR_DIMENSIONS};
use crate::color::{AREA_ALPHA, ColorGenerator, Palette, Rgba, restyle};
use crate::data::{RawData, Row, display_value, label_text, numeric_entries};

const POINT_RADIUS: u32 = 5;
const POINT_HOVER_RADIUS: u32 = 8;
const POINT_OUTLINE: &str = "#fff";

pub(super) struct Context<'a> {
    pub kind: ChartKind,
    config: &'a ChartConfig,
    colors: &'a mut ColorGenerator,
}

impl<'a> Context<'a> {
    pub fn new(kind: ChartKind, config: &'a ChartConfig, colors: &'a mut ColorGenerator) -> Self {
        Self {
            kind,
            config,
            colors,
        }
    }

    fn palette(&mut self, count: usize) -> Palette {
        self.colors.generate(
            count,
            &self.config.background_color,
            &self.config.border_color,
        )
    }
}

type Apply = fn(&mut Context<'_>, RawData<'_>) -> Option<NormalizedSeries>;

pub(super) struct Transform {
    pub name: &'static str,
    /// Chart kinds the transform serves; `None` serves every kind.
    kinds: Option<&'static [ChartKind]>,
    pub apply: Apply,
}

impl Transform {
    pub fn accepts(&self, kind: ChartKind) -> bool {
        self.kinds.is_none_or(|kinds| kinds.contains(&kind))
    }
}

/// Tried in order; the first transform whose precondition holds wins.
pub(super) const TRANSFORMS: &[Transform] = &[
    Transform {
        name: "points",
        kinds: None,
        apply: points,
    },
    Transform {
        name: "radar-records",
        kinds: Some(&[ChartKind::Radar]),
        apply: radar_records,
    },
    Transform {
        name: "records",
        kinds: None,
        apply: records,
    },
    Transform {
        name: "scalars",
        kinds: None,
        apply: scalars,
    },
    Transform {
        name: "radar-mapping",
        kinds: Some(&[ChartKind::Radar]),
        apply: radar_mapping,
    },
    Transform {
        name: "polar-mapping",
        kinds: Some(&[ChartKind::PolarArea]),
        apply: polar_mapping,
    },
    Transform {
        name: "mapping-values",
        kinds: None,
        apply: mapping_values,
    },
    Transform {
        name: "mapping-nested",
        kinds: None,
        apply: mapping_nested,
    },
    Transform {
        name: "mapping-keys",
        kinds: None,
        apply: mapping_keys,
    },
];

/// Precondition: a point chart kind, and a record array whose first row has
/// `x` and `y` fields or at least two numeric fields, or a tuple array whose
/// first row has at least two entries.
fn points(ctx: &mut Context<'_>, data: RawData<'_>) -> Option<NormalizedSeries> {
    if !ctx.kind.is_point() {
        return None;
    }
    let bubble = ctx.kind == ChartKind::Bubble;
    let rows: Vec<Row<'_>> = data.rows().collect();
    let first = *rows.first()?;

    let (label, points) = if first.is_record() {
        if first.has("x") && first.has("y") {
            let points = rows
                .iter()
                .map(|row| Point {
                    x: field(row, "x"),
                    y: field(row, "y"),
                    r: row
                        .get("r")
                        .cloned()
                        .or_else(|| bubble.then(default_radius)),
                })
                .collect();
            (LABEL_POINTS.to_string(), points)
        } else {
            let numeric = first.numeric_keys();
            let [x_key, y_key, ..] = numeric.as_slice() else {
                return None;
            };
            let r_key = numeric.get(2).filter(|_| bubble);
            let points = rows
                .iter()
                .map(|row| Point {
                    x: field(row, x_key),
                    y: field(row, y_key),
                    r: bubble.then(|| {
                        r_key
                            .and_then(|key| row.get(key).cloned())
                            .unwrap_or_else(default_radius)
                    }),
                })
                .collect();
            (format!("{x_key} vs {y_key}"), points)
        }
    } else if first.tuple_len().is_some_and(|len| len >= 2) {
        let points = rows
            .iter()
            .map(|row| Point {
                x: field(row, "0"),
                y: field(row, "1"),
                r: bubble.then(|| row.get("2").cloned().unwrap_or_else(default_radius)),
            })
            .collect();
        (LABEL_POINTS.to_string(), points)
    } else {
        return None;
    };

    let palette = ctx.palette(1);
    let mut dataset = Dataset::new(
        Some(label),
        SeriesData::Points(points),
        single(palette.background),
        single(palette.border),
    );
    dataset.point_radius = Some(POINT_RADIUS);
    dataset.point_hover_radius = Some(POINT_HOVER_RADIUS);

    Some(NormalizedSeries {
        labels: None,
        datasets: vec![dataset],
    })
}

/// Precondition: a record array whose first record has at least three numeric
/// fields. Each record becomes one series over the shared numeric axes.
fn radar_records(_ctx: &mut Context<'_>, data: RawData<'_>) -> Option<NormalizedSeries> {
    let RawData::RecordArray(_) = data else {
        return None;
    };
    let rows: Vec<Row<'_>> = data.rows().collect();
    let first = rows.first()?;
    let axes = first.numeric_keys();
    if axes.len() < MIN_RADAR_DIMENSIONS {
        return None;
    }

    let keys = first.keys();
    let label_key = keys
        .iter()
        .find(|key| !axes.contains(key))
        .or_else(|| keys.first())?;

    let datasets = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let color = Rgba::indexed(i).to_string();
            let border = restyle(&color, 1.0);
            let label = label_text(row.get(label_key)).unwrap_or_else(|| series_label(i + 1));
            let values = axes.iter().map(|axis| row.number(axis)).collect();
            radar_dataset(label, values, &color, border)
        })
        .collect();

    Some(NormalizedSeries {
        labels: Some(axes),
        datasets,
    })
}

/// Precondition: a record or tuple array whose first row has at least one
/// field. The first field labels each row; every other numeric field becomes
/// a dataset. Without numeric fields the label values are counted instead.
fn records(ctx: &mut Context<'_>, data: RawData<'_>) -> Option<NormalizedSeries> {
    if !matches!(data, RawData::RecordArray(_) | RawData::TupleArray(_)) {
        return None;
    }
    let rows: Vec<Row<'_>> = data.rows().collect();
    let first = *rows.first()?;
    let keys = first.keys();
    let (label_key, rest) = keys.split_first()?;
    let value_keys: Vec<&String> = rest
        .iter()
        .filter(|key| first.number(key).is_some())
        .collect();

    let labels: Vec<String> = rows
        .iter()
        .map(|row| row.get(label_key).map(display_value).unwrap_or_default())
        .collect();

    if value_keys.is_empty() {
        debug!(field = %label_key, "no numeric fields, counting label occurrences");
        return Some(histogram(ctx, labels));
    }

    let palette = ctx.palette(value_keys.len());
    let datasets = value_keys
        .iter()
        .zip(palette.background.into_iter().zip(palette.border))
        .map(|(key, (background, border))| {
            let values = rows.iter().map(|row| row.number(key)).collect();
            Dataset::new(
                Some((*key).clone()),
                SeriesData::Values(values),
                ColorSpec::Single(background),
                ColorSpec::Single(border),
            )
        })
        .collect();

    Some(NormalizedSeries {
        labels: Some(labels),
        datasets,
    })
}

/// Precondition: a non-empty scalar array. Numbers are plotted by position;
/// an array without numbers becomes a histogram of its values.
fn scalars(ctx: &mut Context<'_>, data: RawData<'_>) -> Option<NormalizedSeries> {
    let RawData::ScalarArray(items) = data else {
        return None;
    };
    if items.is_empty() {
        return None;
    }

    let numeric: Vec<(String, f64)> = items
        .iter()
        .enumerate()
        .filter_map(|(i, value)| value.as_f64().map(|n| (position_label(i + 1), n)))
        .collect();

    if numeric.is_empty() {
        debug!("no numeric values, counting distinct values");
        return Some(histogram(ctx, items.iter().map(display_value).collect()));
    }

    Some(per_point_series(ctx, Some(LABEL_VALUES), numeric))
}

/// Precondition: a mapping with at least three numeric values.
fn radar_mapping(ctx: &mut Context<'_>, data: RawData<'_>) -> Option<NormalizedSeries> {
    let RawData::KeyValueMap(map) = data else {
        return None;
    };
    let entries = numeric_entries(map);
    if entries.len() < MIN_RADAR_DIMENSIONS {
        return None;
    }

    let palette = ctx.palette(1);
    let color = palette.background.into_iter().next().unwrap_or_default();
    let border = palette.border.into_iter().next().unwrap_or_default();
    let (labels, values): (Vec<String>, Vec<Option<f64>>) =
        entries.into_iter().map(|(key, n)| (key, Some(n))).unzip();

    Some(NormalizedSeries {
        labels: Some(labels),
        datasets: vec![radar_dataset(LABEL_DATA.to_string(), values, &color, border)],
    })
}

/// Precondition: a mapping with at least one numeric value. The single
/// dataset is unnamed; a polar chart's legend lists the keys instead.
fn polar_mapping(ctx: &mut Context<'_>, data: RawData<'_>) -> Option<NormalizedSeries> {
    let RawData::KeyValueMap(map) = data else {
        return None;
    };
    let entries = numeric_entries(map);
    if entries.is_empty() {
        return None;
    }
    Some(per_point_series(ctx, None, entries))
}

/// Precondition: a mapping with at least one numeric value.
fn mapping_values(ctx: &mut Context<'_>, data: RawData<'_>) -> Option<NormalizedSeries> {
    let RawData::KeyValueMap(map) = data else {
        return None;
    };
    let entries = numeric_entries(map);
    if entries.is_empty() {
        return None;
    }
    Some(per_point_series(ctx, Some(LABEL_VALUES), entries))
}

/// Precondition: a mapping with a numeric leaf one level down. Leaves are
/// keyed `parent.child`.
fn mapping_nested(ctx: &mut Context<'_>, data: RawData<'_>) -> Option<NormalizedSeries> {
    let RawData::KeyValueMap(map) = data else {
        return None;
    };
    let entries: Vec<(String, f64)> = map
        .iter()
        .filter_map(|(parent, value)| match value {
            Value::Object(inner) => Some(
                numeric_entries(inner)
                    .into_iter()
                    .map(move |(child, n)| (format!("{parent}.{child}"), n)),
            ),
            _ => None,
        })
        .flatten()
        .collect();
    if entries.is_empty() {
        return None;
    }
    debug!(leaves = entries.len(), "no top-level numbers, using nested values");
    Some(per_point_series(ctx, Some(LABEL_VALUES), entries))
}

/// Precondition: a non-empty mapping. Last resort: one count per key.
fn mapping_keys(ctx: &mut Context<'_>, data: RawData<'_>) -> Option<NormalizedSeries> {
    let RawData::KeyValueMap(map) = data else {
        return None;
    };
    if map.is_empty() {
        return None;
    }
    debug!(keys = map.len(), "no numeric values found, counting keys");
    Some(histogram(ctx, map.keys().cloned().collect()))
}

fn field(row: &Row<'_>, key: &str) -> Value {
    row.get(key).cloned().unwrap_or(Value::Null)
}

fn default_radius() -> Value {
    Value::from(DEFAULT_BUBBLE_RADIUS)
}

fn single(colors: Vec<String>) -> ColorSpec {
    ColorSpec::Single(colors.into_iter().next().unwrap_or_default())
}

/// One dataset with a color per value.
fn per_point_series(
    ctx: &mut Context<'_>,
    label: Option<&str>,
    entries: Vec<(String, f64)>,
) -> NormalizedSeries {
    let palette = ctx.palette(entries.len());
    let (labels, values): (Vec<String>, Vec<Option<f64>>) =
        entries.into_iter().map(|(key, n)| (key, Some(n))).unzip();

    NormalizedSeries {
        labels: Some(labels),
        datasets: vec![Dataset::new(
            label.map(str::to_string),
            SeriesData::Values(values),
            ColorSpec::PerPoint(palette.background),
            ColorSpec::PerPoint(palette.border),
        )],
    }
}

/// Counts occurrences, keeping first-seen order.
fn histogram(ctx: &mut Context<'_>, items: Vec<String>) -> NormalizedSeries {
    let mut counts: IndexMap<String, f64> = IndexMap::new();
    for item in items {
        *counts.entry(item).or_insert(0.0) += 1.0;
    }
    let entries: Vec<(String, f64)> = counts.into_iter().collect();
    per_point_series(ctx, Some(LABEL_COUNT), entries)
}

fn radar_dataset(label: String, values: Vec<Option<f64>>, color: &str, border: String) -> Dataset {
    let mut dataset = Dataset::new(
        Some(label),
        SeriesData::Values(values),
        ColorSpec::Single(restyle(color, AREA_ALPHA)),
        ColorSpec::Single(border),
    );
    dataset.point_background_color = Some(color.to_string());
    dataset.point_border_color = Some(POINT_OUTLINE.to_string());
    dataset.point_hover_background_color = Some(POINT_OUTLINE.to_string());
    dataset.point_hover_border_color = Some(color.to_string());
    dataset
}
