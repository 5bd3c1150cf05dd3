//! Normalized chart series: labels plus styled datasets, shaped the way
//! chart libraries consume them.

mod builder;
mod transforms;

use serde::Serialize;
use serde_json::Value;

pub use builder::{SeriesBuilder, build_series};

/// Dataset label for point clouds taken as-is.
pub const LABEL_POINTS: &str = "数据点";
/// Dataset label for frequency histograms.
pub const LABEL_COUNT: &str = "计数";
/// Dataset label for plain numeric values.
pub const LABEL_VALUES: &str = "数值";
/// Dataset label for a single radar series built from a mapping.
pub const LABEL_DATA: &str = "数据";

/// Positional label for the `n`-th (1-based) element of a scalar array.
#[must_use]
pub fn position_label(n: usize) -> String {
    format!("项目 {n}")
}

/// Fallback name for the `n`-th (1-based) radar series.
#[must_use]
pub fn series_label(n: usize) -> String {
    format!("数据集 {n}")
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedSeries {
    /// Category labels. Point charts carry none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    pub datasets: Vec<Dataset>,
}

impl Default for NormalizedSeries {
    fn default() -> Self {
        Self::empty()
    }
}

impl NormalizedSeries {
    /// `{labels: [], datasets: []}`
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            labels: Some(Vec::new()),
            datasets: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        self.labels.as_deref().unwrap_or_default()
    }
}

/// One named sequence of values plus its styling.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: SeriesData,
    pub background_color: ColorSpec,
    pub border_color: ColorSpec,
    pub border_width: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_hover_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_hover_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_hover_border_color: Option<String>,
}

impl Dataset {
    /// A dataset with default styling: one-pixel border, no point styling.
    #[must_use]
    pub const fn new(
        label: Option<String>,
        data: SeriesData,
        background_color: ColorSpec,
        border_color: ColorSpec,
    ) -> Self {
        Self {
            label,
            data,
            background_color,
            border_color,
            border_width: 1,
            point_radius: None,
            point_hover_radius: None,
            point_background_color: None,
            point_border_color: None,
            point_hover_background_color: None,
            point_hover_border_color: None,
        }
    }

    /// Number of values or points in the dataset.
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.data {
            SeriesData::Values(values) => values.len(),
            SeriesData::Points(points) => points.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Dataset values: one number per label, or free-standing points.
///
/// A `None` value is a gap where the source row had no number.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SeriesData {
    Values(Vec<Option<f64>>),
    Points(Vec<Point>),
}

impl SeriesData {
    #[must_use]
    pub fn from_numbers(values: impl IntoIterator<Item = f64>) -> Self {
        Self::Values(values.into_iter().map(Some).collect())
    }

    #[must_use]
    pub fn values(&self) -> Option<&[Option<f64>]> {
        match self {
            Self::Values(values) => Some(values),
            Self::Points(_) => None,
        }
    }

    #[must_use]
    pub fn points(&self) -> Option<&[Point]> {
        match self {
            Self::Points(points) => Some(points),
            Self::Values(_) => None,
        }
    }
}

/// A scatter or bubble point. Coordinates are kept as given so category axes
/// can use string values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    pub x: Value,
    pub y: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r: Option<Value>,
}

/// Either one color for the whole dataset or one color per value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Single(String),
    PerPoint(Vec<String>),
}

impl ColorSpec {
    #[must_use]
    pub fn colors(&self) -> &[String] {
        match self {
            Self::Single(color) => std::slice::from_ref(color),
            Self::PerPoint(colors) => colors,
        }
    }
}
