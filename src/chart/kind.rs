use std::fmt;

use serde::{Deserialize, Serialize};

/// Pie, doughnut and polar-area charts stop being readable past this many slices.
pub const MAX_CIRCULAR_POINTS: usize = 15;

/// A radar chart needs at least this many numeric axes.
pub const MIN_RADAR_DIMENSIONS: usize = 3;

/// Bubble radius used when the data carries none.
pub const DEFAULT_BUBBLE_RADIUS: u32 = 5;

/// The visualization category requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
    Doughnut,
    Scatter,
    Bubble,
    Radar,
    PolarArea,
    Table,
}

impl ChartKind {
    /// Every kind, in the order a chart-type menu lists them.
    pub const ALL: [Self; 9] = [
        Self::Bar,
        Self::Line,
        Self::Pie,
        Self::Doughnut,
        Self::Scatter,
        Self::Bubble,
        Self::Radar,
        Self::PolarArea,
        Self::Table,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Pie => "pie",
            Self::Doughnut => "doughnut",
            Self::Scatter => "scatter",
            Self::Bubble => "bubble",
            Self::Radar => "radar",
            Self::PolarArea => "polarArea",
            Self::Table => "table",
        }
    }

    /// Menu label shown next to the kind.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Bar => "柱状图",
            Self::Line => "折线图",
            Self::Pie => "饼图",
            Self::Doughnut => "环形图",
            Self::Scatter => "散点图",
            Self::Bubble => "气泡图",
            Self::Radar => "雷达图",
            Self::PolarArea => "极坐标图",
            Self::Table => "表格",
        }
    }

    /// Pie, doughnut and polar area.
    #[must_use]
    pub const fn is_circular(self) -> bool {
        matches!(self, Self::Pie | Self::Doughnut | Self::PolarArea)
    }

    /// Scatter and bubble, whose datasets hold `{x, y, r}` points.
    #[must_use]
    pub const fn is_point(self) -> bool {
        matches!(self, Self::Scatter | Self::Bubble)
    }

    /// Bar and line, the only kinds with labelled cartesian axes.
    #[must_use]
    pub const fn has_axes(self) -> bool {
        matches!(self, Self::Bar | Self::Line)
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ChartKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "bar" => Ok(Self::Bar),
            "line" => Ok(Self::Line),
            "pie" => Ok(Self::Pie),
            "doughnut" | "donut" => Ok(Self::Doughnut),
            "scatter" => Ok(Self::Scatter),
            "bubble" => Ok(Self::Bubble),
            "radar" => Ok(Self::Radar),
            "polararea" | "polar" => Ok(Self::PolarArea),
            "table" => Ok(Self::Table),
            _ => Err(format!("Unknown chart kind: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "kind_tests.rs"]
mod tests;
