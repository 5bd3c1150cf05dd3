use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::kind::ChartKind;
use crate::series::NormalizedSeries;

/// Smallest and largest aspect ratio a chart accepts.
pub const ASPECT_RATIO_RANGE: std::ops::RangeInclusive<f64> = 0.5..=3.0;

/// Presentation settings shared by the series builder and the options builder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartConfig {
    /// Chart title; hidden when empty.
    #[serde(default)]
    pub title: String,

    #[serde(default = "default_true")]
    pub show_legend: bool,

    #[serde(default)]
    pub show_data_labels: bool,

    #[serde(default)]
    pub enable_zoom: bool,

    /// Fill color presets, consumed in dataset order.
    #[serde(default)]
    pub background_color: Vec<String>,

    /// Stroke color presets, consumed in dataset order.
    #[serde(default)]
    pub border_color: Vec<String>,

    #[serde(default)]
    pub x_axis_label: String,

    #[serde(default)]
    pub y_axis_label: String,

    #[serde(default = "default_aspect_ratio")]
    pub aspect_ratio: f64,

    #[serde(default = "default_true")]
    pub animation: bool,
}

const fn default_true() -> bool {
    true
}

const fn default_aspect_ratio() -> f64 {
    2.0
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            show_legend: true,
            show_data_labels: false,
            enable_zoom: false,
            background_color: Vec::new(),
            border_color: Vec::new(),
            x_axis_label: String::new(),
            y_axis_label: String::new(),
            aspect_ratio: default_aspect_ratio(),
            animation: true,
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Copies the colors a build produced back into the presets, so the next
    /// build of the same data reuses them.
    pub fn absorb_palette(&mut self, series: &NormalizedSeries) {
        if series.datasets.is_empty() {
            return;
        }
        self.background_color = series
            .datasets
            .iter()
            .flat_map(|dataset| dataset.background_color.colors().iter().cloned())
            .collect();
        self.border_color = series
            .datasets
            .iter()
            .flat_map(|dataset| dataset.border_color.colors().iter().cloned())
            .collect();
    }
}

/// Optional chart-library plugins available to the host.
///
/// Decided once at startup and passed in; the options builder never inspects
/// for plugins itself.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Capabilities {
    #[serde(default = "default_true")]
    pub data_labels: bool,

    #[serde(default = "default_true")]
    pub zoom: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::all()
    }
}

impl Capabilities {
    #[must_use]
    pub const fn all() -> Self {
        Self {
            data_labels: true,
            zoom: true,
        }
    }

    #[must_use]
    pub const fn none() -> Self {
        Self {
            data_labels: false,
            zoom: false,
        }
    }
}

/// Builds the chart-library options object for `kind`.
#[must_use]
pub fn chart_options(kind: ChartKind, config: &ChartConfig, capabilities: Capabilities) -> Value {
    let animation = if config.animation {
        json!({ "duration": 1000, "easing": "easeOutQuart" })
    } else {
        Value::Bool(false)
    };

    let mut plugins = json!({
        "legend": { "display": config.show_legend },
        "title": { "display": !config.title.is_empty(), "text": config.title },
    });
    if capabilities.data_labels {
        plugins["datalabels"] = json!({
            "display": config.show_data_labels,
            "color": "#fff",
            "font": { "weight": "bold" },
        });
    }
    if capabilities.zoom {
        plugins["zoom"] = json!({
            "pan": { "enabled": config.enable_zoom, "mode": "xy" },
            "zoom": {
                "wheel": { "enabled": config.enable_zoom },
                "pinch": { "enabled": config.enable_zoom },
                "mode": "xy",
            },
        });
    }

    let mut options = json!({
        "responsive": true,
        "maintainAspectRatio": true,
        "aspectRatio": config.aspect_ratio,
        "animation": animation,
        "plugins": plugins,
    });

    if kind.has_axes() {
        options["scales"] = json!({
            "x": { "title": axis_title(&config.x_axis_label) },
            "y": { "title": axis_title(&config.y_axis_label) },
        });
    }

    options
}

fn axis_title(label: &str) -> Value {
    json!({ "display": !label.is_empty(), "text": label })
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
