mod json;
mod markdown;
mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

use serde::Serialize;
use serde_json::Value;

use crate::chart::ChartKind;
use crate::error::Result;
use crate::series::NormalizedSeries;
use crate::table::Table;

/// A built chart: the kind, its series and optionally the chart options.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartReport {
    pub kind: ChartKind,
    pub data: NormalizedSeries,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
}

/// Formats the outcome of each CLI command.
pub trait OutputFormatter {
    /// Format the chart kinds a payload suits.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_kinds(&self, kinds: &[ChartKind]) -> Result<String>;

    /// Format a built chart.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_chart(&self, report: &ChartReport) -> Result<String>;

    /// Format a table view.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format_table(&self, table: &Table) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
    Csv,
}

impl OutputFormat {
    /// The formatter for this format. CSV has none: it is rendered by the
    /// exporter.
    #[must_use]
    pub fn formatter(self) -> Option<Box<dyn OutputFormatter>> {
        match self {
            Self::Text => Some(Box::new(TextFormatter)),
            Self::Json => Some(Box::new(JsonFormatter)),
            Self::Markdown => Some(Box::new(MarkdownFormatter)),
            Self::Csv => None,
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            "csv" => Ok(Self::Csv),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
