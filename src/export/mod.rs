//! File exports of raw payloads: JSON, CSV, plain text, Excel workbooks and
//! PDF tables, singly or bundled into a zip archive.

mod batch;
mod delimited;
mod pdf;
mod xlsx;

use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::error::{KortexError, Result};

pub use batch::{BatchItem, batch_export};
pub use pdf::{Orientation, PageSize, PdfOptions};

pub const DEFAULT_FILE_NAME: &str = "export";
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Csv,
    Txt,
    #[serde(alias = "xlsx")]
    Excel,
    Pdf,
}

impl ExportFormat {
    pub const ALL: [Self; 5] = [Self::Json, Self::Csv, Self::Txt, Self::Excel, Self::Pdf];

    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Txt => "txt",
            Self::Excel => "xlsx",
            Self::Pdf => "pdf",
        }
    }

    #[must_use]
    pub const fn mime(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Csv => "text/csv;charset=utf-8",
            Self::Txt => "text/plain;charset=utf-8",
            Self::Excel => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            Self::Pdf => "application/pdf",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "txt" | "text" => Ok(Self::Txt),
            "excel" | "xlsx" => Ok(Self::Excel),
            "pdf" => Ok(Self::Pdf),
            _ => Err(format!("Unknown export format: {s}")),
        }
    }
}

/// Naming and layout options for an export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// File name without extension.
    #[serde(alias = "fileName")]
    pub file_name: String,
    /// Appends `_<UTC timestamp>` to the file name.
    #[serde(alias = "addTimestamp")]
    pub add_timestamp: bool,
    /// Worksheet name for Excel exports.
    #[serde(alias = "sheetName")]
    pub sheet_name: String,
    /// Writes the header row in CSV, Excel and PDF exports.
    #[serde(alias = "includeHeader")]
    pub include_header: bool,
    /// Page setup for PDF exports.
    #[serde(alias = "pdfOptions")]
    pub pdf: PdfOptions,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_FILE_NAME.to_string(),
            add_timestamp: false,
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            include_header: true,
            pdf: PdfOptions::default(),
        }
    }
}

impl ExportOptions {
    #[must_use]
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = name.into();
        self
    }

    #[must_use]
    pub const fn with_timestamp(mut self, add: bool) -> Self {
        self.add_timestamp = add;
        self
    }

    /// File stem as exported at `now`. An empty name falls back to `export`.
    #[must_use]
    pub fn file_stem(&self, now: DateTime<Utc>) -> String {
        let base = if self.file_name.is_empty() {
            DEFAULT_FILE_NAME
        } else {
            &self.file_name
        };
        if self.add_timestamp {
            format!("{base}_{}", timestamp(now))
        } else {
            base.to_string()
        }
    }

    fn sheet_name(&self) -> &str {
        if self.sheet_name.is_empty() {
            DEFAULT_SHEET_NAME
        } else {
            &self.sheet_name
        }
    }
}

/// ISO-8601 UTC time with `:` and `.` replaced by `-`, safe for file names.
#[must_use]
pub fn timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-")
}

/// A rendered export, ready to be written or bundled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    /// Writes the artifact into `dir`, returning the written path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.bytes).map_err(|source| KortexError::FileWrite {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), bytes = self.bytes.len(), "wrote export");
        Ok(path)
    }
}

/// Renders `data` in `format`.
///
/// # Errors
/// Returns an error if serialization or archive assembly fails.
pub fn export_data(data: &Value, format: ExportFormat, options: &ExportOptions) -> Result<ExportArtifact> {
    let stem = options.file_stem(Utc::now());
    let bytes = render(data, format, options)?;
    info!(%stem, ?format, bytes = bytes.len(), "rendered export");
    Ok(ExportArtifact {
        file_name: format!("{stem}.{}", format.extension()),
        mime: format.mime(),
        bytes,
    })
}

pub(crate) fn render(data: &Value, format: ExportFormat, options: &ExportOptions) -> Result<Vec<u8>> {
    match format {
        ExportFormat::Json => Ok(serde_json::to_vec_pretty(data)?),
        ExportFormat::Csv => delimited::to_csv(data, options.include_header),
        ExportFormat::Txt => Ok(match data {
            Value::String(text) => text.clone().into_bytes(),
            other => serde_json::to_vec_pretty(other)?,
        }),
        ExportFormat::Excel => xlsx::workbook(data, options.sheet_name(), options.include_header),
        ExportFormat::Pdf => pdf::document(data, &options.pdf, options.include_header),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
