use std::io::{Cursor, Write};

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use super::{DEFAULT_FILE_NAME, ExportArtifact, ExportFormat, ExportOptions, render};
use crate::config::validate_file_name;
use crate::error::Result;

const ZIP_MIME: &str = "application/zip";

/// One entry of a batch export.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchItem {
    #[serde(default)]
    pub data: Value,
    /// Entry name inside the archive, without extension.
    pub file_name: String,
    pub format: ExportFormat,
    #[serde(default)]
    pub options: ExportOptions,
}

impl BatchItem {
    #[must_use]
    pub fn new(data: Value, file_name: impl Into<String>, format: ExportFormat) -> Self {
        Self {
            data,
            file_name: file_name.into(),
            format,
            options: ExportOptions::default(),
        }
    }

    fn entry_name(&self) -> String {
        let stem = if self.file_name.is_empty() {
            DEFAULT_FILE_NAME
        } else {
            &self.file_name
        };
        format!("{stem}.{}", self.format.extension())
    }
}

/// Renders every item and bundles the results into `<zip_name>.zip`.
///
/// Entry names come from each item's `file_name`; item options only affect
/// layout (sheet name, header row, PDF page setup). Items that resolve to the
/// same entry name replace each other: the archive keeps the last one, at the
/// position of the first.
///
/// # Errors
/// Returns a config error if `zip_name` or a `file_name` contains a path
/// separator, or the
/// first rendering or archive error; no partial archive is produced.
pub fn batch_export(items: &[BatchItem], zip_name: &str) -> Result<ExportArtifact> {
    validate_file_name("batch zip name", zip_name)?;
    let mut entries: IndexMap<String, Vec<u8>> = IndexMap::with_capacity(items.len());
    for item in items {
        validate_file_name("batch file_name", &item.file_name)?;
        let name = item.entry_name();
        let bytes = render(&item.data, item.format, &item.options)?;
        debug!(entry = %name, bytes = bytes.len(), "rendered batch entry");
        if entries.contains_key(&name) {
            debug!(entry = %name, "replacing earlier batch entry");
        }
        entries.insert(name, bytes);
    }

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, bytes) in &entries {
        zip.start_file(name.as_str(), SimpleFileOptions::default())?;
        zip.write_all(bytes)?;
    }
    let bytes = zip.finish()?.into_inner();

    let stem = if zip_name.is_empty() {
        DEFAULT_FILE_NAME
    } else {
        zip_name
    };
    info!(entries = entries.len(), bytes = bytes.len(), "bundled batch export");
    Ok(ExportArtifact {
        file_name: format!("{stem}.zip"),
        mime: ZIP_MIME,
        bytes,
    })
}
