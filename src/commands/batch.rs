use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::cli::{BatchArgs, Cli};
use crate::config::{Config, validate_file_name};
use crate::error::{KortexError, Result};
use crate::export::{BatchItem, ExportFormat, ExportOptions, batch_export};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::context::{ensure_output_dir, load_config, read_input};
use super::print_error;

/// One manifest entry. Exactly one of `data` and `input` supplies the payload;
/// `input` is resolved against the manifest's directory.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ManifestEntry {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    input: Option<PathBuf>,
    file_name: String,
    format: ExportFormat,
    #[serde(default)]
    options: Option<ExportOptions>,
}

#[must_use]
pub fn run_batch(args: &BatchArgs, cli: &Cli) -> i32 {
    match run_batch_impl(args, cli.no_config) {
        Ok(path) => {
            if !cli.quiet {
                println!("{}", path.display());
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Exports every manifest entry into one zip archive in the output directory.
///
/// # Errors
/// Returns an error if the manifest is unreadable or malformed, an entry's
/// input cannot be loaded, or any entry fails to export.
pub fn run_batch_impl(args: &BatchArgs, no_config: bool) -> Result<PathBuf> {
    let config = load_config(args.config.as_deref(), no_config)?;
    let content = std::fs::read_to_string(&args.manifest).map_err(|source| KortexError::FileRead {
        path: args.manifest.clone(),
        source,
    })?;
    let entries: Vec<ManifestEntry> = serde_json::from_str(&content)?;
    let base = args.manifest.parent().unwrap_or_else(|| Path::new(""));

    let items = entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| resolve_entry(index, entry, base, &config))
        .collect::<Result<Vec<_>>>()?;

    let zip_name = args
        .zip_name
        .as_deref()
        .unwrap_or(config.export.file_name.as_str());
    let artifact = batch_export(&items, zip_name)?;
    ensure_output_dir(&args.output_dir)?;
    artifact.write_to(&args.output_dir)
}

fn resolve_entry(
    index: usize,
    entry: ManifestEntry,
    base: &Path,
    config: &Config,
) -> Result<BatchItem> {
    validate_file_name(&format!("Manifest entry {index} fileName"), &entry.file_name)?;
    let data = match (entry.data, entry.input) {
        (Some(_), Some(_)) => {
            return Err(KortexError::Config(format!(
                "Manifest entry {index} sets both 'data' and 'input'"
            )));
        }
        (Some(data), None) => data,
        (None, Some(input)) => {
            let path = if input.is_absolute() { input } else { base.join(input) };
            debug!(entry = index, path = %path.display(), "reading batch input");
            read_input(&path)?
        }
        (None, None) => Value::Null,
    };
    Ok(BatchItem {
        data,
        file_name: entry.file_name,
        format: entry.format,
        options: entry.options.unwrap_or_else(|| config.export.clone()),
    })
}

#[cfg(test)]
#[path = "batch_tests.rs"]
mod tests;
