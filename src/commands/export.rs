use std::path::PathBuf;

use crate::cli::{Cli, ExportArgs};
use crate::config::validate_config_semantics;
use crate::error::Result;
use crate::export::export_data;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::context::{ensure_output_dir, load_config, read_input};
use super::print_error;

#[must_use]
pub fn run_export(args: &ExportArgs, cli: &Cli) -> i32 {
    match run_export_impl(args, cli.no_config) {
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

/// Exports the input and writes the file into the output directory.
///
/// Command-line flags override the `[export]` section of the config.
///
/// # Errors
/// Returns an error if the input or config cannot be loaded, the resulting
/// options are invalid, or the export cannot be rendered or written.
pub fn run_export_impl(args: &ExportArgs, no_config: bool) -> Result<PathBuf> {
    let data = read_input(&args.input)?;
    let mut config = load_config(args.config.as_deref(), no_config)?;

    let options = &mut config.export;
    if let Some(name) = &args.name {
        options.file_name.clone_from(name);
    }
    if args.timestamp {
        options.add_timestamp = true;
    }
    if let Some(sheet) = &args.sheet {
        options.sheet_name.clone_from(sheet);
    }
    if args.no_header {
        options.include_header = false;
    }
    if let Some(title) = &args.title {
        options.pdf.title.clone_from(title);
    }
    if let Some(orientation) = args.orientation {
        options.pdf.orientation = orientation;
    }
    if let Some(page_size) = args.page_size {
        options.pdf.page_size = page_size;
    }
    validate_config_semantics(&config)?;

    let artifact = export_data(&data, args.format, &config.export)?;
    ensure_output_dir(&args.output_dir)?;
    artifact.write_to(&args.output_dir)
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
