use crate::cli::TableArgs;
use crate::error::Result;
use crate::export::{ExportFormat, ExportOptions, export_data};
use crate::table::Table;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::context::{read_input, terminated};
use super::print_error;

#[must_use]
pub fn run_table(args: &TableArgs) -> i32 {
    match run_table_impl(args) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Renders the input as a table. CSV goes through the exporter.
///
/// # Errors
/// Returns an error if the input cannot be read or rendered.
pub fn run_table_impl(args: &TableArgs) -> Result<String> {
    let data = read_input(&args.input)?;
    let Some(formatter) = args.format.formatter() else {
        let artifact = export_data(&data, ExportFormat::Csv, &ExportOptions::default())?;
        return Ok(String::from_utf8_lossy(&artifact.bytes).into_owned());
    };
    let table = Table::from_value(&data);
    Ok(terminated(formatter.format_table(&table)?))
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
