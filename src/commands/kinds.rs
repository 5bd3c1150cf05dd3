use crate::chart::suitable_kinds;
use crate::cli::KindsArgs;
use crate::error::{KortexError, Result};
use crate::{EXIT_CONFIG_ERROR, EXIT_NO_SUITABLE_KIND, EXIT_SUCCESS};

use super::context::{read_input, terminated};
use super::print_error;

#[must_use]
pub fn run_kinds(args: &KindsArgs) -> i32 {
    match run_kinds_impl(args) {
        Ok((output, found)) => {
            print!("{output}");
            if found { EXIT_SUCCESS } else { EXIT_NO_SUITABLE_KIND }
        }
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Lists the chart kinds the input suits.
///
/// Returns the rendered list and whether any kind was found.
///
/// # Errors
/// Returns an error if the input cannot be read or the format has no kind listing.
pub fn run_kinds_impl(args: &KindsArgs) -> Result<(String, bool)> {
    let data = read_input(&args.input)?;
    let kinds = suitable_kinds(&data);
    let formatter = args
        .format
        .formatter()
        .ok_or_else(|| KortexError::UnsupportedFormat("csv".to_string()))?;
    let output = formatter.format_kinds(&kinds)?;
    Ok((terminated(output), !kinds.is_empty()))
}

#[cfg(test)]
#[path = "kinds_tests.rs"]
mod tests;
