use std::fs;

use crate::cli::InitArgs;
use crate::error::{KortexError, Result};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::print_error;

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes a commented configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(KortexError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template()).map_err(|source| KortexError::FileWrite {
        path: output_path.clone(),
        source,
    })?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r##"# kortex-chart configuration file
version = "1"

[chart]
# Chart title (empty = no title)
title = ""

# Show the legend (default: true)
show_legend = true

# Show value labels on data points when the datalabels plugin is present
show_data_labels = false

# Enable pan and zoom when the zoom plugin is present
enable_zoom = false

# Preset colors, reused in order before random colors are generated
# background_color = ["rgba(54, 162, 235, 0.6)", "#ff6384"]
# border_color = ["rgba(54, 162, 235, 1)"]

# Axis titles for bar and line charts
x_axis_label = ""
y_axis_label = ""

# Width / height, between 0.5 and 3.0 (default: 2.0)
aspect_ratio = 2.0

# Animate rendering (default: true)
animation = true

[colors]
# Fixed seed for reproducible random colors
# seed = 42

[capabilities]
# Chart-library plugins available to the host
data_labels = true
zoom = true

[export]
# File name without extension
file_name = "export"

# Append a UTC timestamp to exported file names
add_timestamp = false

# Worksheet name for Excel exports (at most 31 characters)
sheet_name = "Sheet1"

# Write the header row in CSV, Excel and PDF exports
include_header = true

[export.pdf]
# Title printed above the table on the first page (empty = no title)
title = ""

# portrait or landscape
orientation = "portrait"

# a4, letter or legal
page_size = "a4"
"##
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
