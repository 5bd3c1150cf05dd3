//! Configuration semantic validation.
//!
//! Runs after parsing: range checks, name constraints and color syntax.

use crate::chart::ASPECT_RATIO_RANGE;
use crate::color::Rgba;
use crate::config::Config;
use crate::error::{KortexError, Result};

/// Excel rejects longer worksheet names.
pub const MAX_SHEET_NAME_LEN: usize = 31;

const SHEET_NAME_FORBIDDEN: &[char] = &['[', ']', ':', '*', '?', '/', '\\'];

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if the aspect ratio is out of range, a preset color does
/// not parse, or the export file or sheet name is unusable.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_chart_section(config)?;
    validate_export_section(config)?;
    Ok(())
}

fn validate_chart_section(config: &Config) -> Result<()> {
    let chart = &config.chart;
    if !ASPECT_RATIO_RANGE.contains(&chart.aspect_ratio) {
        return Err(KortexError::Config(format!(
            "chart.aspect_ratio must be between {} and {}, got {}",
            ASPECT_RATIO_RANGE.start(),
            ASPECT_RATIO_RANGE.end(),
            chart.aspect_ratio
        )));
    }

    for (field, presets) in [
        ("background_color", &chart.background_color),
        ("border_color", &chart.border_color),
    ] {
        for (i, color) in presets.iter().enumerate() {
            if color.parse::<Rgba>().is_err() {
                return Err(KortexError::Config(format!(
                    "chart.{field}[{i}] is not a valid color: '{color}'"
                )));
            }
        }
    }
    Ok(())
}

fn validate_export_section(config: &Config) -> Result<()> {
    let export = &config.export;
    if export.file_name.trim().is_empty() {
        return Err(KortexError::Config(
            "export.file_name must not be empty".to_string(),
        ));
    }
    validate_file_name("export.file_name", &export.file_name)?;

    if export.sheet_name.trim().is_empty() {
        return Err(KortexError::Config(
            "export.sheet_name must not be empty".to_string(),
        ));
    }
    let len = export.sheet_name.chars().count();
    if len > MAX_SHEET_NAME_LEN {
        return Err(KortexError::Config(format!(
            "export.sheet_name must be at most {MAX_SHEET_NAME_LEN} characters, got {len}"
        )));
    }
    if export.sheet_name.contains(SHEET_NAME_FORBIDDEN) {
        return Err(KortexError::Config(format!(
            "export.sheet_name must not contain any of []:*?/\\, got '{}'",
            export.sheet_name
        )));
    }
    Ok(())
}

/// Rejects file names that would escape the output directory or archive root.
///
/// # Errors
/// Returns a config error naming `field` if `name` contains `/` or `\`.
pub fn validate_file_name(field: &str, name: &str) -> Result<()> {
    if name.contains(['/', '\\']) {
        return Err(KortexError::Config(format!(
            "{field} must not contain path separators, got '{name}'"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
