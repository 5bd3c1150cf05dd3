use std::fs;
use std::path::Path;

use crate::cli::{ConfigAction, ConfigArgs, ConfigOutputFormat};
use crate::config::parse_config;
use crate::error::{KortexError, Result};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::context::{load_config, terminated};
use super::print_error;

#[must_use]
pub fn run_config(args: &ConfigArgs, no_config: bool) -> i32 {
    let result = match &args.action {
        ConfigAction::Validate { config } => run_config_validate_impl(config)
            .map(|()| format!("Configuration is valid: {}\n", config.display())),
        ConfigAction::Show { config, format } => {
            run_config_show_impl(config.as_deref(), *format, no_config)
        }
    };
    match result {
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

/// Validates a configuration file.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has semantic errors.
pub fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Err(KortexError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }
    let content = fs::read_to_string(config_path).map_err(|source| KortexError::FileRead {
        path: config_path.to_path_buf(),
        source,
    })?;
    parse_config(&content)?;
    Ok(())
}

/// Renders the effective configuration.
///
/// # Errors
/// Returns an error if the config cannot be loaded or serialized.
pub fn run_config_show_impl(
    config_path: Option<&Path>,
    format: ConfigOutputFormat,
    no_config: bool,
) -> Result<String> {
    let config = load_config(config_path, no_config)?;
    let output = match format {
        ConfigOutputFormat::Toml => toml::to_string_pretty(&config)?,
        ConfigOutputFormat::Json => serde_json::to_string_pretty(&config)?,
    };
    Ok(terminated(output))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
