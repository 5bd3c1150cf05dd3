use std::io::Read;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::cli::STDIN_INPUT;
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::error::{KortexError, Result};

/// Reads a JSON payload from `path`, or from stdin when `path` is `-`.
///
/// # Errors
/// Returns an error if the input cannot be read or is not valid JSON.
pub fn read_input(path: &Path) -> Result<Value> {
    let content = if path == Path::new(STDIN_INPUT) {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(path).map_err(|source| KortexError::FileRead {
            path: path.to_path_buf(),
            source,
        })?
    };
    parse_input(&content)
}

/// Parses a JSON payload. Blank input is treated as `null`.
///
/// # Errors
/// Returns an error if the text is not valid JSON.
pub fn parse_input(content: &str) -> Result<Value> {
    if content.trim().is_empty() {
        debug!("blank input, treating as null");
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(content)?)
}

/// Loads the effective configuration.
///
/// `--no-config` yields defaults; an explicit path must exist.
///
/// # Errors
/// Returns an error if a config file exists but cannot be read or parsed.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }
    let loader = FileConfigLoader::new();
    let result = config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))?;
    Ok(result.config)
}

/// Creates the output directory if it does not exist yet.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|source| KortexError::FileWrite {
        path: dir.to_path_buf(),
        source,
    })
}

/// Ensures CLI output ends with exactly one newline.
#[must_use]
pub fn terminated(mut output: String) -> String {
    if !output.ends_with('\n') {
        output.push('\n');
    }
    output
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
