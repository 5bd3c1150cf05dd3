use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KortexError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
}

impl KortexError {
    /// Short category name used as the heading of CLI error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) | Self::TomlSerialize(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::FileWrite { .. } => "FileWrite",
            Self::UnsupportedFormat(_) => "Usage",
            Self::InvalidColor(_) => "Color",
            Self::Io(_) => "IO",
            Self::Json(_) => "JSON",
            Self::Csv(_) | Self::Archive(_) | Self::Pdf(_) => "Export",
        }
    }
}

pub type Result<T> = std::result::Result<T, KortexError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
