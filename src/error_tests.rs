use std::path::PathBuf;

use super::*;

#[test]
fn error_display_config() {
    let err = KortexError::Config("invalid aspect ratio".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid aspect ratio");
}

#[test]
fn error_display_file_read() {
    let err = KortexError::FileRead {
        path: PathBuf::from("data.json"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    };
    assert!(err.to_string().contains("data.json"));
}

#[test]
fn error_display_unsupported_format() {
    let err = KortexError::UnsupportedFormat("csv".to_string());
    assert_eq!(err.to_string(), "Unsupported export format: csv");
}

#[test]
fn error_type_returns_correct_type() {
    assert_eq!(KortexError::Config("test".to_string()).error_type(), "Config");
    assert_eq!(
        KortexError::FileRead {
            path: PathBuf::from("data.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        }
        .error_type(),
        "FileRead"
    );
    assert_eq!(
        KortexError::UnsupportedFormat("x".to_string()).error_type(),
        "Usage"
    );
    assert_eq!(
        KortexError::InvalidColor("x".to_string()).error_type(),
        "Color"
    );
    assert_eq!(
        KortexError::Io(std::io::Error::other("test")).error_type(),
        "IO"
    );
}

#[test]
fn json_error_converts_via_from() {
    let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let err: KortexError = parse_err.into();
    assert_eq!(err.error_type(), "JSON");
    assert!(err.to_string().starts_with("JSON error:"));
}

#[test]
fn toml_error_converts_via_from() {
    let parse_err = toml::from_str::<toml::Value>("= broken").unwrap_err();
    let err: KortexError = parse_err.into();
    assert_eq!(err.error_type(), "Config");
}
