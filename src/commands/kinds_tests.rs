use std::path::PathBuf;

use tempfile::TempDir;

use super::*;
use crate::output::OutputFormat;

fn write_input(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("data.json");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn lists_kinds_for_records() {
    let dir = TempDir::new().unwrap();
    let args = KindsArgs {
        input: write_input(&dir, r#"[{"month": "Jan", "sales": 10}]"#),
        format: OutputFormat::Json,
    };
    let (output, found) = run_kinds_impl(&args).unwrap();
    assert!(found);
    let listed: serde_json::Value = serde_json::from_str(&output).unwrap();
    let kinds: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["kind"].as_str().unwrap())
        .collect();
    assert!(kinds.contains(&"bar"));
    assert!(kinds.contains(&"table"));
    assert!(!kinds.contains(&"radar"));
}

#[test]
fn null_input_has_no_kinds() {
    let dir = TempDir::new().unwrap();
    let args = KindsArgs {
        input: write_input(&dir, "null"),
        format: OutputFormat::Text,
    };
    let (output, found) = run_kinds_impl(&args).unwrap();
    assert!(!found);
    assert_eq!(output, "No suitable chart kind.\n");
}

#[test]
fn csv_format_is_rejected() {
    let dir = TempDir::new().unwrap();
    let args = KindsArgs {
        input: write_input(&dir, "[1, 2]"),
        format: OutputFormat::Csv,
    };
    assert!(matches!(
        run_kinds_impl(&args),
        Err(KortexError::UnsupportedFormat(_))
    ));
}

#[test]
fn missing_input_is_a_read_error() {
    let args = KindsArgs {
        input: PathBuf::from("/nonexistent/data.json"),
        format: OutputFormat::Text,
    };
    assert!(matches!(
        run_kinds_impl(&args),
        Err(KortexError::FileRead { .. })
    ));
    assert_eq!(run_kinds(&args), EXIT_CONFIG_ERROR);
}
