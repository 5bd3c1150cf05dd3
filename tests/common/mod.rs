#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the kortex-chart binary.
#[macro_export]
macro_rules! kortex_chart {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("kortex-chart"))
    };
}

/// Records with a label field and two numeric fields.
pub const SALES_RECORDS: &str = r#"[
  {"month": "Jan", "sales": 10, "cost": 4},
  {"month": "Feb", "sales": 20, "cost": 8},
  {"month": "Mar", "sales": 15, "cost": 6}
]"#;

/// A flat mapping of category to value.
pub const CATEGORY_MAP: &str = r#"{"apples": 3, "pears": 5, "plums": 2}"#;

pub const BASIC_CONFIG: &str = r#"version = "1"

[chart]
title = "Quarterly"
aspect_ratio = 1.5

[colors]
seed = 42

[export]
file_name = "report"
sheet_name = "Data"
"#;

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn create_config(&self, content: &str) {
        self.create_file(".kortex-chart.toml", content);
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }

    /// A command running inside the fixture, isolated from the user config directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = kortex_chart!();
        cmd.current_dir(self.path())
            .env("XDG_CONFIG_HOME", self.path().join(".xdg"))
            .env_remove("RUST_LOG");
        cmd
    }
}
