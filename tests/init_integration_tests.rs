//! Integration tests for the `init` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn init_creates_default_config_file() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    let content = fixture.read(".kortex-chart.toml");
    assert!(content.contains("[chart]"));
    assert!(content.contains("[export]"));
}

#[test]
fn init_creates_config_at_custom_path() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["init", "--output", "custom.toml"])
        .assert()
        .success();

    assert!(fixture.path().join("custom.toml").exists());
}

#[test]
fn init_fails_if_config_exists() {
    let fixture = TestFixture::new();
    fixture.create_config("# existing config\n");

    fixture
        .command()
        .args(["init"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn init_force_overwrites() {
    let fixture = TestFixture::new();
    fixture.create_config("# existing config\n");

    fixture
        .command()
        .args(["init", "--force"])
        .assert()
        .success();

    assert!(fixture.read(".kortex-chart.toml").contains("[capabilities]"));
}

#[test]
fn init_output_passes_validation() {
    let fixture = TestFixture::new();

    fixture.command().arg("init").assert().success();
    fixture
        .command()
        .args(["config", "validate"])
        .assert()
        .success();
}
