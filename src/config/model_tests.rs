use super::*;
use crate::chart::ChartKind;
use crate::series::SeriesBuilder;

#[test]
fn default_config_values() {
    let config = Config::default();
    assert!(config.version.is_none());
    assert!(config.chart.show_legend);
    assert!(config.colors.seed.is_none());
    assert_eq!(config.capabilities, Capabilities::all());
    assert_eq!(config.export, ExportOptions::default());
}

#[test]
fn empty_toml_is_default_config() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn default_config_round_trips_through_toml() {
    let text = toml::to_string(&Config::default()).unwrap();
    assert!(text.contains("[chart]"));
    assert!(text.contains("[export]"));
    let parsed: Config = toml::from_str(&text).unwrap();
    assert_eq!(parsed, Config::default());
}

#[test]
fn configured_seed_gives_reproducible_colors() {
    let config = Config {
        colors: ColorConfig { seed: Some(3) },
        ..Config::default()
    };
    let data = serde_json::json!([4, 5, 6]);
    let first = SeriesBuilder::new(&config.chart)
        .with_colors(config.color_generator(None))
        .build(&data, ChartKind::Pie);
    let second = SeriesBuilder::new(&config.chart)
        .with_colors(config.color_generator(None))
        .build(&data, ChartKind::Pie);
    assert_eq!(first, second);
}

#[test]
fn explicit_seed_overrides_configured_seed() {
    let config = Config {
        colors: ColorConfig { seed: Some(3) },
        ..Config::default()
    };
    let mut overridden = config.color_generator(Some(4));
    let mut expected = ColorGenerator::seeded(4);
    assert_eq!(overridden.random_color(), expected.random_color());
}
