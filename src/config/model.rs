use serde::{Deserialize, Serialize};

use crate::chart::{Capabilities, ChartConfig};
use crate::color::ColorGenerator;
use crate::export::ExportOptions;

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

/// Root of `.kortex-chart.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Config format version; omitted means current.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub chart: ChartConfig,

    #[serde(default)]
    pub colors: ColorConfig,

    #[serde(default)]
    pub capabilities: Capabilities,

    #[serde(default)]
    pub export: ExportOptions,
}

/// Palette generation settings.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColorConfig {
    /// Fixed RNG seed for reproducible colors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl ColorConfig {
    /// Seeded when `seed` is set, otherwise drawn from entropy.
    #[must_use]
    pub fn generator(&self) -> ColorGenerator {
        self.seed
            .map_or_else(ColorGenerator::from_entropy, ColorGenerator::seeded)
    }
}

impl Config {
    /// `seed` takes precedence over the configured seed.
    #[must_use]
    pub fn color_generator(&self, seed: Option<u64>) -> ColorGenerator {
        ColorConfig {
            seed: seed.or(self.colors.seed),
        }
        .generator()
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
