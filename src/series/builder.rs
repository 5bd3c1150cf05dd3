use serde_json::Value;
use tracing::debug;

use super::NormalizedSeries;
use super::transforms::{Context, TRANSFORMS};
use crate::chart::{ChartConfig, ChartKind};
use crate::color::ColorGenerator;
use crate::data::RawData;

/// Reshapes raw payloads into chart series.
///
/// The builder never fails. Payloads no transform understands produce
/// [`NormalizedSeries::empty`].
pub struct SeriesBuilder<'c> {
    config: &'c ChartConfig,
    colors: ColorGenerator,
}

impl<'c> SeriesBuilder<'c> {
    /// A builder drawing random colors wherever `config` has no presets.
    #[must_use]
    pub fn new(config: &'c ChartConfig) -> Self {
        Self {
            config,
            colors: ColorGenerator::from_entropy(),
        }
    }

    /// Replaces the color source, e.g. with [`ColorGenerator::seeded`].
    #[must_use]
    pub fn with_colors(mut self, colors: ColorGenerator) -> Self {
        self.colors = colors;
        self
    }

    pub fn build(&mut self, data: &Value, kind: ChartKind) -> NormalizedSeries {
        let shape = RawData::classify(data);
        if shape == RawData::Absent {
            return NormalizedSeries::empty();
        }

        let mut ctx = Context::new(kind, self.config, &mut self.colors);
        for transform in TRANSFORMS.iter().filter(|t| t.accepts(kind)) {
            if let Some(series) = (transform.apply)(&mut ctx, shape) {
                debug!(
                    transform = transform.name,
                    %kind,
                    datasets = series.datasets.len(),
                    "built chart series"
                );
                return series;
            }
        }

        debug!(%kind, "no transform matched, returning empty series");
        NormalizedSeries::empty()
    }
}

/// Builds a series with a fresh, unseeded color generator.
#[must_use]
pub fn build_series(data: &Value, kind: ChartKind, config: &ChartConfig) -> NormalizedSeries {
    SeriesBuilder::new(config).build(data, kind)
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
