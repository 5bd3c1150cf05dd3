use tracing::{debug, warn};

use crate::chart::{ChartKind, chart_options, is_suitable};
use crate::cli::{BuildArgs, Cli};
use crate::error::{KortexError, Result};
use crate::output::ChartReport;
use crate::series::SeriesBuilder;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::context::{load_config, read_input, terminated};
use super::print_error;

#[must_use]
pub fn run_build(args: &BuildArgs, cli: &Cli) -> i32 {
    match run_build_impl(args, cli.no_config) {
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

/// Builds the chart series for the input and renders it.
///
/// An unsuitable kind still builds; the result is usually empty.
///
/// # Errors
/// Returns an error if the input or config cannot be loaded, or the format is `csv`.
pub fn run_build_impl(args: &BuildArgs, no_config: bool) -> Result<String> {
    let formatter = args
        .format
        .formatter()
        .ok_or_else(|| KortexError::UnsupportedFormat("csv".to_string()))?;

    let data = read_input(&args.input)?;
    let mut config = load_config(args.config.as_deref(), no_config)?;
    if let Some(title) = &args.title {
        config.chart.title.clone_from(title);
    }

    if args.kind == ChartKind::Table {
        warn!("table is not a chart kind; use the table command for a row view");
    } else if !is_suitable(&data, args.kind) {
        warn!(kind = %args.kind, "input is not suitable for this chart kind");
    }

    let series = SeriesBuilder::new(&config.chart)
        .with_colors(config.color_generator(args.seed))
        .build(&data, args.kind);
    debug!(datasets = series.datasets.len(), "series built");

    config.chart.absorb_palette(&series);
    let options = args
        .with_options
        .then(|| chart_options(args.kind, &config.chart, config.capabilities));

    let report = ChartReport {
        kind: args.kind,
        data: series,
        options,
    };
    Ok(terminated(formatter.format_chart(&report)?))
}

#[cfg(test)]
#[path = "build_tests.rs"]
mod tests;
