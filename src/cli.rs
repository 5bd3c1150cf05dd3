use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::chart::ChartKind;
use crate::export::{ExportFormat, Orientation, PageSize};
use crate::output::OutputFormat;

/// Input path meaning "read standard input".
pub const STDIN_INPUT: &str = "-";

#[derive(Parser, Debug)]
#[command(name = "kortex-chart")]
#[command(author, version, about = "Turn untyped JSON payloads into chart series, tables and exports")]
#[command(long_about = "Classifies a JSON payload, lists the chart kinds it suits, normalizes it \
    into labels and datasets for a chart library, and exports it as JSON, CSV, text, Excel or PDF.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - No suitable chart kind (kinds command)\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the chart kinds a payload suits
    Kinds(KindsArgs),

    /// Build the chart series for a payload
    Build(BuildArgs),

    /// Show a payload as a table
    Table(TableArgs),

    /// Export a payload to a file
    Export(ExportArgs),

    /// Export several payloads into one zip archive
    Batch(BatchArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
pub struct KindsArgs {
    /// JSON input file, or - for stdin
    #[arg(default_value = STDIN_INPUT)]
    pub input: PathBuf,

    /// Output format [possible values: text, json, markdown]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct BuildArgs {
    /// JSON input file, or - for stdin
    #[arg(default_value = STDIN_INPUT)]
    pub input: PathBuf,

    /// Chart kind (bar, line, pie, doughnut, scatter, bubble, radar, polarArea, table)
    #[arg(short, long)]
    pub kind: ChartKind,

    /// Seed for reproducible colors (overrides config)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Chart title (overrides config)
    #[arg(long)]
    pub title: Option<String>,

    /// Include chart-library options in the output
    #[arg(long)]
    pub with_options: bool,

    /// Output format [possible values: json, text, markdown]
    #[arg(short, long, default_value = "json")]
    pub format: OutputFormat,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct TableArgs {
    /// JSON input file, or - for stdin
    #[arg(default_value = STDIN_INPUT)]
    pub input: PathBuf,

    /// Output format [possible values: text, json, markdown, csv]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// JSON input file, or - for stdin
    #[arg(default_value = STDIN_INPUT)]
    pub input: PathBuf,

    /// Export format [possible values: json, csv, txt, excel, pdf]
    #[arg(short, long)]
    pub format: ExportFormat,

    /// File name without extension (overrides config)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Append a UTC timestamp to the file name
    #[arg(long)]
    pub timestamp: bool,

    /// Worksheet name for Excel exports (overrides config)
    #[arg(long)]
    pub sheet: Option<String>,

    /// Omit the header row in CSV, Excel and PDF exports
    #[arg(long)]
    pub no_header: bool,

    /// Title printed above PDF tables (overrides config)
    #[arg(long)]
    pub title: Option<String>,

    /// PDF page orientation [possible values: portrait, landscape]
    #[arg(long)]
    pub orientation: Option<Orientation>,

    /// PDF page size [possible values: a4, letter, legal]
    #[arg(long)]
    pub page_size: Option<PageSize>,

    /// Directory to write the export into
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct BatchArgs {
    /// JSON manifest: an array of {data | input, fileName, format, options?}
    pub manifest: PathBuf,

    /// Archive name without extension (default: export.file_name from config)
    #[arg(short, long)]
    pub zip_name: Option<String>,

    /// Directory to write the archive into
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".kortex-chart.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate a configuration file
    Validate {
        /// Path to configuration file
        #[arg(short, long, default_value = ".kortex-chart.toml")]
        config: PathBuf,
    },

    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "toml")]
        format: ConfigOutputFormat,
    },
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ConfigOutputFormat {
    #[default]
    Toml,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
