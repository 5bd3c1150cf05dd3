pub mod batch;
pub mod build;
pub mod config;
pub mod context;
pub mod export;
pub mod init;
pub mod kinds;
pub mod table;

pub use batch::{run_batch, run_batch_impl};
pub use build::{run_build, run_build_impl};
pub use config::{run_config, run_config_show_impl, run_config_validate_impl};
pub use context::{load_config, parse_input, read_input};
pub use export::{run_export, run_export_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use kinds::{run_kinds, run_kinds_impl};
pub use table::{run_table, run_table_impl};

use crate::error::KortexError;

/// Prints an error and its causes to stderr.
pub fn print_error(error: &KortexError) {
    eprintln!("Error [{}]: {error}", error.error_type());
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        let text = cause.to_string();
        if !error.to_string().ends_with(&text) {
            eprintln!("  Caused by: {text}");
        }
        source = cause.source();
    }
}
