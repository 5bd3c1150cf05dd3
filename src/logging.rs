//! Diagnostic logging to stderr.

use tracing_subscriber::EnvFilter;

/// Filter directive for the crate at the given verbosity.
///
/// `quiet` wins over `verbose`.
#[must_use]
pub fn filter_directive(verbose: u8, quiet: bool) -> String {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    format!("kortex_chart={level}")
}

/// Installs the global subscriber. `RUST_LOG` overrides the verbosity flags.
/// Calling it again is a no-op.
pub fn init(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose, quiet)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
