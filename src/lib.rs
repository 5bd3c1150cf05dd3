pub mod chart;
pub mod cli;
pub mod color;
pub mod commands;
pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod logging;
pub mod output;
pub mod series;
pub mod table;

pub use error::{KortexError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_NO_SUITABLE_KIND: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
