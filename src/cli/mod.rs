//! Command-line surface of the `rg-matches` binary

pub mod commands;
pub mod logging;

pub use commands::{Cli, Commands, OutputFormat, run};
pub use logging::init_logging;
