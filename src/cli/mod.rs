//! CLI module for filmoteca
//!
//! Provides the command-line interface:
//! - serve: load the seed catalog and enter the serving loop

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
