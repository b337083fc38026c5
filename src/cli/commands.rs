//! CLI command implementations
//!
//! Boot sequence for `serve`: resolve configuration, load the seed file,
//! build the store and the HTTP server, then block on the serving loop.

use std::path::Path;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{log_event, Event};
use crate::store::{seed, MovieStore};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch to the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch a parsed command.
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { seed, port } => serve(&seed, port),
    }
}

/// Boot the catalog and serve until the process exits.
pub fn serve(seed_path: &Path, port_flag: Option<u16>) -> CliResult<()> {
    let config = HttpServerConfig::resolve(port_flag);
    log_event(
        Event::BootStart,
        &[
            ("addr", &config.socket_addr()),
            ("seed", &seed_path.display().to_string()),
        ],
    );

    let records = seed::load_seed(seed_path).map_err(|e| CliError::seed_error(e.to_string()))?;
    log_event(Event::SeedLoaded, &[("records", &records.len().to_string())]);

    let store = MovieStore::with_records(records);
    let server = HttpServer::new(config, store);

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to start runtime: {}", e)))?;
    runtime
        .block_on(server.start())
        .map_err(|e| CliError::boot_failed(format!("Server error: {}", e)))
}
