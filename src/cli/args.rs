//! CLI argument definitions using clap
//!
//! Commands:
//! - filmoteca serve [--seed <path>] [--port <port>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// filmoteca - A small in-memory movie catalog served over REST
#[derive(Parser, Debug)]
#[command(name = "filmoteca")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load the seed catalog and serve the REST API
    Serve {
        /// Path to the JSON seed file
        #[arg(long, default_value = "./data/movies.json")]
        seed: PathBuf,

        /// Listening port (overrides the PORT environment variable)
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["filmoteca", "serve"]).unwrap();
        let Command::Serve { seed, port } = cli.command;
        assert_eq!(seed, PathBuf::from("./data/movies.json"));
        assert_eq!(port, None);
    }

    #[test]
    fn test_serve_with_flags() {
        let cli =
            Cli::try_parse_from(["filmoteca", "serve", "--seed", "/tmp/m.json", "--port", "8080"])
                .unwrap();
        let Command::Serve { seed, port } = cli.command;
        assert_eq!(seed, PathBuf::from("/tmp/m.json"));
        assert_eq!(port, Some(8080));
    }

    #[test]
    fn test_missing_subcommand_is_an_error() {
        assert!(Cli::try_parse_from(["filmoteca"]).is_err());
    }
}
