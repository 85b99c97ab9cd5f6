//! CLI argument definitions using clap
//!
//! Commands:
//! - crimebook serve --csv <path> [--host <host>] [--port <port>]
//! - crimebook stats --csv <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// crimebook - an in-memory crime-incident record store with a REST API
#[derive(Parser, Debug)]
#[command(name = "crimebook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load the source CSV and serve the crimebook API
    Serve {
        /// Path to the source CSV file
        #[arg(long, default_value = "./crime10.csv")]
        csv: PathBuf,

        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value_t = 3000)]
        port: u16,
    },

    /// Load the source CSV, print record count and last record, then exit
    Stats {
        /// Path to the source CSV file
        #[arg(long, default_value = "./crime10.csv")]
        csv: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
