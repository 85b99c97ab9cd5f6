//! CLI module for crimebook
//!
//! Provides the command-line interface:
//! - serve: load the source CSV and start the HTTP server
//! - stats: load the source CSV, print a summary, and exit

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, serve, stats};
pub use errors::{CliError, CliResult};
