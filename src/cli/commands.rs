//! CLI command implementations.

use std::path::Path;

use crate::ingest::load_book;
use crate::observability::{Logger, Severity};
use crate::rest_api::{HttpServer, HttpServerConfig};

use super::args::{Cli, Command};
use super::errors::CliResult;

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    match cli.command {
        Command::Serve { csv, host, port } => serve(&csv, host, port),
        Command::Stats { csv } => stats(&csv),
    }
}

/// Bootstrap from the CSV, then serve until the listener fails
pub fn serve(csv: &Path, host: String, port: u16) -> CliResult<()> {
    let book = match load_book(csv) {
        Ok(book) => book,
        Err(e) => {
            Logger::log_stderr(
                Severity::Fatal,
                "bootstrap_failed",
                &[("path", &csv.display().to_string()), ("reason", &e.to_string())],
            );
            return Err(e.into());
        }
    };

    Logger::log(
        Severity::Info,
        "records_loaded",
        &[
            ("path", &csv.display().to_string()),
            ("rows", &book.len().to_string()),
        ],
    );

    let config = HttpServerConfig {
        host,
        port,
        ..Default::default()
    };
    let server = HttpServer::new(book, config);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(server.start())?;

    Ok(())
}

/// Load the CSV and print a one-screen summary
pub fn stats(csv: &Path) -> CliResult<()> {
    let book = load_book(csv)?;

    println!("records: {}", book.len());
    if let Some(last) = book.records().last() {
        println!("last: {}", serde_json::to_string_pretty(last)?);
    }

    Ok(())
}
