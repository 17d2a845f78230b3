//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `site_insights` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - JSON output
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use site_insights::config::{Cli, Command};
use site_insights::initialization::init_logger_with;
use site_insights::server::start_server;
use site_insights::Analyzer;

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.context("Failed to serialize output")
}

#[tokio::main]
async fn main() -> Result<()> {
    // Optional .env with RUST_LOG and friends
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = cli.config();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let analyzer = Analyzer::new().context("Failed to initialize HTTP client")?;

    match cli.command {
        Command::Analyze { url, pretty } => match analyzer.analyze(&url).await {
            Ok(result) => {
                println!("{}", to_json(&result, pretty)?);
                Ok(())
            }
            Err(e) => {
                println!("{}", to_json(&e.to_payload(), pretty)?);
                eprintln!("site_insights error: {:#}", e);
                process::exit(1);
            }
        },
        Command::Serve { port } => start_server(port, analyzer).await,
    }
}
