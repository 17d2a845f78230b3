//! Command-line interface definition.

use clap::{Parser, Subcommand};

use crate::config::constants::DEFAULT_PORT;
use crate::config::types::{Config, LogFormat, LogLevel};

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Analyze one page and print the JSON result
/// site_insights analyze example.com --pretty
///
/// # Serve GET /analyze?url=... on port 3000
/// site_insights serve --port 3000
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "site_insights",
    about = "Fetches a web page and reports SEO, PPC, creative and technical insights with a health score."
)]
pub struct Cli {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze a single page and print the result as JSON
    Analyze {
        /// Page to analyze; `https://` is assumed when no scheme is given
        url: String,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Serve the analysis endpoint over HTTP
    Serve {
        /// Port to listen on (127.0.0.1)
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
}

impl Cli {
    /// Library configuration derived from the global flags.
    pub fn config(&self) -> Config {
        Config {
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
        }
    }
}
