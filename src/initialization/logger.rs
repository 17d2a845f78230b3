//! Logger setup for the binary and the server.

use std::io::Write;

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::{Level, LevelFilter};

/// Dependency modules that log too much at `debug` while parsing and fetching.
const NOISY_MODULES: &[(&str, LevelFilter)] = &[
    ("html5ever", LevelFilter::Error),
    ("selectors", LevelFilter::Warn),
    ("reqwest", LevelFilter::Info),
    ("hyper", LevelFilter::Info),
    ("hyper_util", LevelFilter::Info),
];

fn paint(level: Level) -> ColoredString {
    let name = level.to_string();
    match level {
        Level::Error => name.red(),
        Level::Warn => name.yellow(),
        Level::Info => name.green(),
        Level::Debug => name.blue(),
        Level::Trace => name.purple(),
    }
}

/// Installs the global `env_logger` logger.
///
/// `RUST_LOG` is read first and `level` is applied on top of it, so
/// `--log-level` wins over the environment. `LogFormat::Json` writes one object
/// per line with `ts`, `level`, `target` and `msg`.
///
/// ```bash
/// RUST_LOG=site_insights=debug site_insights analyze example.com
/// ```
///
/// # Errors
///
/// `InitializationError::LoggerError` if a global logger is already installed.
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    colored::control::set_override(true);

    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    for (module, filter) in NOISY_MODULES {
        builder.filter_module(module, *filter);
    }
    builder.filter_module("site_insights", level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                let msg = serde_json::to_string(&record.args().to_string())
                    .unwrap_or_else(|_| "\"\"".into());
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    msg
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{} [{}] {}: {}",
                    chrono::Local::now().format("%H:%M:%S%.3f"),
                    paint(record.level()),
                    record.target().cyan(),
                    record.args()
                )
            });
        }
    }

    builder.try_init()?;
    Ok(())
}
