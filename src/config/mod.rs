//! Application configuration and constants.
//!
//! This module provides:
//! - Network constants (request timeout, client identity)
//! - Rule-engine and scoring thresholds
//! - Library configuration and CLI option types

mod cli;
mod constants;
mod types;

// Re-export all constants
pub use cli::{Cli, Command};
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
