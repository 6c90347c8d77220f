//! Ecotab CLI library.
//!
//! Configuration management, provider selection, command execution and
//! output formatting for the `ecotab` command-line tool.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod provider;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
pub use provider::AnyProvider;
