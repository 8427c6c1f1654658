//! Utility functions for CLI operations.
//!
//! Configuration loading, logger selection, output formats, and stdin
//! handling shared across commands.

use crate::error::CliError;
use crosspath::{Config, ConfigBuilder, LogLevel, Logger, Platform};
use std::io::{self, Read};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,
}

impl GlobalOptions {
    /// Logger for a command run: CLI flags first, then the configured level.
    pub fn logger(&self, config: &Config) -> Logger {
        let level = if self.verbose {
            LogLevel::Verbose
        } else if self.quiet {
            LogLevel::Quiet
        } else {
            config.log_level()
        };
        Logger::new(level)
    }
}

/// Output format for commands that print renderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Labelled text blocks.
    #[default]
    Human,

    /// Pretty-printed JSON.
    Json,
}

/// Load layered configuration.
///
/// Precedence, highest first: environment variables, the `--config` file
/// (or `~/.crosspath/config.yaml`), built-in defaults.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(path) = &global.config {
        builder = builder.with_file(path);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// The platform for the native column: the flag, else the configured one.
pub fn resolve_platform(flag: Option<Platform>, config: &Config) -> Option<Platform> {
    flag.or(config.platform)
}

/// Read all of standard input.
pub fn read_stdin() -> Result<String, CliError> {
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    Ok(text)
}
