//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, JoinCommand, RenderCommand, SamplesCommand, TokenizeCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Cross-platform path rendering and key/value tokenizing.
#[derive(Parser)]
#[command(name = "crosspath")]
#[command(
    version,
    about = "Render cross-platform paths and tokenize key/value text",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Read configuration from this file instead of ~/.crosspath/config.yaml
    #[arg(long, value_name = "PATH", global = true, env = "CROSSPATH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Show how paths render on each platform
    Render(RenderCommand),

    /// Concatenate paths left to right
    Join(JoinCommand),

    /// Parse key = value, value lines
    Tokenize(TokenizeCommand),

    /// Print the fixed sample report
    Samples(SamplesCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["crosspath", "render", "/c/one", "--verbose"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Render(_)));
    }

    #[test]
    fn test_config_flag() {
        let cli =
            Cli::try_parse_from(["crosspath", "--config", "/tmp/x.yaml", "samples"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/x.yaml")));
    }
}
