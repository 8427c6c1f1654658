//! Join command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, resolve_platform, GlobalOptions, OutputFormat};
use clap::Args;
use crosspath::report::{self, JoinRendering};
use crosspath::Platform;
use std::io::{self, Write};

/// Concatenate paths left to right.
///
/// An absolute path replaces everything before it; a relative one is
/// appended and the result normalized.
#[derive(Args)]
pub struct JoinCommand {
    /// Starting path
    #[arg(value_name = "BASE")]
    pub base: String,

    /// Paths to append, in order
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Platform for the native rendering (defaults to the result's own)
    #[arg(long, value_enum)]
    pub platform: Option<Platform>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

impl JoinCommand {
    /// Execute the join command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let logger = global.logger(&config);
        let platform = resolve_platform(self.platform, &config);

        let mut inputs = Vec::with_capacity(self.paths.len() + 1);
        inputs.push(self.base);
        inputs.extend(self.paths);

        logger.debug(&format!("joining {} path(s)", inputs.len()));
        let rendering = JoinRendering::new(inputs.as_slice(), platform);

        let stdout = io::stdout();
        let mut out = stdout.lock();
        match self.format {
            OutputFormat::Human => rendering.write_human(&mut out)?,
            OutputFormat::Json => {
                writeln!(out, "{}", report::to_json(std::slice::from_ref(&rendering))?)?;
            }
        }

        Ok(())
    }
}
