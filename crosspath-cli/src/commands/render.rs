//! Render command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, resolve_platform, GlobalOptions, OutputFormat};
use clap::Args;
use crosspath::report::{self, PathRendering};
use crosspath::Platform;
use std::io::{self, Write};

/// Show how paths render on each platform.
#[derive(Args)]
pub struct RenderCommand {
    /// Paths to render, in POSIX or Windows syntax
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Platform for the native column (defaults to each path's own)
    #[arg(long, value_enum)]
    pub platform: Option<Platform>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

impl RenderCommand {
    /// Execute the render command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let logger = global.logger(&config);
        let platform = resolve_platform(self.platform, &config);

        logger.debug(&format!(
            "rendering {} path(s), native platform {}",
            self.paths.len(),
            platform.map_or_else(|| "per path".to_string(), |p| p.to_string())
        ));

        let renderings: Vec<PathRendering> = self
            .paths
            .iter()
            .map(|path| PathRendering::new(path, platform))
            .collect();

        let stdout = io::stdout();
        let mut out = stdout.lock();
        match self.format {
            OutputFormat::Human => {
                for (index, rendering) in renderings.iter().enumerate() {
                    if index > 0 {
                        writeln!(out)?;
                    }
                    rendering.write_human(&mut out)?;
                }
            }
            OutputFormat::Json => writeln!(out, "{}", report::to_json(&renderings)?)?,
        }

        Ok(())
    }
}
