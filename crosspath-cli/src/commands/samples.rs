//! Samples command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use crosspath::report;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Print the fixed sample report.
#[derive(Args)]
pub struct SamplesCommand {
    /// Write the report to this file instead of standard output
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl SamplesCommand {
    /// Execute the samples command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let logger = global.logger(&config);

        match self.output {
            Some(path) => {
                let mut out = BufWriter::new(File::create(&path)?);
                report::write_sample_report(&mut out)?;
                out.flush()?;
                logger.info(&format!(
                    "{}: wrote sample report to {}",
                    config.display_name(),
                    path.display()
                ));
            }
            None => {
                let stdout = io::stdout();
                let mut out = stdout.lock();
                report::write_sample_report(&mut out)?;
            }
        }

        Ok(())
    }
}
