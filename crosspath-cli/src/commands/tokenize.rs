//! Tokenize command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, read_stdin, GlobalOptions, OutputFormat};
use clap::Args;
use crosspath::report;
use crosspath::tokenizer::Assignment;
use std::io::{self, Write};

/// Parse `key = value, value` lines.
///
/// Lines may end in `\n` or `\r\n`. Lines without a key are skipped.
#[derive(Args)]
pub struct TokenizeCommand {
    /// Text to parse (reads standard input when absent)
    #[arg(long, allow_hyphen_values = true)]
    pub text: Option<String>,

    /// Character separating the key from its values
    #[arg(long, default_value_t = '=')]
    pub key_delimiter: char,

    /// Character separating values
    #[arg(long, default_value_t = ',')]
    pub value_delimiter: char,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

impl TokenizeCommand {
    /// Execute the tokenize command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if self.key_delimiter == self.value_delimiter {
            return Err(CliError::InvalidArguments(format!(
                "key and value delimiters must differ (both are '{}')",
                self.key_delimiter
            )));
        }

        let config = load_configuration(global)?;
        let logger = global.logger(&config);

        let text = match self.text {
            Some(text) => text,
            None => {
                logger.debug("reading document from standard input");
                read_stdin()?
            }
        };

        let assignments =
            Assignment::parse_document_with(&text, self.key_delimiter, self.value_delimiter);
        logger.info(&format!("parsed {} assignment(s)", assignments.len()));

        let stdout = io::stdout();
        let mut out = stdout.lock();
        match self.format {
            OutputFormat::Human => {
                for assignment in &assignments {
                    writeln!(out, "{assignment}")?;
                }
            }
            OutputFormat::Json => writeln!(out, "{}", report::to_json(&assignments)?)?,
        }

        Ok(())
    }
}
