//! Resolve declarations into their transitive closures.
//!
//! # Examples
//!
//! ```bash
//! depres resolve deps.txt                    # text report on stdout
//! depres resolve deps.txt --format json      # JSON object in declaration order
//! depres resolve deps.txt -o resolved.txt    # write the report to a file
//! cat deps.txt | depres resolve -            # read from stdin
//! depres resolve deps.txt --strict           # fail if any line was skipped
//! ```

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::common::{read_input, write_output};
use crate::config::ResolverConfig;
use crate::core::DepresError;
use crate::resolver::{OutputFormat, render, resolve};

/// Command to print the transitive closure of every declared entity.
#[derive(Args, Debug)]
pub struct ResolveCommand {
    /// Declarations file, or `-` for stdin
    input: PathBuf,

    /// Output format (defaults to the configured format, then `text`)
    #[arg(short = 'f', long, value_enum)]
    format: Option<OutputFormat>,

    /// Write the report to this file instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Exit with an error if any line could not be parsed
    ///
    /// Without this flag, malformed lines are reported on stderr and the
    /// remaining declarations are resolved as usual.
    #[arg(long)]
    strict: bool,
}

impl ResolveCommand {
    /// Execute the resolve command.
    pub async fn execute(self, config: &ResolverConfig) -> Result<()> {
        let text = read_input(&self.input).await?;
        let resolution = resolve(&text);

        if (self.strict || config.strict) && !resolution.is_clean() {
            return Err(DepresError::InvalidLines {
                count: resolution.diagnostics.len(),
            }
            .into());
        }

        let format = self.format.unwrap_or(config.format);
        let rendered = render(&resolution.table, format)?;
        write_output(self.output.as_deref(), &rendered).await
    }
}
