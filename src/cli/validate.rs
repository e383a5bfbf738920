//! Check a declarations file without resolving it.
//!
//! Lists every line that would be skipped, with its line number and failure
//! kind, followed by a summary of the declared entities and the names that
//! are only ever used as dependencies.
//!
//! ```bash
//! depres validate deps.txt
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use super::common::read_input;
use crate::core::DepresError;
use crate::resolver::{DeclarationTable, DependencyGraph, TableBuild};

/// Command to report malformed lines and summarize the declarations.
#[derive(Args, Debug)]
pub struct ValidateCommand {
    /// Declarations file, or `-` for stdin
    input: PathBuf,

    /// List the undeclared dependency names
    #[arg(long)]
    show_undeclared: bool,
}

impl ValidateCommand {
    /// Execute the validate command.
    ///
    /// Fails with [`DepresError::InvalidLines`] when any line is malformed.
    pub async fn execute(self) -> Result<()> {
        let text = read_input(&self.input).await?;
        let TableBuild {
            table,
            diagnostics,
        } = DeclarationTable::build(&text);

        for diagnostic in &diagnostics {
            println!("{} {diagnostic}", "✗".red());
        }

        let graph = DependencyGraph::from_table(&table);
        let undeclared = table.undeclared();
        println!(
            "{} declared entities: {}, edges: {}, undeclared dependencies: {}",
            if diagnostics.is_empty() {
                "✓".green()
            } else {
                "✗".red()
            },
            table.len(),
            graph.edge_count(),
            undeclared.len()
        );

        if self.show_undeclared && !undeclared.is_empty() {
            println!("Undeclared: {}", undeclared.into_iter().collect::<Vec<_>>().join(" "));
        }

        if diagnostics.is_empty() {
            Ok(())
        } else {
            Err(DepresError::InvalidLines {
                count: diagnostics.len(),
            }
            .into())
        }
    }
}
