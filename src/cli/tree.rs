//! Display dependency trees, similar to `cargo tree`.
//!
//! Children are listed alphabetically. Entities already on the current path
//! are marked `(circular reference)`. An entity whose dependencies were
//! already drawn earlier in the same tree is marked `(*)`, as in `cargo tree`.
//!
//! # Examples
//!
//! ```bash
//! depres tree deps.txt               # a tree for every declared entity
//! depres tree deps.txt -p A          # only entity A
//! depres tree deps.txt -p A -d 1     # direct dependencies of A
//! ```
//!
//! ```text
//! A
//! ├── B
//! │   └── C
//! └── C
//! ```

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::common::{read_input, write_output};
use crate::core::DepresError;
use crate::resolver::{DependencyGraph, build_table};

/// Command to draw dependency hierarchies.
#[derive(Args, Debug)]
pub struct TreeCommand {
    /// Declarations file, or `-` for stdin
    input: PathBuf,

    /// Show the tree of this entity only
    #[arg(short = 'p', long)]
    package: Option<String>,

    /// Maximum depth to display (unlimited if not specified)
    ///
    /// ```bash
    /// depres tree deps.txt --depth 1    # direct dependencies only
    /// ```
    #[arg(short = 'd', long)]
    depth: Option<usize>,
}

impl TreeCommand {
    /// Execute the tree command.
    pub async fn execute(self) -> Result<()> {
        let text = read_input(&self.input).await?;
        let table = build_table(&text);
        let graph = DependencyGraph::from_table(&table);

        let roots: Vec<&str> = match &self.package {
            Some(name) if table.contains(name) => vec![name.as_str()],
            Some(name) => {
                return Err(DepresError::UnknownEntity {
                    name: name.clone(),
                }
                .into());
            }
            None => table.entities().collect(),
        };

        let output = roots
            .iter()
            .map(|root| graph.to_tree_string(root, self.depth))
            .collect::<Vec<_>>()
            .join("\n");

        write_output(None, &output).await
    }
}
