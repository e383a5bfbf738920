//! Rendering of closure tables.
//!
//! The text form mirrors the input grammar, one entity per line:
//!
//! ```text
//! <entity> depends on <dep1> <dep2> ... <depN> \n
//! ```
//!
//! Every dependency is followed by a single space, so a line always ends in
//! a space before the newline, including when the closure is empty
//! (`"A depends on \n"`). Entities with empty closures are never omitted.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use super::closure::ClosureTable;
use crate::constants::SEPARATOR;

/// Output format for a resolution report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<entity> depends on <deps> ` lines
    #[default]
    Text,
    /// JSON object mapping entity to its sorted dependencies
    Json,
}

/// Render `table` in the canonical text form.
///
/// # Examples
///
/// ```rust
/// use depres::resolver::{build_table, compute_closures, format};
///
/// let closures = compute_closures(&build_table("A depends on B\nB depends on "));
/// assert_eq!(format(&closures), "A depends on B \nB depends on \n");
/// ```
#[must_use]
pub fn format(table: &ClosureTable) -> String {
    let mut out = String::new();
    for (entity, deps) in table.iter() {
        out.push_str(entity);
        out.push_str(SEPARATOR);
        for dep in deps {
            // writing to a String cannot fail
            let _ = write!(out, "{dep} ");
        }
        out.push('\n');
    }
    out
}

/// Render `table` as pretty-printed JSON, keeping declaration order.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn format_json(table: &ClosureTable) -> Result<String> {
    serde_json::to_string_pretty(table).context("Failed to serialize closure table to JSON")
}

/// Render `table` in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(table: &ClosureTable, format_kind: OutputFormat) -> Result<String> {
    match format_kind {
        OutputFormat::Text => Ok(format(table)),
        OutputFormat::Json => format_json(table).map(|mut json| {
            json.push('\n');
            json
        }),
    }
}
