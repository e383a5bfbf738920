//! Dependency resolution: declarations in, transitive closures out.
//!
//! The pipeline runs synchronously and entirely in memory:
//!
//! ```text
//! text ──► parser::parse_line (per line)
//!      ──► DeclarationTable::build      (skips bad lines, collects diagnostics)
//!      ──► compute_closures             (DFS per entity, cycle safe)
//!      ──► format                       (canonical text report)
//! ```
//!
//! # Modules
//!
//! - [`table`] - declaration table and line diagnostics
//! - [`closure`] - transitive closure engine
//! - [`format`] - text and JSON rendering
//! - [`dependency_graph`] - `petgraph` view used for tree rendering
//!
//! # Guarantees
//!
//! - Entities appear in the order they were first declared.
//! - Each closure is sorted in byte order, deduplicated, and never contains
//!   the entity itself.
//! - Cycles of any length resolve instead of failing.
//! - Malformed lines are reported and skipped; they do not change the result
//!   for the remaining lines.
//! - No state is shared between calls, so independent inputs can be resolved
//!   on separate threads.
//!
//! # Example
//!
//! ```rust
//! use depres::resolver::resolve_dependencies;
//!
//! let output = resolve_dependencies("A depends on B\nB depends on C");
//! assert_eq!(output, "A depends on B C \nB depends on C \n");
//! ```

pub mod closure;
pub mod dependency_graph;
pub mod format;
pub mod table;


pub use closure::{ClosureTable, compute_closures};
pub use dependency_graph::DependencyGraph;
pub use format::{OutputFormat, format, format_json, render};
pub use table::{DeclarationTable, LineDiagnostic, TableBuild, build_table};

/// Outcome of a full resolution.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    /// Closure of every declared entity
    pub table: ClosureTable,
    /// Lines skipped while reading the declarations
    pub diagnostics: Vec<LineDiagnostic>,
}

impl Resolution {
    /// Render the closures in the canonical text form.
    #[must_use]
    pub fn to_text(&self) -> String {
        format(&self.table)
    }

    /// Returns `true` if every non-blank line parsed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Parse `text`, compute every closure, and keep the diagnostics.
///
/// `text` must use `\n` line endings only.
#[must_use]
pub fn resolve(text: &str) -> Resolution {
    let TableBuild {
        table,
        diagnostics,
    } = DeclarationTable::build(text);

    let undeclared = table.undeclared();
    if !undeclared.is_empty() {
        tracing::debug!(
            "{} undeclared dependencies treated as leaves: {}",
            undeclared.len(),
            undeclared.into_iter().collect::<Vec<_>>().join(", ")
        );
    }

    Resolution {
        table: compute_closures(&table),
        diagnostics,
    }
}

/// Resolve `text` straight to the text report.
///
/// Skipped lines are only visible through the `tracing` output.
#[must_use]
pub fn resolve_dependencies(text: &str) -> String {
    resolve(text).to_text()
}
