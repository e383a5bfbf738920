//! Declaration table built from the raw input text.
//!
//! Every line is run through [`parse_line`]. Valid lines insert (or replace)
//! the entity's direct dependency set; invalid lines become
//! [`LineDiagnostic`]s and are otherwise ignored, so one bad line never aborts
//! a resolution.

use indexmap::IndexMap;
use std::collections::BTreeSet;
use std::fmt;

use crate::parser::{ParseError, parse_line};

/// A line that was skipped while building the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDiagnostic {
    /// 1-based line number in the input
    pub line_number: usize,
    /// Why the line was skipped
    pub error: ParseError,
}

impl fmt::Display for LineDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            ParseError::InvalidFormat {
                line,
            } => write!(f, "line {}: skipping invalid format: {line}", self.line_number),
            ParseError::MissingDependency {
                dependency,
                line,
            } => write!(
                f,
                "line {}: skipping invalid dependency '{dependency}': {line}",
                self.line_number
            ),
        }
    }
}

/// Mapping from entity to its directly declared dependencies.
///
/// Keys iterate in first-seen order. A later declaration of the same entity
/// replaces the earlier dependency set but keeps the entity's original
/// position. Dependency sets are deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclarationTable {
    entries: IndexMap<String, BTreeSet<String>>,
}

/// Result of [`DeclarationTable::build`].
#[derive(Debug, Clone, Default)]
pub struct TableBuild {
    /// The declarations that parsed successfully
    pub table: DeclarationTable,
    /// One entry per skipped line, in input order
    pub diagnostics: Vec<LineDiagnostic>,
}

impl DeclarationTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `\n`-separated declaration text.
    ///
    /// Carriage returns must already be stripped. Blank (empty or
    /// whitespace-only) lines are skipped silently. Every other line that
    /// fails to parse produces a diagnostic, which is also logged at `warn`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use depres::resolver::DeclarationTable;
    ///
    /// let build = DeclarationTable::build("A depends on B\n!!!garbage!!!\nB depends on C");
    /// assert_eq!(build.table.len(), 2);
    /// assert_eq!(build.diagnostics.len(), 1);
    /// assert_eq!(build.diagnostics[0].line_number, 2);
    /// ```
    #[must_use]
    pub fn build(text: &str) -> TableBuild {
        let mut table = Self::new();
        let mut diagnostics = Vec::new();

        for (index, line) in text.split('\n').enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            match parse_line(line) {
                Ok(declaration) => {
                    table.declare(declaration.entity, declaration.tokens());
                }
                Err(error) => {
                    let diagnostic = LineDiagnostic {
                        line_number: index + 1,
                        error,
                    };
                    tracing::warn!("{diagnostic}");
                    diagnostics.push(diagnostic);
                }
            }
        }

        tracing::debug!(
            "Built declaration table: {} entities, {} skipped lines",
            table.len(),
            diagnostics.len()
        );

        TableBuild {
            table,
            diagnostics,
        }
    }

    /// Declare `entity`'s direct dependencies, replacing any earlier declaration.
    pub fn declare<I, S>(&mut self, entity: impl Into<String>, dependencies: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entity = entity.into();
        let dependencies: BTreeSet<String> = dependencies.into_iter().map(Into::into).collect();
        if let Some(previous) = self.entries.insert(entity.clone(), dependencies) {
            tracing::debug!(
                "Entity '{entity}' declared again; replacing {} earlier dependencies",
                previous.len()
            );
        }
    }

    /// Direct dependencies of `entity`, or `None` if it was never declared.
    #[must_use]
    pub fn get(&self, entity: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(entity)
    }

    /// Returns `true` if `entity` has its own declaration.
    #[must_use]
    pub fn contains(&self, entity: &str) -> bool {
        self.entries.contains_key(entity)
    }

    /// Iterate entities and their direct dependencies in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.entries.iter().map(|(entity, deps)| (entity.as_str(), deps))
    }

    /// Declared entities in first-seen order.
    pub fn entities(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Names that appear only as dependencies, never as a declared entity.
    ///
    /// These stay valid leaves in closures but get no entry of their own.
    #[must_use]
    pub fn undeclared(&self) -> BTreeSet<&str> {
        self.entries
            .values()
            .flatten()
            .map(String::as_str)
            .filter(|name| !self.entries.contains_key(*name))
            .collect()
    }

    /// Number of declared entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing was declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build a declaration table, discarding the collected diagnostics.
///
/// Diagnostics are still logged through `tracing`.
#[must_use]
pub fn build_table(text: &str) -> DeclarationTable {
    DeclarationTable::build(text).table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deps(table: &DeclarationTable, entity: &str) -> Vec<String> {
        table.get(entity).unwrap().iter().cloned().collect()
    }

    #[test]
    fn test_build_preserves_first_seen_order() {
        let table = build_table("C depends on A\nA depends on B\nB depends on ");
        assert_eq!(table.entities().collect::<Vec<_>>(), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_duplicate_tokens_collapse() {
        let table = build_table("A depends on B B C B");
        assert_eq!(deps(&table, "A"), vec!["B", "C"]);
    }

    #[test]
    fn test_last_declaration_wins_but_keeps_position() {
        let table = build_table("A depends on B\nB depends on C\nA depends on D");
        assert_eq!(table.entities().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(deps(&table, "A"), vec!["D"]);
    }

    #[test]
    fn test_blank_lines_are_silent() {
        let build = DeclarationTable::build("\nA depends on B\n\n   \nB depends on \n");
        assert_eq!(build.table.len(), 2);
        assert!(build.diagnostics.is_empty());
    }

    #[test]
    fn test_malformed_lines_become_diagnostics() {
        let build =
            DeclarationTable::build("A depends on B\n!!!garbage!!!\nB depends on C-D\nC depends on ");
        assert_eq!(build.table.entities().collect::<Vec<_>>(), vec!["A", "C"]);
        assert_eq!(build.diagnostics.len(), 2);

        assert_eq!(build.diagnostics[0].line_number, 2);
        assert_eq!(build.diagnostics[0].error.kind(), "invalid format");
        assert_eq!(
            build.diagnostics[0].to_string(),
            "line 2: skipping invalid format: !!!garbage!!!"
        );

        assert_eq!(build.diagnostics[1].line_number, 3);
        assert_eq!(build.diagnostics[1].error.kind(), "invalid dependency");
        assert!(build.diagnostics[1].to_string().contains("'C-D'"));
    }

    #[test]
    fn test_empty_input() {
        let build = DeclarationTable::build("");
        assert!(build.table.is_empty());
        assert!(build.diagnostics.is_empty());
    }

    #[test]
    fn test_undeclared_leaves() {
        let table = build_table("A depends on B X\nB depends on Y X");
        let undeclared: Vec<_> = table.undeclared().into_iter().collect();
        assert_eq!(undeclared, vec!["X", "Y"]);
        assert!(!table.contains("X"));
    }

    #[test]
    fn test_declare_directly() {
        let mut table = DeclarationTable::new();
        table.declare("A", ["C", "B"]);
        table.declare("B", Vec::<String>::new());
        assert_eq!(deps(&table, "A"), vec!["B", "C"]);
        assert!(table.get("B").unwrap().is_empty());
        assert!(table.get("C").is_none());
    }
}
