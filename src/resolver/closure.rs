//! Transitive closure computation.
//!
//! For every declared entity the engine collects all entities reachable
//! through one or more "depends on" edges, excluding the entity itself.
//!
//! # Algorithm
//!
//! Depth-first traversal from each entity's direct dependencies with a
//! per-entity `reached` set. A dependency is skipped when it equals the
//! origin or is already in `reached`; otherwise it is added and its own
//! declared dependencies are pushed. The two skip rules guarantee
//! termination on any cyclic input, including self-loops.
//!
//! Traversal always reads the [`DeclarationTable`] and writes into a fresh
//! [`ClosureTable`], so the order in which entities are processed cannot leak
//! one entity's expanded closure into another's traversal. Each entity's
//! computation is independent of the others.
//!
//! Names with no declaration of their own are valid leaves: they are added
//! to `reached` but expand no further.

use indexmap::IndexMap;
use serde::Serialize;
use std::collections::BTreeSet;

use super::table::DeclarationTable;

/// Mapping from entity to its sorted transitive closure.
///
/// Keys are exactly the declaration table's keys, in the same order. Each
/// value is strictly increasing in byte order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ClosureTable {
    entries: IndexMap<String, Vec<String>>,
}

impl ClosureTable {
    /// Closure of `entity`, or `None` if it was never declared.
    #[must_use]
    pub fn get(&self, entity: &str) -> Option<&[String]> {
        self.entries.get(entity).map(Vec::as_slice)
    }

    /// Iterate entities and their closures in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(entity, deps)| (entity.as_str(), deps.as_slice()))
    }

    /// Entities in declaration order.
    pub fn entities(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Re-express the closures as declarations.
    ///
    /// Running [`compute_closures`] on the result yields this table again.
    #[must_use]
    pub fn to_declarations(&self) -> DeclarationTable {
        let mut table = DeclarationTable::new();
        for (entity, deps) in &self.entries {
            table.declare(entity.as_str(), deps.iter().map(String::as_str));
        }
        table
    }
}

/// Compute the transitive closure of every declared entity.
///
/// # Examples
///
/// ```rust
/// use depres::resolver::{build_table, compute_closures};
///
/// let table = build_table("A depends on B\nB depends on C\nC depends on A");
/// let closures = compute_closures(&table);
/// assert_eq!(closures.get("A").unwrap(), ["B", "C"]);
/// assert_eq!(closures.get("C").unwrap(), ["A", "B"]);
/// ```
#[must_use]
pub fn compute_closures(table: &DeclarationTable) -> ClosureTable {
    let entries: IndexMap<String, Vec<String>> = table
        .entities()
        .map(|entity| {
            let reached = reachable_from(table, entity);
            (entity.to_string(), reached.into_iter().map(str::to_string).collect())
        })
        .collect();

    tracing::debug!("Computed closures for {} entities", entries.len());

    ClosureTable {
        entries,
    }
}

/// Everything reachable from `origin`, excluding `origin` itself.
///
/// Uses an explicit stack so recursion depth is not bounded by the call stack.
fn reachable_from<'a>(table: &'a DeclarationTable, origin: &'a str) -> BTreeSet<&'a str> {
    let mut reached: BTreeSet<&str> = BTreeSet::new();
    let mut stack: Vec<&str> = vec![origin];

    while let Some(current) = stack.pop() {
        // undeclared names are leaves
        let Some(direct) = table.get(current) else {
            continue;
        };

        for dep in direct {
            let dep = dep.as_str();
            if dep == origin || !reached.insert(dep) {
                continue;
            }
            tracing::trace!("{origin}: reached {dep} via {current}");
            stack.push(dep);
        }
    }

    reached
}
