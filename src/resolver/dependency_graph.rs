//! Graph view of a declaration table.
//!
//! The closure engine works directly on the [`DeclarationTable`]; this module
//! builds a `petgraph` [`DiGraph`] from the same declarations for the
//! tree rendering behind `depres tree` and for graph statistics.

use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{HashMap, HashSet};

use super::table::DeclarationTable;

/// Marker for an entity whose dependencies were already drawn elsewhere.
const SEEN_MARKER: &str = "(*)";

/// Marker for an entity that already appears on the path from the root.
const CYCLE_MARKER: &str = "(circular reference)";

/// Directed graph where an edge `a -> b` means "a depends on b".
pub struct DependencyGraph {
    /// The underlying directed graph.
    graph: DiGraph<String, ()>,
    /// Map from entity names to their graph indices.
    node_map: HashMap<String, NodeIndex>,
}

/// Per-render state for [`DependencyGraph::to_tree_string`].
struct TreeWalk {
    max_depth: Option<usize>,
    /// Nodes from the root down to the current node's parent.
    path: Vec<NodeIndex>,
    /// Nodes whose children have already been drawn in this tree.
    expanded: HashSet<NodeIndex>,
}

impl DependencyGraph {
    fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_map: HashMap::new(),
        }
    }

    /// Build the graph for every declaration in `table`.
    ///
    /// Undeclared dependency names become nodes without outgoing edges.
    pub fn from_table(table: &DeclarationTable) -> Self {
        let mut graph = Self::new();
        for (entity, deps) in table.iter() {
            graph.ensure_node(entity);
            for dep in deps {
                graph.add_dependency(entity, dep);
            }
        }
        graph
    }

    /// Add a node to the graph if it doesn't already exist.
    ///
    /// Returns the node index in the graph.
    fn ensure_node(&mut self, name: &str) -> NodeIndex {
        if let Some(&index) = self.node_map.get(name) {
            index
        } else {
            let index = self.graph.add_node(name.to_string());
            self.node_map.insert(name.to_string(), index);
            index
        }
    }

    fn add_dependency(&mut self, from: &str, to: &str) {
        let from_idx = self.ensure_node(from);
        let to_idx = self.ensure_node(to);

        if !self.graph.contains_edge(from_idx, to_idx) {
            self.graph.add_edge(from_idx, to_idx, ());
        }
    }

    /// Everything reachable from `name`, excluding `name` itself.
    #[cfg(test)]
    pub(crate) fn reachable(&self, name: &str) -> std::collections::BTreeSet<&str> {
        let Some(&start) = self.node_map.get(name) else {
            return std::collections::BTreeSet::new();
        };
        let mut dfs = petgraph::visit::Dfs::new(&self.graph, start);
        let mut reached = std::collections::BTreeSet::new();
        while let Some(idx) = dfs.next(&self.graph) {
            if idx != start {
                reached.insert(self.graph[idx].as_str());
            }
        }
        reached
    }

    /// Get the total number of edges (dependencies) in the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Render the dependency hierarchy below `root`.
    ///
    /// Children are listed alphabetically. Each entity's dependencies are
    /// drawn once per tree: a later occurrence of an entity that has
    /// dependencies is marked `(*)` and not expanded again, and an entity that
    /// already appears on the path from the root is marked
    /// `(circular reference)`. The output therefore grows with the number of
    /// edges, not the number of paths. `max_depth` limits how many levels
    /// below the root are drawn.
    pub fn to_tree_string(&self, root: &str, max_depth: Option<usize>) -> String {
        let mut result = format!("{root}\n");
        let Some(&root_idx) = self.node_map.get(root) else {
            return result;
        };

        let mut walk = TreeWalk {
            max_depth,
            path: vec![root_idx],
            expanded: HashSet::from([root_idx]),
        };
        self.build_children(root_idx, &mut result, "", 1, &mut walk);
        result
    }

    fn build_children(
        &self,
        node: NodeIndex,
        result: &mut String,
        prefix: &str,
        depth: usize,
        walk: &mut TreeWalk,
    ) {
        let children = self.sorted_neighbors(node);
        for (i, child) in children.iter().enumerate() {
            let is_last = i == children.len() - 1;
            self.build_tree_string(*child, result, prefix, is_last, depth, walk);
        }
    }

    fn build_tree_string(
        &self,
        node: NodeIndex,
        result: &mut String,
        prefix: &str,
        is_last: bool,
        depth: usize,
        walk: &mut TreeWalk,
    ) {
        let connector = if is_last {
            "└── "
        } else {
            "├── "
        };
        let name = &self.graph[node];

        if walk.path.contains(&node) {
            result.push_str(&format!("{prefix}{connector}{name} {CYCLE_MARKER}\n"));
            return;
        }

        let has_children = self.graph.neighbors(node).next().is_some();
        if has_children && walk.expanded.contains(&node) {
            result.push_str(&format!("{prefix}{connector}{name} {SEEN_MARKER}\n"));
            return;
        }
        result.push_str(&format!("{prefix}{connector}{name}\n"));

        if walk.max_depth.is_some_and(|max| depth >= max) {
            return;
        }
        walk.expanded.insert(node);

        let child_prefix = if is_last {
            format!("{prefix}    ")
        } else {
            format!("{prefix}│   ")
        };

        walk.path.push(node);
        self.build_children(node, result, &child_prefix, depth + 1, walk);
        walk.path.pop();
    }

    fn sorted_neighbors(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut neighbors: Vec<NodeIndex> = self.graph.neighbors(idx).collect();
        neighbors.sort_by(|a, b| self.graph[*a].cmp(&self.graph[*b]));
        neighbors
    }
}
