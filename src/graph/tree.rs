//! Importer trees.
//!
//! A tree is rooted at a traced module: its top-level keys are the modules
//! importing it, their children are the modules importing those, and so on.
//! Leaves hold the display name of the chunk defining the leaf module.

use indexmap::IndexMap;
use log::trace;
use regex::Regex;
use serde::Serialize;

use super::{ChunkMap, ModuleGraph};

/// Importers of one tree level, keyed by module name.
pub type Tree = IndexMap<String, TreeNode>;

/// A node in an importer tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TreeNode {
    /// No further importers shown; holds the defining chunk name
    Leaf(String),
    /// Importers of this module
    Branch(Tree),
}

impl TreeNode {
    /// Returns true if this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Children of a branch, `None` for a leaf.
    pub fn children(&self) -> Option<&Tree> {
        match self {
            Self::Leaf(_) => None,
            Self::Branch(tree) => Some(tree),
        }
    }
}

/// Resolves the importer tree of `root`, at most `max_depth` levels deep.
///
/// An importer is left out when it has no importer entry of its own, when it
/// already appears on the path from the root, or when `skip` matches the
/// chunk defining it (which also drops everything above it).
///
/// # Example
///
/// ```rust
/// use bundle_why::graph::{resolve, AdjacencyMap, ChunkMap, ImporterRecord, ModuleGraph, TreeNode};
///
/// let record = |name: &str| ImporterRecord {
///     name: name.to_string(),
///     user_request: None,
///     chunk_name: "main.js".to_string(),
/// };
/// let mut adjacency = AdjacencyMap::new();
/// adjacency.insert("A".into(), [("B".to_string(), record("B"))].into_iter().collect());
/// adjacency.insert("B".into(), [("C".to_string(), record("C"))].into_iter().collect());
/// adjacency.insert("C".into(), Default::default());
/// let chunks: ChunkMap = ["A", "B", "C"].iter().map(|m| (m.to_string(), "main.js".to_string())).collect();
/// let graph = ModuleGraph::from_parts(adjacency, chunks);
///
/// let tree = resolve("A", 2, &graph, None);
/// let b = tree["B"].children().unwrap();
/// assert_eq!(b["C"], TreeNode::Leaf("main.js".to_string()));
/// ```
pub fn resolve(root: &str, max_depth: usize, graph: &ModuleGraph, skip: Option<&Regex>) -> Tree {
    let mut path = vec![root];
    expand(graph, root, max_depth, &mut path, skip)
}

fn expand<'g>(
    graph: &'g ModuleGraph,
    module: &str,
    depth: usize,
    path: &mut Vec<&'g str>,
    skip: Option<&Regex>,
) -> Tree {
    let mut tree = Tree::new();
    if depth == 0 {
        return tree;
    }
    let Some(importers) = graph.importers(module) else {
        return tree;
    };

    for name in importers.keys().map(String::as_str) {
        if !graph.contains(name) || path.contains(&name) {
            continue;
        }
        let chunk = graph.chunk_of(name).unwrap_or_default();
        if skip.is_some_and(|pattern| pattern.is_match(chunk)) {
            trace!("Skipping {} from chunk {}", name, chunk);
            continue;
        }

        path.push(name);
        let children = expand(graph, name, depth - 1, path, skip);
        path.pop();

        let node = if children.is_empty() {
            TreeNode::Leaf(chunk.to_string())
        } else {
            TreeNode::Branch(children)
        };
        tree.insert(name.to_string(), node);
    }
    tree
}

/// Removes leaves whose module name matches `pattern`.
///
/// A branch left without children collapses into a leaf holding its chunk
/// name, which may in turn be trimmed; passes repeat until nothing changes.
/// Without a pattern the tree is left untouched.
pub fn trim(tree: &mut Tree, pattern: Option<&Regex>, chunks: &ChunkMap) {
    let Some(pattern) = pattern else {
        return;
    };
    let mut passes = 0;
    while trim_pass(tree, pattern, chunks) {
        passes += 1;
    }
    trace!("Trimmed tree in {} pass(es)", passes);
}

fn trim_pass(tree: &mut Tree, pattern: &Regex, chunks: &ChunkMap) -> bool {
    let mut changed = false;
    tree.retain(|key, node| match node {
        TreeNode::Leaf(_) => {
            let keep = !pattern.is_match(key);
            changed |= !keep;
            keep
        }
        TreeNode::Branch(children) => {
            changed |= trim_pass(children, pattern, chunks);
            if children.is_empty() {
                *node = TreeNode::Leaf(chunks.get(key).cloned().unwrap_or_default());
                changed = true;
            }
            true
        }
    });
    changed
}

/// Number of levels in the tree (0 for an empty tree).
pub fn tree_depth(tree: &Tree) -> usize {
    tree.values()
        .map(|node| 1 + node.children().map_or(0, tree_depth))
        .max()
        .unwrap_or(0)
}

/// Number of leaves in the tree.
pub fn leaf_count(tree: &Tree) -> usize {
    tree.values()
        .map(|node| node.children().map_or(1, leaf_count))
        .sum()
}
