//! Display markers for importer trees.

use colored::Colorize;
use regex::Regex;

use crate::graph::{ModuleGraph, Tree, TreeNode};

/// Which parts of a tree to emphasize.
#[derive(Debug, Clone, Default)]
pub struct HighlightOptions {
    /// Module names to highlight
    pub module: Option<Regex>,
    /// Chunk names to highlight
    pub chunk: Option<Regex>,
    /// Append the import specifier used by each importer
    pub show_request: bool,
}

/// Decorates tree keys and leaves with colors and import details.
pub struct Highlighter<'a> {
    graph: &'a ModuleGraph,
    traced: &'a str,
    options: &'a HighlightOptions,
}

impl<'a> Highlighter<'a> {
    /// Creates a highlighter for the tree of `traced`.
    pub fn new(graph: &'a ModuleGraph, traced: &'a str, options: &'a HighlightOptions) -> Self {
        Self {
            graph,
            traced,
            options,
        }
    }

    /// Module name with its marker: bold for the traced module,
    /// bright yellow for highlight matches.
    pub fn module_label(&self, name: &str) -> String {
        if name == self.traced {
            name.bold().to_string()
        } else if self.matches(&self.options.module, name) {
            name.bright_yellow().to_string()
        } else {
            name.to_string()
        }
    }

    /// Chunk name with its marker: bright red for highlight matches, gray otherwise.
    pub fn chunk_label(&self, chunk: &str) -> String {
        if self.matches(&self.options.chunk, chunk) {
            chunk.bright_red().to_string()
        } else {
            chunk.bright_black().to_string()
        }
    }

    /// Returns a copy of `tree` with decorated keys and leaves.
    ///
    /// Keys read `name[: request][: chunk]`. The chunk suffix is only added
    /// to branches, since leaves already show their chunk as the value.
    pub fn decorate(&self, tree: &Tree) -> Tree {
        self.decorate_level(tree, self.traced)
    }

    fn decorate_level(&self, tree: &Tree, parent: &str) -> Tree {
        tree.iter()
            .map(|(name, node)| {
                let record = self.graph.importer(parent, name);
                let mut key = self.module_label(name);

                if self.options.show_request {
                    let request = record
                        .and_then(|r| r.user_request.as_deref())
                        .unwrap_or_default();
                    key = format!("{}: {}", key, request.bright_black());
                }

                let value = match node {
                    TreeNode::Leaf(chunk) => TreeNode::Leaf(self.chunk_label(chunk)),
                    TreeNode::Branch(children) => {
                        if let Some(record) = record {
                            key = format!("{}: {}", key, self.chunk_label(&record.chunk_name));
                        }
                        TreeNode::Branch(self.decorate_level(children, name))
                    }
                };
                (key, value)
            })
            .collect()
    }

    fn matches(&self, pattern: &Option<Regex>, text: &str) -> bool {
        pattern.as_ref().is_some_and(|p| p.is_match(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{AdjacencyMap, ChunkMap, ImporterRecord, ImporterSet};

    fn record(name: &str, request: &str, chunk: &str) -> (String, ImporterRecord) {
        (
            name.to_string(),
            ImporterRecord {
                name: name.to_string(),
                user_request: Some(request.to_string()),
                chunk_name: chunk.to_string(),
            },
        )
    }

    fn graph() -> ModuleGraph {
        let mut adjacency = AdjacencyMap::new();
        let a: ImporterSet = [record("B", "./a", "main.js")].into_iter().collect();
        let b: ImporterSet = [record("C", "./b", "vendor.js")].into_iter().collect();
        adjacency.insert("A".to_string(), a);
        adjacency.insert("B".to_string(), b);
        ModuleGraph::from_parts(adjacency, ChunkMap::new())
    }

    fn sample_tree() -> Tree {
        let inner: Tree = [("C".to_string(), TreeNode::Leaf("main.js".to_string()))]
            .into_iter()
            .collect();
        [("B".to_string(), TreeNode::Branch(inner))].into_iter().collect()
    }

    #[test]
    fn test_decorate_plain() {
        colored::control::set_override(false);
        let graph = graph();
        let options = HighlightOptions::default();
        let decorated = Highlighter::new(&graph, "A", &options).decorate(&sample_tree());

        let keys: Vec<&String> = decorated.keys().collect();
        assert_eq!(keys, vec!["B: main.js"]);
        let inner = decorated["B: main.js"].children().unwrap();
        assert_eq!(inner["C"], TreeNode::Leaf("main.js".to_string()));
    }

    #[test]
    fn test_decorate_with_requests() {
        colored::control::set_override(false);
        let graph = graph();
        let options = HighlightOptions {
            show_request: true,
            ..Default::default()
        };
        let decorated = Highlighter::new(&graph, "A", &options).decorate(&sample_tree());

        let inner = decorated["B: ./a: main.js"].children().unwrap();
        assert!(inner.contains_key("C: ./b"));
    }

    #[test]
    fn test_labels_follow_patterns() {
        let graph = graph();
        let options = HighlightOptions {
            module: Some(Regex::new("^C$").unwrap()),
            chunk: Some(Regex::new("vendor").unwrap()),
            show_request: false,
        };
        let highlighter = Highlighter::new(&graph, "A", &options);

        assert_eq!(highlighter.module_label("A"), "A".bold().to_string());
        assert_eq!(highlighter.module_label("C"), "C".bright_yellow().to_string());
        assert_eq!(highlighter.module_label("B"), "B");
        assert_eq!(
            highlighter.chunk_label("vendor.js"),
            "vendor.js".bright_red().to_string()
        );
        assert_eq!(
            highlighter.chunk_label("main.js"),
            "main.js".bright_black().to_string()
        );
    }
}
