//! JSON export implementation.
//!
//! Exports trees and chains in JSON format for machine-readable output.

use serde::Serialize;
use std::io::{self, Write};

use crate::graph::{Chain, Tree};

/// Importer tree of one module.
#[derive(Debug, Serialize)]
pub struct TreeReport<'a> {
    /// Resolved module name
    pub module: &'a str,
    /// Query the module was resolved from
    pub query: &'a str,
    /// Maximum depth requested
    pub depth: usize,
    /// Importer tree, keyed by module name
    pub tree: &'a Tree,
}

/// Chains found between two modules.
#[derive(Debug, Serialize)]
pub struct ChainReport<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub max_depth: usize,
    pub chain_count: usize,
    pub chains: &'a [Chain],
}

impl<'a> ChainReport<'a> {
    /// Create a report for the chains between `from` and `to`.
    pub fn new(from: &'a str, to: &'a str, max_depth: usize, chains: &'a [Chain]) -> Self {
        Self {
            from,
            to,
            max_depth,
            chain_count: chains.len(),
            chains,
        }
    }
}

/// Write a report as pretty-printed JSON followed by a newline.
pub fn write_json<T: Serialize, W: Write>(report: &T, writer: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, report)?;
    writeln!(writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::TreeNode;

    fn to_value<T: Serialize>(report: &T) -> serde_json::Value {
        let mut buffer = Vec::new();
        write_json(report, &mut buffer).unwrap();
        serde_json::from_slice(&buffer).unwrap()
    }

    #[test]
    fn test_tree_report_json() {
        let mut inner = Tree::new();
        inner.insert("./src/index.js".to_string(), TreeNode::Leaf("main.js".to_string()));
        let mut tree = Tree::new();
        tree.insert("./src/app.js".to_string(), TreeNode::Branch(inner));

        let report = TreeReport {
            module: "./src/button.js",
            query: "button",
            depth: 3,
            tree: &tree,
        };
        let value = to_value(&report);

        assert_eq!(value["module"], "./src/button.js");
        assert_eq!(value["depth"], 3);
        assert_eq!(value["tree"]["./src/app.js"]["./src/index.js"], "main.js");
    }

    #[test]
    fn test_chain_report_json() {
        let chains = vec![vec!["a".to_string(), "b".to_string()]];
        let value = to_value(&ChainReport::new("a", "b", 20, &chains));

        assert_eq!(value["chain_count"], 1);
        assert_eq!(value["max_depth"], 20);
        assert_eq!(value["chains"][0][1], "b");
    }

    #[test]
    fn test_json_ends_with_newline() {
        let chains: Vec<Chain> = Vec::new();
        let mut buffer = Vec::new();
        write_json(&ChainReport::new("a", "b", 1, &chains), &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.ends_with("}\n"));
        assert!(output.contains("\"chains\": []"));
    }
}
