//! Graph module for importer relationship modeling.
//!
//! This module provides the [`ModuleGraph`] built from webpack stats and the
//! traversals run over it: importer trees ([`resolve`], [`trim`]) and
//! import chains ([`find_chains`]).
//!
//! # Example
//!
//! ```rust
//! use bundle_why::bundle::WebpackStats;
//! use bundle_why::graph::{find_chains, resolve, BuildOptions, MatchMode, ModuleGraph};
//!
//! let stats = WebpackStats::parse(r#"{
//!     "chunks": [{
//!         "id": 0,
//!         "files": ["main.js"],
//!         "modules": [
//!             { "name": "./src/a.js", "reasons": [{ "moduleName": "./src/b.js" }] },
//!             { "name": "./src/b.js", "reasons": [{ "moduleName": "./src/index.js" }] }
//!         ]
//!     }]
//! }"#).unwrap();
//!
//! let graph = ModuleGraph::build(&stats, &BuildOptions::default());
//! let root = graph.find_module("a.js", MatchMode::Substring).unwrap();
//!
//! let tree = resolve(root, 3, &graph, None);
//! assert!(tree.contains_key("./src/b.js"));
//!
//! let chains = find_chains(root, "./src/index.js", 5, &graph);
//! assert_eq!(chains.len(), 1);
//! ```

mod chain;
mod lookup;
mod module_graph;
mod tree;

pub use chain::{find_chains, Chain};
pub use lookup::MatchMode;
pub use module_graph::{
    AdjacencyMap, BuildOptions, ChunkMap, ImporterRecord, ImporterSet, ModuleGraph,
};
pub use tree::{leaf_count, resolve, tree_depth, trim, Tree, TreeNode};
