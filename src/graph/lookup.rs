//! Resolving user queries to module names.

use clap::ValueEnum;
use log::{debug, warn};

use super::ModuleGraph;
use crate::error::{Error, Result};

/// How a module query is matched against known module names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MatchMode {
    /// First module (in stats order) whose name contains the query
    #[default]
    Substring,
    /// Module whose name equals the query
    Exact,
    /// The only module whose name contains the query
    Unique,
}

impl ModuleGraph {
    /// Resolves a query to a module with an importer entry.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bundle_why::graph::{AdjacencyMap, ChunkMap, MatchMode, ModuleGraph};
    ///
    /// let mut adjacency = AdjacencyMap::new();
    /// adjacency.insert("./src/button.js".to_string(), Default::default());
    /// adjacency.insert("./src/button-group.js".to_string(), Default::default());
    /// let graph = ModuleGraph::from_parts(adjacency, ChunkMap::new());
    ///
    /// assert_eq!(graph.find_module("button", MatchMode::Substring).unwrap(), "./src/button.js");
    /// assert!(graph.find_module("button", MatchMode::Unique).is_err());
    /// ```
    pub fn find_module(&self, query: &str, mode: MatchMode) -> Result<&str> {
        let not_found = || Error::ModuleNotFound {
            query: query.to_string(),
            available: self.module_count(),
        };

        match mode {
            MatchMode::Substring => {
                let mut matches = self.module_names().filter(|name| name.contains(query));
                let found = matches.next().ok_or_else(not_found)?;
                let others = matches.count();
                if others > 0 {
                    debug!(
                        "Query '{}' also matches {} other module(s); using {}",
                        query, others, found
                    );
                }
                Ok(found)
            }
            MatchMode::Exact => self
                .module_names()
                .find(|name| *name == query)
                .ok_or_else(not_found),
            MatchMode::Unique => {
                let candidates: Vec<&str> = self
                    .module_names()
                    .filter(|name| name.contains(query))
                    .collect();
                match candidates.as_slice() {
                    [] => Err(not_found()),
                    [only] => Ok(*only),
                    _ => {
                        warn!("Query '{}' matches {} modules", query, candidates.len());
                        Err(Error::AmbiguousModule {
                            query: query.to_string(),
                            candidates: candidates.iter().map(|c| c.to_string()).collect(),
                        })
                    }
                }
            }
        }
    }
}
