//! Import chains between two modules.

use log::debug;

use super::ModuleGraph;

/// Modules from a start module up to a module that (transitively) imports it.
pub type Chain = Vec<String>;

/// Finds every chain leading from `from` to `to` through importers.
///
/// Chains start at `from`, and each following module imports the one
/// before it. A chain never visits a module twice, and no chain extends past
/// `max_depth` importer hops. All chains within the bound are reported, in
/// the order a last-in-first-out search discovers them.
///
/// # Example
///
/// ```rust
/// use bundle_why::graph::{find_chains, AdjacencyMap, ChunkMap, ImporterRecord, ModuleGraph};
///
/// let record = |name: &str| ImporterRecord {
///     name: name.to_string(),
///     user_request: None,
///     chunk_name: "main.js".to_string(),
/// };
/// let mut adjacency = AdjacencyMap::new();
/// adjacency.insert("A".into(), [("B".to_string(), record("B"))].into_iter().collect());
/// adjacency.insert("B".into(), [("D".to_string(), record("D"))].into_iter().collect());
/// let graph = ModuleGraph::from_parts(adjacency, ChunkMap::new());
///
/// assert_eq!(find_chains("A", "D", 5, &graph), vec![vec!["A", "B", "D"]]);
/// assert!(find_chains("A", "D", 1, &graph).is_empty());
/// ```
pub fn find_chains(from: &str, to: &str, max_depth: usize, graph: &ModuleGraph) -> Vec<Chain> {
    let mut chains = Vec::new();
    let mut stack: Vec<(&str, Vec<&str>)> = vec![(from, vec![from])];
    let mut explored = 0usize;

    while let Some((module, path)) = stack.pop() {
        explored += 1;
        if module == to {
            chains.push(path.iter().map(|m| m.to_string()).collect());
            continue;
        }
        if path.len() > max_depth {
            continue;
        }
        let Some(importers) = graph.importers(module) else {
            continue;
        };
        for importer in importers.keys().map(String::as_str) {
            if path.contains(&importer) {
                continue;
            }
            let mut next = path.clone();
            next.push(importer);
            stack.push((importer, next));
        }
    }

    debug!(
        "Found {} chain(s) from {} to {} after exploring {} path(s)",
        chains.len(),
        from,
        to,
        explored
    );
    chains
}
