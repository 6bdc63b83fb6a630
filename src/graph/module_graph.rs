//! Module graph built from webpack stats.
//!
//! Turns the chunk/module/reason listing of a stats file into two lookup
//! structures: which chunk defines each module, and which modules import
//! each module. Edges are stored in the "reasons" direction, keyed by the
//! imported module.

use indexmap::IndexMap;
use log::{debug, trace};
use regex::Regex;
use serde::Serialize;

use crate::bundle::{ModuleReason, WebpackChunk, WebpackStats};

/// One importer of a module, as recorded by a webpack reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImporterRecord {
    /// Name of the importing module
    pub name: String,
    /// Literal import specifier used by the importer (e.g. `"./util"`)
    pub user_request: Option<String>,
    /// Display name of the chunk the imported module was found in
    pub chunk_name: String,
}

/// Importers of one module, keyed by importer name.
pub type ImporterSet = IndexMap<String, ImporterRecord>;

/// Module name -> importers of that module.
pub type AdjacencyMap = IndexMap<String, ImporterSet>;

/// Module name -> display name of the chunk defining it.
pub type ChunkMap = IndexMap<String, String>;

/// Options controlling which parts of the stats enter the graph.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Only chunks whose display name matches contribute importer edges
    pub chunk_filter: Option<Regex>,
    /// Drop reasons that come from lazy `import()` calls
    pub skip_async: bool,
}

impl BuildOptions {
    /// Whether a chunk with this display name contributes importer edges.
    pub fn accepts_chunk(&self, display_name: &str) -> bool {
        self.chunk_filter
            .as_ref()
            .map_or(true, |filter| filter.is_match(display_name))
    }
}

/// Importer graph of a single build.
///
/// # Example
///
/// ```rust
/// use bundle_why::bundle::WebpackStats;
/// use bundle_why::graph::{BuildOptions, ModuleGraph};
///
/// let stats = WebpackStats::parse(r#"{
///     "chunks": [{
///         "id": 0,
///         "files": ["main.js"],
///         "modules": [
///             { "name": "./a.js", "reasons": [{ "moduleName": "./b.js", "userRequest": "./a" }] },
///             { "name": "./b.js", "reasons": [] }
///         ]
///     }]
/// }"#).unwrap();
///
/// let graph = ModuleGraph::build(&stats, &BuildOptions::default());
/// assert!(graph.contains("./a.js"));
/// assert!(!graph.contains("./b.js")); // nothing imports it
/// assert_eq!(graph.chunk_of("./b.js"), Some("main.js"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ModuleGraph {
    adjacency: AdjacencyMap,
    chunks: ChunkMap,
}

impl ModuleGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph from already-built lookup maps.
    pub fn from_parts(adjacency: AdjacencyMap, chunks: ChunkMap) -> Self {
        Self { adjacency, chunks }
    }

    /// Builds the graph from parsed stats.
    ///
    /// Chunks are processed in document order. Every named module records
    /// its chunk (a later chunk overwrites an earlier one), but only chunks
    /// accepted by the chunk filter contribute importer edges.
    pub fn build(stats: &WebpackStats, options: &BuildOptions) -> Self {
        let mut graph = Self::new();

        for chunk in stats.chunks() {
            if chunk.files.is_empty() || chunk.modules.is_empty() {
                trace!("Skipping chunk {:?}: no files or modules", chunk.id);
                continue;
            }

            let chunk_name = chunk.display_name();
            for name in named_modules(chunk).map(|(name, _)| name) {
                graph.chunks.insert(name.to_string(), chunk_name.clone());
            }

            if !options.accepts_chunk(&chunk_name) {
                debug!("Chunk {} filtered out", chunk_name);
                continue;
            }

            for (name, reasons) in named_modules(chunk) {
                if reasons.is_empty() {
                    continue;
                }
                let importers = importer_set(reasons, &chunk_name, options.skip_async);
                graph.adjacency.insert(name.to_string(), importers);
            }
        }

        debug!(
            "Built module graph: {} imported modules, {} modules with chunks",
            graph.adjacency.len(),
            graph.chunks.len()
        );
        graph
    }

    /// Display names of the chunks that contribute importer edges.
    pub fn matching_chunks(stats: &WebpackStats, options: &BuildOptions) -> Vec<String> {
        stats
            .chunks()
            .iter()
            .filter(|chunk| !chunk.files.is_empty())
            .map(WebpackChunk::display_name)
            .filter(|name| options.accepts_chunk(name))
            .collect()
    }

    /// The full module -> importers map.
    pub fn adjacency(&self) -> &AdjacencyMap {
        &self.adjacency
    }

    /// The full module -> chunk map.
    pub fn chunks(&self) -> &ChunkMap {
        &self.chunks
    }

    /// Importers of a module, if it is imported by anything known.
    pub fn importers(&self, name: &str) -> Option<&ImporterSet> {
        self.adjacency.get(name)
    }

    /// The record of `importer` importing `module`.
    pub fn importer(&self, module: &str, importer: &str) -> Option<&ImporterRecord> {
        self.adjacency.get(module).and_then(|set| set.get(importer))
    }

    /// Display name of the chunk defining a module.
    pub fn chunk_of(&self, name: &str) -> Option<&str> {
        self.chunks.get(name).map(String::as_str)
    }

    /// Whether the module has an importer entry of its own.
    pub fn contains(&self, name: &str) -> bool {
        self.adjacency.contains_key(name)
    }

    /// Number of modules with importer entries.
    pub fn module_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Names of modules with importer entries, in insertion order.
    pub fn module_names(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Checks if the graph is empty.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

/// Modules of a chunk that carry a non-empty name.
fn named_modules(chunk: &WebpackChunk) -> impl Iterator<Item = (&str, &[ModuleReason])> {
    chunk.modules.iter().filter_map(|module| {
        module
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .map(|name| (name, module.reasons.as_slice()))
    })
}

/// Collapses reasons into one record per importer; later reasons win.
fn importer_set(reasons: &[ModuleReason], chunk_name: &str, skip_async: bool) -> ImporterSet {
    let mut importers = ImporterSet::new();
    for reason in reasons {
        if skip_async && reason.is_dynamic() {
            continue;
        }
        let Some(name) = reason.module_name.as_deref() else {
            continue;
        };
        importers.insert(
            name.to_string(),
            ImporterRecord {
                name: name.to_string(),
                user_request: reason.user_request.clone(),
                chunk_name: chunk_name.to_string(),
            },
        );
    }
    importers
}
