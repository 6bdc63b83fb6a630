//! Webpack bundle stats parser
//!
//! This module handles parsing of the `stats.json` produced by
//! `webpack --json` (or `stats: { reasons: true }`), keeping only what is
//! needed to answer "why is this module in my bundle": chunks, the modules
//! each chunk defines, and the reasons each module was included.

use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Substring identifying an emitted JavaScript bundle file.
pub const BUNDLE_FILE_MARKER: &str = ".js";

/// Substring of a reason type denoting a lazy `import()` call.
pub const DYNAMIC_IMPORT_MARKER: &str = "import()";

/// Errors that can occur while loading a stats file.
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    /// Failed to read the file from disk.
    #[error("Failed to read stats file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse JSON content.
    #[error("Failed to parse stats JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for stats loading.
pub type StatsResult<T> = Result<T, StatsError>;

/// Represents a webpack stats.json file output.
///
/// `chunks` is kept optional so a document without it can be told apart from
/// a build that simply produced no chunks.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WebpackStats {
    /// Webpack version used for the build
    pub version: Option<String>,

    /// Build hash identifier
    pub hash: Option<String>,

    /// List of chunks (code-split bundles)
    pub chunks: Option<Vec<WebpackChunk>>,
}

/// Represents a webpack chunk (code-split bundle).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WebpackChunk {
    /// Chunk ID (can be number or string)
    pub id: Option<ChunkId>,

    /// Chunk names
    #[serde(default, deserialize_with = "null_as_default")]
    pub names: Vec<String>,

    /// Files generated for this chunk
    #[serde(default, deserialize_with = "null_as_default")]
    pub files: Vec<String>,

    /// Modules defined by this chunk
    #[serde(default, deserialize_with = "null_as_default")]
    pub modules: Vec<WebpackModule>,
}

/// Represents a module in the webpack build.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct WebpackModule {
    /// Short module name/path
    pub name: Option<String>,

    /// Reasons why this module was included
    #[serde(default, deserialize_with = "null_as_default")]
    pub reasons: Vec<ModuleReason>,
}

/// Reason why a module was included in the build.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ModuleReason {
    /// Module name that imported this
    pub module_name: Option<String>,

    /// Type of reason (e.g., "harmony import specifier", "import()")
    #[serde(rename = "type")]
    pub reason_type: Option<String>,

    /// User request string
    pub user_request: Option<String>,
}

/// Chunk ID can be either a number or string in webpack.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum ChunkId {
    /// Numeric chunk ID
    Number(u64),
    /// String chunk ID
    String(String),
}

impl std::fmt::Display for ChunkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChunkId::Number(n) => write!(f, "{}", n),
            ChunkId::String(s) => write!(f, "{}", s),
        }
    }
}

/// Webpack writes `null` for some list fields; treat those like absent ones.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl WebpackStats {
    /// Parse webpack stats from a JSON file.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use bundle_why::bundle::webpack::WebpackStats;
    ///
    /// let stats = WebpackStats::from_file("stats.json")?;
    /// println!("Chunks: {}", stats.chunks().len());
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> StatsResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| StatsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse webpack stats from a JSON string.
    pub fn parse(json: &str) -> StatsResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether the document carried a `chunks` field at all.
    pub fn has_chunks(&self) -> bool {
        self.chunks.is_some()
    }

    /// The chunks of this build, empty when the field was absent.
    pub fn chunks(&self) -> &[WebpackChunk] {
        self.chunks.as_deref().unwrap_or_default()
    }
}

impl WebpackChunk {
    /// Name used to refer to this chunk in output.
    ///
    /// The first emitted JavaScript file, falling back to the chunk id.
    ///
    /// # Example
    ///
    /// ```
    /// use bundle_why::bundle::webpack::{ChunkId, WebpackChunk};
    ///
    /// let chunk = WebpackChunk {
    ///     id: Some(ChunkId::Number(7)),
    ///     files: vec!["7.css".into(), "7.bundle.js".into()],
    ///     ..Default::default()
    /// };
    /// assert_eq!(chunk.display_name(), "7.bundle.js");
    /// ```
    pub fn display_name(&self) -> String {
        self.files
            .iter()
            .find(|f| f.contains(BUNDLE_FILE_MARKER))
            .cloned()
            .or_else(|| self.id.as_ref().map(ToString::to_string))
            .unwrap_or_default()
    }
}

impl ModuleReason {
    /// Whether this reason is a lazy `import()` rather than a static import.
    pub fn is_dynamic(&self) -> bool {
        self.reason_type
            .as_deref()
            .is_some_and(|t| t.contains(DYNAMIC_IMPORT_MARKER))
    }
}
