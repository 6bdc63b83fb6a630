//! Bundle stats input module
//!
//! This module provides the typed model of a bundler's build statistics
//! (e.g., webpack `stats.json`) that the module graph is built from.
//!
//! # Supported Formats
//!
//! - **Webpack**: `stats.json` generated with `webpack --json` including module reasons
//!
//! # Example
//!
//! ```ignore
//! use bundle_why::bundle::WebpackStats;
//!
//! let stats = WebpackStats::from_file("stats.json")?;
//! for chunk in stats.chunks() {
//!     println!("{}: {} modules", chunk.display_name(), chunk.modules.len());
//! }
//! ```

pub mod webpack;

// Re-export main types for convenience
pub use webpack::{
    ChunkId, ModuleReason, StatsError, StatsResult, WebpackChunk, WebpackModule, WebpackStats,
};
