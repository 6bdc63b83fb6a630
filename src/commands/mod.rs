//! Command implementations.
//!
//! Each command loads the stats file, builds the module graph and writes its
//! report to the given writer, returning the process exit code.

pub mod chain;
pub mod tree;

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;
use log::{info, warn};

use crate::bundle::WebpackStats;
use crate::error::Result;
use crate::graph::{BuildOptions, ModuleGraph};

/// Load the stats file, or `None` when it lists no chunks at all.
fn load_stats(path: &Path) -> Result<Option<WebpackStats>> {
    let stats = WebpackStats::from_file(path)?;
    info!(
        "Loaded {} (webpack {}, {} chunks)",
        path.display(),
        stats.version.as_deref().unwrap_or("unknown"),
        stats.chunks().len()
    );

    if !stats.has_chunks() {
        warn!("{} has no chunks, nothing to analyze", path.display());
        return Ok(None);
    }
    Ok(Some(stats))
}

/// Print the chunks a chunk filter keeps.
fn print_chunk_scope<W: Write>(
    out: &mut W,
    stats: &WebpackStats,
    options: &BuildOptions,
) -> io::Result<()> {
    let Some(filter) = &options.chunk_filter else {
        return Ok(());
    };
    for chunk in ModuleGraph::matching_chunks(stats, options) {
        writeln!(
            out,
            "Searching in chunk: {} {}",
            chunk.bold(),
            format!("(regex: {})", filter).bright_black()
        )?;
    }
    Ok(())
}
