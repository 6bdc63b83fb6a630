//! Command-line interface definitions.
//!
//! Every option of an analysis is given on the command line. The argument
//! structs here compile their pattern options once into the option types
//! the graph and ui modules consume.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use regex::Regex;

use crate::error::{Error, Result};
use crate::export::ExportFormat;
use crate::graph::{BuildOptions, MatchMode};
use crate::ui::HighlightOptions;

/// Default maximum chain length for `find-chain`.
pub const DEFAULT_CHAIN_DEPTH: usize = 20;

#[derive(Debug, Parser)]
#[command(name = "bundle-why")]
#[command(version)]
#[command(about = "Explain why modules end up in a webpack bundle", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the tree of modules importing a module
    Tree(TreeArgs),
    /// Find import chains leading from one module to another
    FindChain(ChainArgs),
}

/// Options of the `tree` command.
#[derive(Debug, Clone, Args)]
pub struct TreeArgs {
    /// Location of the webpack stats json file (generate with "webpack --json")
    pub stats_file: PathBuf,

    /// Substring of the module name to show the importer tree for, usually a filename
    pub module: String,

    /// Limit to a specific chunk or chunks (regex on the chunk file name)
    #[arg(short, long)]
    pub chunk: Option<String>,

    /// How many levels of importers to show
    #[arg(short, long)]
    pub depth: usize,

    /// Highlight modules matching this pattern
    #[arg(long)]
    pub highlight: Option<String>,

    /// Highlight chunks matching this pattern
    #[arg(short = 'H', long, alias = "highlightChunk")]
    pub highlight_chunk: Option<String>,

    /// Trim leaves of the tree matching this pattern
    #[arg(short, long, alias = "trimTree")]
    pub trim_tree: Option<String>,

    /// Skip importers defined in chunks matching this pattern
    #[arg(short, long, alias = "skipModules")]
    pub skip_modules: Option<String>,

    /// Show the import request used by each importer
    #[arg(short = 'i', long, alias = "showRequest")]
    pub show_request: bool,

    /// Ignore dynamic import() reasons
    #[arg(long, alias = "skipAsync")]
    pub skip_async: bool,

    /// How the module query is matched against module names
    #[arg(long = "match", value_enum, default_value_t = MatchMode::Substring)]
    pub match_mode: MatchMode,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: ExportFormat,
}

/// Options of the `find-chain` command.
#[derive(Debug, Clone, Args)]
pub struct ChainArgs {
    /// Location of the webpack stats json file (generate with "webpack --json")
    pub stats_file: PathBuf,

    /// Substring of the module the chains start from (the imported module)
    pub from: String,

    /// Substring of the module the chains lead to (a transitive importer)
    pub to: String,

    /// Limit to a specific chunk or chunks (regex on the chunk file name)
    #[arg(short, long)]
    pub chunk: Option<String>,

    /// Maximum number of importer hops in a chain
    #[arg(short, long, default_value_t = DEFAULT_CHAIN_DEPTH)]
    pub depth: usize,

    /// Ignore dynamic import() reasons
    #[arg(long, alias = "skipAsync")]
    pub skip_async: bool,

    /// Exit with failure when chains are found, and success when none are
    #[arg(long, alias = "failOnSuccess")]
    pub fail_on_success: bool,

    /// How module queries are matched against module names
    #[arg(long = "match", value_enum, default_value_t = MatchMode::Substring)]
    pub match_mode: MatchMode,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: ExportFormat,
}

/// Compile an optional pattern option.
pub fn compile_pattern(option: &'static str, pattern: Option<&str>) -> Result<Option<Regex>> {
    pattern
        .map(|p| Regex::new(p).map_err(|source| Error::InvalidPattern { option, source }))
        .transpose()
}

impl TreeArgs {
    pub fn build_options(&self) -> Result<BuildOptions> {
        Ok(BuildOptions {
            chunk_filter: compile_pattern("chunk", self.chunk.as_deref())?,
            skip_async: self.skip_async,
        })
    }

    pub fn highlight_options(&self) -> Result<HighlightOptions> {
        Ok(HighlightOptions {
            module: compile_pattern("highlight", self.highlight.as_deref())?,
            chunk: compile_pattern("highlight-chunk", self.highlight_chunk.as_deref())?,
            show_request: self.show_request,
        })
    }

    pub fn trim_pattern(&self) -> Result<Option<Regex>> {
        compile_pattern("trim-tree", self.trim_tree.as_deref())
    }

    pub fn skip_pattern(&self) -> Result<Option<Regex>> {
        compile_pattern("skip-modules", self.skip_modules.as_deref())
    }
}

impl ChainArgs {
    pub fn build_options(&self) -> Result<BuildOptions> {
        Ok(BuildOptions {
            chunk_filter: compile_pattern("chunk", self.chunk.as_deref())?,
            skip_async: self.skip_async,
        })
    }
}
