//! UI module for bundle-why
//!
//! This module turns analysis results into terminal output: color markers
//! for trees and the text rendering of trees and chains.

pub mod chain;
pub mod highlight;
pub mod tree;

pub use chain::render_chains;
pub use highlight::{HighlightOptions, Highlighter};
pub use tree::render_tree;
