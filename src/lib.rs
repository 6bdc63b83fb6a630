//! bundle-why - explain why modules end up in a webpack bundle
//!
//! This crate reads webpack `stats.json`, builds the graph of "which module
//! imports which", and answers two questions about it: what is the tree of
//! importers above a module, and which import chains connect two modules.

pub mod bundle;
pub mod cli;
pub mod commands;
pub mod error;
pub mod export;
pub mod graph;
pub mod ui;

pub use error::{Error, Result};
