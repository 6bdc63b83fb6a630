//! Export functionality for analysis results.
//!
//! Trees and chains print as colored text by default; the JSON format
//! emits the undecorated results for scripts and CI checks.

pub mod json;

pub use json::{write_json, ChainReport, TreeReport};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Text format - colored tree / chain listing
    #[default]
    Text,
    /// JSON format - machine-readable, full data
    Json,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ExportFormat::Text),
            "json" => Ok(ExportFormat::Json),
            _ => Err(format!(
                "Unknown export format: '{}'. Valid formats: text, json",
                s
            )),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Text => write!(f, "text"),
            ExportFormat::Json => write!(f, "json"),
        }
    }
}
