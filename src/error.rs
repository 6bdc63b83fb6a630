//! Error types for bundle-why.

use crate::bundle::StatsError;

/// Errors surfaced while preparing or running an analysis.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The stats file could not be loaded.
    #[error(transparent)]
    Stats(#[from] StatsError),

    /// A pattern option is not a valid regular expression.
    #[error("Invalid pattern for --{option}: {source}")]
    InvalidPattern {
        option: &'static str,
        #[source]
        source: regex::Error,
    },

    /// No known module contains the query.
    #[error("Cannot find any module matching substring '{query}' (out of {available} available)")]
    ModuleNotFound { query: String, available: usize },

    /// Unique matching was requested but several modules contain the query.
    #[error("Module query '{query}' is ambiguous, it matches: {}", candidates.join(", "))]
    AmbiguousModule {
        query: String,
        candidates: Vec<String>,
    },

    /// A chain endpoint could not be resolved to a known module.
    #[error("Cannot resolve {endpoint} module '{query}'")]
    EndpointNotFound { endpoint: &'static str, query: String },
}

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether this error means a module query did not resolve.
    ///
    /// These are user-facing outcomes rather than failures of the tool.
    pub fn is_lookup_failure(&self) -> bool {
        matches!(
            self,
            Self::ModuleNotFound { .. } | Self::AmbiguousModule { .. } | Self::EndpointNotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_not_found_message() {
        let err = Error::ModuleNotFound {
            query: "lodash".to_string(),
            available: 12,
        };
        assert_eq!(
            err.to_string(),
            "Cannot find any module matching substring 'lodash' (out of 12 available)"
        );
        assert!(err.is_lookup_failure());
    }

    #[test]
    fn test_ambiguous_message_lists_candidates() {
        let err = Error::AmbiguousModule {
            query: "index".to_string(),
            candidates: vec!["./a/index.js".to_string(), "./b/index.js".to_string()],
        };
        assert!(err.to_string().contains("./a/index.js, ./b/index.js"));
    }

    #[test]
    fn test_invalid_pattern_is_not_lookup_failure() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = Error::InvalidPattern {
            option: "chunk",
            source,
        };
        assert!(err.to_string().starts_with("Invalid pattern for --chunk"));
        assert!(!err.is_lookup_failure());
    }
}
