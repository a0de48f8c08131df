//! Error types for FAQgirl.
//!
//! Only loading a knowledge base can fail. Query-time outcomes (no match,
//! empty query, below-threshold match) are ordinary replies, not errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FaqError {
    #[error("Malformed category '{name}': {reason}")]
    MalformedCategory { name: String, reason: String },

    #[error("Knowledge base {source_name} has no categories")]
    EmptyKnowledgeBase { source_name: String },

    #[error("Cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid knowledge base document {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Unsupported knowledge base format {} (expected .json or .toml)", .path.display())]
    UnsupportedFormat { path: PathBuf },
}

impl FaqError {
    pub(crate) fn malformed(name: &str, reason: impl Into<String>) -> Self {
        FaqError::MalformedCategory {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    /// True when the source file simply does not exist
    pub fn is_missing_source(&self) -> bool {
        matches!(
            self,
            FaqError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Short machine-readable code, used in CLI diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            FaqError::MalformedCategory { .. } => "malformed-category",
            FaqError::EmptyKnowledgeBase { .. } => "empty-knowledge-base",
            FaqError::Io { .. } => "io",
            FaqError::Parse { .. } => "parse",
            FaqError::UnsupportedFormat { .. } => "unsupported-format",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_source_detection() {
        let err = FaqError::Io {
            path: PathBuf::from("/nope/faq.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.is_missing_source());
        assert_eq!(err.code(), "io");

        let err = FaqError::malformed("pricing", "no keywords");
        assert!(!err.is_missing_source());
        assert_eq!(err.to_string(), "Malformed category 'pricing': no keywords");
    }
}
