//! Knowledge base sources and document parsing.
//!
//! Document shape (JSON shown, TOML uses the same structure):
//!
//! ```text
//! {
//!   "business_hours": {
//!     "keywords": ["hours", "open"],
//!     "response": "We are open 9-5."
//!   }
//! }
//! ```

use super::{Category, CategoryDocument, KnowledgeBase};
use crate::error::FaqError;
use indexmap::IndexMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Where a knowledge base comes from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum KnowledgeSource {
    /// The built-in business FAQ
    #[default]
    Defaults,
    /// A JSON or TOML document on disk
    File(PathBuf),
}

impl KnowledgeSource {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) => KnowledgeSource::File(p),
            None => KnowledgeSource::Defaults,
        }
    }
}

impl fmt::Display for KnowledgeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KnowledgeSource::Defaults => write!(f, "built-in defaults"),
            KnowledgeSource::File(path) => write!(f, "FAQ data file {}", path.display()),
        }
    }
}

/// Result of a non-failing load
#[derive(Debug)]
pub struct LoadOutcome {
    pub knowledge_base: KnowledgeBase,
    /// Why the defaults were substituted, if they were
    pub warning: Option<FaqError>,
}

impl LoadOutcome {
    pub fn used_defaults(&self) -> bool {
        self.warning.is_some()
    }

    pub fn into_knowledge_base(self) -> KnowledgeBase {
        self.knowledge_base
    }
}

/// Supported document encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Toml,
}

impl DocumentFormat {
    /// Pick the format from the file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(DocumentFormat::Json),
            "toml" => Some(DocumentFormat::Toml),
            _ => None,
        }
    }
}

/// Read and validate a document from disk
pub(crate) fn read_document(path: &Path) -> Result<KnowledgeBase, FaqError> {
    let format = DocumentFormat::from_path(path).ok_or_else(|| FaqError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let text = fs::read_to_string(path).map_err(|source| FaqError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_document(&text, format, path)
}

/// Parse and validate document text. `origin` is only used in errors.
pub fn parse_document(
    text: &str,
    format: DocumentFormat,
    origin: &Path,
) -> Result<KnowledgeBase, FaqError> {
    let parse_error = |message: String| FaqError::Parse {
        path: origin.to_path_buf(),
        message,
    };

    let document: IndexMap<String, CategoryDocument> = match format {
        DocumentFormat::Json => serde_json::from_str(text).map_err(|e| parse_error(e.to_string()))?,
        DocumentFormat::Toml => toml::from_str(text).map_err(|e| parse_error(e.to_string()))?,
    };

    if document.is_empty() {
        return Err(FaqError::EmptyKnowledgeBase {
            source_name: origin.display().to_string(),
        });
    }

    let categories = document
        .iter()
        .map(|(name, doc)| Category::new(name, &doc.keywords, &doc.response))
        .collect::<Result<Vec<_>, _>>()?;

    KnowledgeBase::from_categories(categories)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn origin() -> PathBuf {
        PathBuf::from("test.json")
    }

    #[test]
    fn test_parse_json_keeps_document_order() {
        let text = r#"{
            "zebra": {"keywords": ["Stripes"], "response": "Black and white."},
            "apple": {"keywords": ["fruit", "red"], "response": "Crunchy."}
        }"#;
        let kb = parse_document(text, DocumentFormat::Json, &origin()).unwrap();
        assert_eq!(kb.topics(), vec!["zebra", "apple"]);
        assert_eq!(kb.get("zebra").unwrap().keywords(), &["stripes".to_string()]);
    }

    #[test]
    fn test_parse_toml() {
        let text = r#"
            [shipping]
            keywords = ["ship", "deliver"]
            response = "Ships in two days."

            [returns]
            keywords = ["return"]
            response = "Thirty day returns."
        "#;
        let kb = parse_document(text, DocumentFormat::Toml, Path::new("kb.toml")).unwrap();
        assert_eq!(kb.topics(), vec!["shipping", "returns"]);
    }

    #[test]
    fn test_missing_fields_are_malformed() {
        let text = r#"{"broken": {"response": "no keywords here"}}"#;
        let err = parse_document(text, DocumentFormat::Json, &origin()).unwrap_err();
        assert!(matches!(err, FaqError::MalformedCategory { ref name, .. } if name == "broken"));

        let text = r#"{"broken": {"keywords": ["a"]}}"#;
        let err = parse_document(text, DocumentFormat::Json, &origin()).unwrap_err();
        assert!(matches!(err, FaqError::MalformedCategory { .. }));
    }

    #[test]
    fn test_empty_and_invalid_documents() {
        let err = parse_document("{}", DocumentFormat::Json, &origin()).unwrap_err();
        assert!(matches!(err, FaqError::EmptyKnowledgeBase { .. }));

        let err = parse_document("{not json", DocumentFormat::Json, &origin()).unwrap_err();
        assert!(matches!(err, FaqError::Parse { .. }));

        let err = parse_document("[1, 2]", DocumentFormat::Json, &origin()).unwrap_err();
        assert!(matches!(err, FaqError::Parse { .. }));
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DocumentFormat::from_path(Path::new("a.JSON")), Some(DocumentFormat::Json));
        assert_eq!(DocumentFormat::from_path(Path::new("a.toml")), Some(DocumentFormat::Toml));
        assert_eq!(DocumentFormat::from_path(Path::new("a.yaml")), None);
        assert_eq!(DocumentFormat::from_path(Path::new("noext")), None);
    }

    #[test]
    fn test_read_document_from_disk() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"greetings": {{"keywords": ["hi"], "response": "Hello there."}}}}"#
        )
        .unwrap();
        let kb = read_document(file.path()).unwrap();
        assert_eq!(kb.topics(), vec!["greetings"]);
    }

    #[test]
    fn test_unsupported_extension() {
        let err = read_document(Path::new("/tmp/kb.yaml")).unwrap_err();
        assert!(matches!(err, FaqError::UnsupportedFormat { .. }));
    }
}
