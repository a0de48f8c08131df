//! Knowledge base: the ordered set of FAQ categories.
//!
//! A knowledge base is built once (from a document or the built-in
//! defaults) and is read-only afterwards. Iteration order is insertion
//! order; the scorer relies on it to break ties (first category wins).

pub mod defaults;
pub mod source;

pub use source::{DocumentFormat, KnowledgeSource, LoadOutcome};

use crate::error::FaqError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A named topic with its keywords and canned response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    /// Lowercased, trimmed, de-duplicated, never empty
    keywords: Vec<String>,
    response: String,
}

impl Category {
    /// Build a validated category.
    ///
    /// Keywords are trimmed and lowercased; repeated keywords keep their
    /// first position. Fails if no keyword survives, if any keyword is
    /// blank, or if the response is blank.
    pub fn new<I, S>(name: &str, keywords: I, response: &str) -> Result<Self, FaqError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if name.trim().is_empty() {
            return Err(FaqError::malformed(name, "category name is empty"));
        }

        let mut normalized: Vec<String> = Vec::new();
        for keyword in keywords {
            let keyword = keyword.as_ref().trim().to_lowercase();
            if keyword.is_empty() {
                return Err(FaqError::malformed(name, "contains an empty keyword"));
            }
            if !normalized.contains(&keyword) {
                normalized.push(keyword);
            }
        }

        if normalized.is_empty() {
            return Err(FaqError::malformed(name, "has no keywords"));
        }
        if response.trim().is_empty() {
            return Err(FaqError::malformed(name, "has an empty response"));
        }

        Ok(Self {
            name: name.to_string(),
            keywords: normalized,
            response: response.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    /// Human-readable topic label: `refund_policy` -> `Refund Policy`
    pub fn display_name(&self) -> String {
        display_name(&self.name)
    }
}

/// Title-case a category name, treating `_` as a word separator
pub fn display_name(name: &str) -> String {
    name.split('_')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(|c| c.to_lowercase()))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One entry of a knowledge base document, as written on disk
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct CategoryDocument {
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub response: String,
}

/// Insertion-ordered, immutable collection of categories
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnowledgeBase {
    categories: IndexMap<String, Category>,
}

impl KnowledgeBase {
    /// Knowledge base with no categories. Every query falls back.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from categories in the given order. Names must be unique.
    pub fn from_categories<I>(categories: I) -> Result<Self, FaqError>
    where
        I: IntoIterator<Item = Category>,
    {
        let mut map = IndexMap::new();
        for category in categories {
            if map.contains_key(category.name()) {
                return Err(FaqError::malformed(category.name(), "duplicate category name"));
            }
            map.insert(category.name.clone(), category);
        }
        Ok(Self { categories: map })
    }

    /// The built-in business FAQ
    pub fn defaults() -> Self {
        defaults::knowledge_base()
    }

    /// Load from `source`, falling back to the defaults on any failure.
    ///
    /// Never fails. When the defaults were substituted the reason is kept
    /// in [`LoadOutcome::warning`] and logged at WARN.
    pub fn load(source: &KnowledgeSource) -> LoadOutcome {
        match Self::try_load(source) {
            Ok(knowledge_base) => LoadOutcome {
                knowledge_base,
                warning: None,
            },
            Err(err) => {
                if err.is_missing_source() {
                    tracing::warn!("{} not found, using default FAQ data", source);
                } else {
                    tracing::warn!("{}; using default FAQ data", err);
                }
                LoadOutcome {
                    knowledge_base: Self::defaults(),
                    warning: Some(err),
                }
            }
        }
    }

    /// Load from `source`, returning the error instead of falling back
    pub fn try_load(source: &KnowledgeSource) -> Result<Self, FaqError> {
        let kb = match source {
            KnowledgeSource::Defaults => Self::defaults(),
            KnowledgeSource::File(path) => source::read_document(path)?,
        };
        tracing::debug!("Loaded {} FAQ categories from {}", kb.len(), source);
        Ok(kb)
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }

    /// Categories in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }

    /// Category names in insertion order
    pub fn topics(&self) -> Vec<&str> {
        self.categories.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Serialize in the JSON document format accepted by [`KnowledgeSource::File`]
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        let doc: IndexMap<&str, CategoryDocument> = self
            .iter()
            .map(|c| {
                (
                    c.name(),
                    CategoryDocument {
                        keywords: c.keywords.clone(),
                        response: c.response.clone(),
                    },
                )
            })
            .collect();
        serde_json::to_string_pretty(&doc)
    }
}
