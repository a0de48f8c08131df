//! Query-to-category match scoring.
//!
//! Three independent signals are computed per category and the strongest
//! one wins (they are never summed):
//!
//! - containment: keywords found verbatim in the query, `0.5 + share * 0.3`
//! - fuzzy: best Ratcliff/Obershelp ratio between the whole query and a keyword, `* 0.8`
//! - overlap: keywords in the query or containing a query word, as a share capped at 0.4
//!
//! Every signal is in `[0, 0.8]`, so the combined score is in `[0, 1]`.

use crate::knowledge::{Category, KnowledgeBase};
use crate::similarity;

/// Base score for any literal keyword hit
pub const CONTAINMENT_BASE: f64 = 0.5;
/// Extra score when every keyword is present
pub const CONTAINMENT_SPAN: f64 = 0.3;
/// Multiplier applied to the best fuzzy ratio
pub const FUZZY_WEIGHT: f64 = 0.8;
/// Upper bound of the token-overlap signal
pub const OVERLAP_CAP: f64 = 0.4;

/// Best category for a query. `category` is `None` when nothing scored above zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchResult<'kb> {
    pub category: Option<&'kb Category>,
    pub confidence: f64,
}

impl<'kb> MatchResult<'kb> {
    pub fn none() -> Self {
        Self {
            category: None,
            confidence: 0.0,
        }
    }

    pub fn category_name(&self) -> Option<&'kb str> {
        self.category.map(Category::name)
    }
}

/// The three signals for one (query, category) pair
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SignalBreakdown {
    pub containment: f64,
    pub fuzzy: f64,
    pub overlap: f64,
}

impl SignalBreakdown {
    /// The strongest signal
    pub fn combined(&self) -> f64 {
        self.containment.max(self.fuzzy).max(self.overlap)
    }
}

/// Lowercase and trim a raw query
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Confidence in `[0, 1]` that `query` is about `category`
pub fn score(query: &str, category: &Category) -> f64 {
    score_breakdown(query, category).combined()
}

/// Individual signals for `query` against `category`
pub fn score_breakdown(query: &str, category: &Category) -> SignalBreakdown {
    let q = normalize_query(query);
    let keywords = category.keywords();
    if keywords.is_empty() {
        return SignalBreakdown::default();
    }
    let total = keywords.len() as f64;

    let contained = keywords.iter().filter(|k| q.contains(k.as_str())).count();
    let containment = if contained > 0 {
        CONTAINMENT_BASE + (contained as f64 / total) * CONTAINMENT_SPAN
    } else {
        0.0
    };

    let fuzzy = keywords
        .iter()
        .map(|k| similarity::ratio(&q, k))
        .fold(0.0, f64::max)
        * FUZZY_WEIGHT;

    let words: Vec<&str> = q.split_whitespace().collect();
    let overlapping = keywords
        .iter()
        .filter(|k| q.contains(k.as_str()) || words.iter().any(|w| k.contains(w)))
        .count();
    let overlap = (overlapping as f64 / total).min(OVERLAP_CAP);

    SignalBreakdown {
        containment,
        fuzzy,
        overlap,
    }
}

/// Best-matching category in knowledge base order.
///
/// A category replaces the current best only with a strictly higher
/// score, so on ties the earliest category wins and an all-zero result
/// has no category.
pub fn best_match<'kb>(query: &str, kb: &'kb KnowledgeBase) -> MatchResult<'kb> {
    let mut best = MatchResult::none();
    for category in kb.iter() {
        let confidence = score(query, category);
        tracing::trace!("{}: {:.4}", category.name(), confidence);
        if confidence > best.confidence {
            best = MatchResult {
                category: Some(category),
                confidence,
            };
        }
    }
    tracing::debug!(
        "best match for {:?}: {:?} ({:.3})",
        query,
        best.category_name(),
        best.confidence
    );
    best
}

/// Signals for every category, in knowledge base order
pub fn rank<'kb>(query: &str, kb: &'kb KnowledgeBase) -> Vec<(&'kb Category, SignalBreakdown)> {
    kb.iter()
        .map(|category| (category, score_breakdown(query, category)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn category(name: &str, keywords: &[&str]) -> Category {
        Category::new(name, keywords, "response").unwrap()
    }

    #[test]
    fn test_containment_signal() {
        let cat = category("hours", &["hours", "open", "closed", "time", "schedule", "when"]);
        let s = score_breakdown("When are you open?", &cat);
        assert_relative_eq!(s.containment, 0.5 + (2.0 / 6.0) * 0.3);
        assert_relative_eq!(s.combined(), 0.6);

        let s = score_breakdown("nothing relevant", &cat);
        assert_relative_eq!(s.containment, 0.0);
    }

    #[test]
    fn test_fuzzy_signal() {
        let cat = category("services", &["help"]);
        let s = score_breakdown("Hello", &cat);
        assert_relative_eq!(s.fuzzy, (6.0 / 9.0) * 0.8);
        assert_relative_eq!(s.containment, 0.0);
    }

    #[test]
    fn test_overlap_signal_counts_word_in_keyword() {
        // "long" is a query word contained in "how long"; "ship" sits inside "shipping"
        let cat = category("delivery", &["how long", "shipping", "receive", "timeline"]);
        let s = score_breakdown("long ship", &cat);
        assert_relative_eq!(s.overlap, 0.4);
        assert_relative_eq!(s.containment, 0.0);
    }

    #[test]
    fn test_overlap_cap() {
        let cat = category("solo", &["refund"]);
        let s = score_breakdown("refund", &cat);
        assert_relative_eq!(s.overlap, 0.4);
        assert_relative_eq!(s.containment, 0.8);
        assert_relative_eq!(s.fuzzy, 0.8);
    }

    #[test]
    fn test_query_is_trimmed_and_lowercased() {
        let cat = category("refund_policy", &["refund"]);
        assert_relative_eq!(score("   REFUND   ", &cat), 0.8);
    }

    #[test]
    fn test_empty_query_scores_zero() {
        let cat = category("pricing", &["price", "cost"]);
        assert_relative_eq!(score("", &cat), 0.0);
    }

    #[test]
    fn test_best_match_tie_goes_to_first() {
        let kb = KnowledgeBase::from_categories([
            category("first", &["refund"]),
            category("second", &["refund"]),
        ])
        .unwrap();
        let result = best_match("refund please", &kb);
        assert_eq!(result.category_name(), Some("first"));
    }

    #[test]
    fn test_best_match_empty_kb() {
        let kb = KnowledgeBase::empty();
        assert_eq!(best_match("anything", &kb), MatchResult::none());
    }

    #[test]
    fn test_best_match_no_signal() {
        let kb = KnowledgeBase::defaults();
        let result = best_match("zzzz", &kb);
        assert_eq!(result.category, None);
        assert_relative_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_rank_follows_kb_order() {
        let kb = KnowledgeBase::defaults();
        let ranked = rank("refund", &kb);
        assert_eq!(ranked.len(), kb.len());
        assert_eq!(ranked[0].0.name(), "business_hours");
        let refund = ranked.iter().find(|(c, _)| c.name() == "refund_policy").unwrap();
        assert_relative_eq!(refund.1.containment, 0.5 + 0.3 / 5.0);
        // An exact keyword query saturates the fuzzy signal
        assert_relative_eq!(refund.1.combined(), 0.8);
    }
}
