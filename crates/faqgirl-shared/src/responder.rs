//! Turn a match into the text shown to the customer.

use crate::knowledge::KnowledgeBase;
use crate::scorer;
use std::fmt;

/// Minimum confidence needed to answer instead of falling back
pub const DEFAULT_THRESHOLD: f64 = 0.2;

/// Reply to a blank query
pub const GREETING: &str =
    "Hello! I'm FAQgirl, your automated assistant. How can I help you today?";

/// Reply when no category reaches the threshold
pub const FALLBACK: &str = "🔴 I'm sorry, I couldn't find a specific answer to your question. \
Please contact our support team for personalized assistance:\n\
📧 Email: support@company.com\n\
📞 Phone: +1 (555) 123-4567\n\n\
Or try rephrasing your question with keywords like: hours, contact, pricing, services, delivery, refund, support, or partnership.";

/// How sure we are about an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceTier {
    /// confidence > 0.7
    High,
    /// confidence > 0.5
    Medium,
    Low,
}

impl ConfidenceTier {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence > 0.7 {
            ConfidenceTier::High
        } else if confidence > 0.5 {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "🟢",
            ConfidenceTier::Medium => "🟡",
            ConfidenceTier::Low => "🟠",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "high",
            ConfidenceTier::Medium => "medium",
            ConfidenceTier::Low => "low",
        }
    }
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single query
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Greeting(String),
    Answer {
        category: String,
        response: String,
        confidence: f64,
        tier: ConfidenceTier,
    },
    Fallback(String),
}

impl Reply {
    /// Text returned to the caller
    pub fn render(&self) -> String {
        match self {
            Reply::Greeting(text) | Reply::Fallback(text) => text.clone(),
            Reply::Answer {
                response,
                confidence,
                tier,
                ..
            } => format!(
                "{} {}\n\nℹ️ Confidence: {:.1}%",
                tier.marker(),
                response,
                confidence * 100.0
            ),
        }
    }

    pub fn category(&self) -> Option<&str> {
        match self {
            Reply::Answer { category, .. } => Some(category.as_str()),
            _ => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Reply::Fallback(_))
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Threshold plus the fixed greeting/fallback texts. Holds no per-call state.
#[derive(Debug, Clone, PartialEq)]
pub struct Responder {
    threshold: f64,
    greeting: String,
    fallback: String,
}

impl Default for Responder {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            greeting: GREETING.to_string(),
            fallback: FALLBACK.to_string(),
        }
    }
}

impl Responder {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    /// Replace the greeting and fallback texts
    pub fn with_messages(mut self, greeting: impl Into<String>, fallback: impl Into<String>) -> Self {
        self.greeting = greeting.into();
        self.fallback = fallback.into();
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn greeting(&self) -> &str {
        &self.greeting
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Reply using the configured threshold
    pub fn reply(&self, query: &str, kb: &KnowledgeBase) -> Reply {
        self.reply_with_threshold(query, kb, self.threshold)
    }

    /// Reply using an explicit threshold.
    ///
    /// A blank query always gets the greeting; the scorer is not consulted.
    pub fn reply_with_threshold(&self, query: &str, kb: &KnowledgeBase, threshold: f64) -> Reply {
        if query.trim().is_empty() {
            return Reply::Greeting(self.greeting.clone());
        }

        let result = scorer::best_match(query, kb);
        match result.category {
            Some(category) if result.confidence >= threshold => Reply::Answer {
                category: category.name().to_string(),
                response: category.response().to_string(),
                confidence: result.confidence,
                tier: ConfidenceTier::from_confidence(result.confidence),
            },
            _ => Reply::Fallback(self.fallback.clone()),
        }
    }
}

/// Rendered reply for `query` with the default texts
pub fn respond(query: &str, kb: &KnowledgeBase, threshold: f64) -> String {
    Responder::default()
        .reply_with_threshold(query, kb, threshold)
        .render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::Category;

    #[test]
    fn test_tiers() {
        assert_eq!(ConfidenceTier::from_confidence(0.8), ConfidenceTier::High);
        assert_eq!(ConfidenceTier::from_confidence(0.7), ConfidenceTier::Medium);
        assert_eq!(ConfidenceTier::from_confidence(0.55), ConfidenceTier::Medium);
        assert_eq!(ConfidenceTier::from_confidence(0.5), ConfidenceTier::Low);
        assert_eq!(ConfidenceTier::from_confidence(0.2), ConfidenceTier::Low);
    }

    #[test]
    fn test_answer_rendering() {
        let kb = KnowledgeBase::defaults();
        let text = respond("What are your business hours?", &kb, DEFAULT_THRESHOLD);
        assert!(text.starts_with("🟡 Our business hours are Monday to Friday"));
        assert!(text.ends_with("\n\nℹ️ Confidence: 55.0%"));
    }

    #[test]
    fn test_blank_query_greets_for_any_threshold() {
        let kb = KnowledgeBase::defaults();
        for threshold in [0.0, 0.2, 1.0, 5.0] {
            assert_eq!(respond("", &kb, threshold), GREETING);
            assert_eq!(respond("   \t\n", &kb, threshold), GREETING);
        }
    }

    #[test]
    fn test_fallback_below_threshold() {
        let kb = KnowledgeBase::defaults();
        assert_eq!(respond("xyz123", &kb, DEFAULT_THRESHOLD), FALLBACK);
        assert_eq!(respond("zzzz", &kb, 0.0), FALLBACK);
    }

    #[test]
    fn test_custom_messages() {
        let kb = KnowledgeBase::from_categories([Category::new("a", ["alpha"], "A!").unwrap()])
            .unwrap();
        let responder = Responder::new(0.5).with_messages("hi", "no idea");
        assert_eq!(responder.reply(" ", &kb).render(), "hi");
        assert_eq!(responder.reply("beta", &kb), Reply::Fallback("no idea".to_string()));

        let reply = responder.reply("alpha", &kb);
        assert_eq!(reply.category(), Some("a"));
        assert!(reply.render().starts_with("🟢 A!"));
    }
}
