//! FaqBot: a loaded knowledge base plus a responder.
//!
//! This is the surface the CLI and demos talk to. It is plain owned data,
//! so one instance can be shared across threads without locking.

use crate::knowledge::{KnowledgeBase, KnowledgeSource, LoadOutcome};
use crate::responder::{Reply, Responder};
use crate::scorer::{self, MatchResult, SignalBreakdown};

#[derive(Debug, Clone)]
pub struct FaqBot {
    knowledge_base: KnowledgeBase,
    responder: Responder,
}

impl Default for FaqBot {
    fn default() -> Self {
        Self::new(KnowledgeBase::defaults(), Responder::default())
    }
}

impl FaqBot {
    pub fn new(knowledge_base: KnowledgeBase, responder: Responder) -> Self {
        Self {
            knowledge_base,
            responder,
        }
    }

    /// Load the knowledge base (falling back to defaults) and wrap it.
    /// The load outcome's warning, if any, is returned alongside.
    pub fn load(source: &KnowledgeSource, responder: Responder) -> (Self, Option<crate::FaqError>) {
        let LoadOutcome {
            knowledge_base,
            warning,
        } = KnowledgeBase::load(source);
        (Self::new(knowledge_base, responder), warning)
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.knowledge_base
    }

    pub fn responder(&self) -> &Responder {
        &self.responder
    }

    /// Rendered reply at the configured threshold
    pub fn respond(&self, query: &str) -> String {
        self.reply(query).render()
    }

    /// Rendered reply at an explicit threshold
    pub fn respond_with_threshold(&self, query: &str, threshold: f64) -> String {
        self.responder
            .reply_with_threshold(query, &self.knowledge_base, threshold)
            .render()
    }

    /// Structured reply at the configured threshold
    pub fn reply(&self, query: &str) -> Reply {
        self.responder.reply(query, &self.knowledge_base)
    }

    pub fn best_match(&self, query: &str) -> MatchResult<'_> {
        scorer::best_match(query, &self.knowledge_base)
    }

    /// Per-category signals, in knowledge base order
    pub fn explain(&self, query: &str) -> Vec<(&str, SignalBreakdown)> {
        scorer::rank(query, &self.knowledge_base)
            .into_iter()
            .map(|(category, signals)| (category.name(), signals))
            .collect()
    }

    /// Category names in knowledge base order
    pub fn list_topics(&self) -> Vec<&str> {
        self.knowledge_base.topics()
    }
}
