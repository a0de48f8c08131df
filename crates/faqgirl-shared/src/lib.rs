//! Shared core for FAQgirl: knowledge base, match scoring and replies.
//!
//! Data flows one way: [`knowledge::KnowledgeBase`] -> [`scorer`] ->
//! [`responder::Responder`] -> caller. Everything here is pure apart from
//! the one-time knowledge base load.

pub mod bot;
pub mod error;
pub mod knowledge;
pub mod responder;
pub mod scorer;
pub mod similarity;

pub use bot::FaqBot;
pub use error::FaqError;
pub use knowledge::{Category, KnowledgeBase, KnowledgeSource, LoadOutcome};
pub use responder::{respond, ConfidenceTier, Reply, Responder, DEFAULT_THRESHOLD, FALLBACK, GREETING};
pub use scorer::{best_match, score, MatchResult, SignalBreakdown};
