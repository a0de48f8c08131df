//! Command implementations for faqgirlctl

use anyhow::Result;
use faqgirl_shared::knowledge::display_name;
use faqgirl_shared::{FaqBot, KnowledgeBase, KnowledgeSource, SignalBreakdown};
use std::path::Path;

use crate::config::FaqConfig;
use crate::samples::SAMPLE_QUESTIONS;
use crate::ui::{self, colors, symbols};

/// Answer one question
pub fn ask(bot: &FaqBot, query: &str, explain: bool) {
    println!("{}", bot.respond(query));
    if explain {
        println!();
        print!("{}", format_explain(&bot.explain(query)));
        let best = bot.best_match(query);
        println!(
            "{}",
            ui::dim(&format!(
                "best: {} ({:.3}), threshold {:.2}",
                best.category_name().unwrap_or("none"),
                best.confidence,
                bot.responder().threshold()
            ))
        );
    }
}

/// Signal table, one row per topic
pub fn format_explain(rows: &[(&str, SignalBreakdown)]) -> String {
    let width = rows
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(0)
        .max("topic".len());

    let mut out = format!(
        "{:<width$}  {:>8}  {:>6}  {:>7}  {:>6}\n",
        "topic",
        "contains",
        "fuzzy",
        "overlap",
        "score",
        width = width
    );
    for (name, s) in rows {
        out.push_str(&format!(
            "{:<width$}  {:>8.3}  {:>6.3}  {:>7.3}  {:>6.3}\n",
            name,
            s.containment,
            s.fuzzy,
            s.overlap,
            s.combined(),
            width = width
        ));
    }
    out
}

/// Topic labels in knowledge base order
pub fn topic_labels(bot: &FaqBot) -> Vec<String> {
    bot.list_topics().into_iter().map(display_name).collect()
}

pub fn print_topics(bot: &FaqBot) {
    ui::print_section("📚 Available FAQ Topics:");
    for label in topic_labels(bot) {
        ui::print_bullet(&label);
    }
    println!();
}

pub fn print_samples() {
    ui::print_section("💡 Sample Questions:");
    for question in SAMPLE_QUESTIONS {
        ui::print_bullet(question);
    }
    println!();
}

/// Strictly load `file`; returns whether it is valid
pub fn validate(file: &Path) -> bool {
    match KnowledgeBase::try_load(&KnowledgeSource::File(file.to_path_buf())) {
        Ok(kb) => {
            ui::print_ok(&format!(
                "{} is valid: {} categories ({})",
                file.display(),
                kb.len(),
                kb.topics().join(", ")
            ));
            true
        }
        Err(err) => {
            ui::print_err(&format!("[{}] {}", err.code(), err));
            false
        }
    }
}

pub fn export(bot: &FaqBot) -> Result<()> {
    println!("{}", bot.knowledge_base().to_json_pretty()?);
    Ok(())
}

pub fn show_config(config: &FaqConfig) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

/// One question/answer exchange in the style shared by chat and demo
pub fn print_exchange(bot: &FaqBot, query: &str) {
    println!("{} {}", symbols::BOT, ui::paint(colors::BOLD, "FAQgirl Response:"));
    println!("{}", bot.respond(query));
    println!();
    println!("{}", ui::dim(&"-".repeat(80)));
    println!();
}
