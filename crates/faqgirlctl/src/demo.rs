//! Scripted demo and business showcase.
//!
//! Both replay canned questions against the live bot; the pauses only
//! pace the output for an audience.

use faqgirl_shared::FaqBot;
use std::io::Write;
use std::time::{Duration, Instant};

use crate::commands;
use crate::samples::{
    Scenario, BUSINESS_VALUE, DEMO_QUERIES, IMPACT_SUMMARY, NEXT_STEPS, ROI_LINES,
    SHOWCASE_SCENARIOS,
};
use crate::ui::{self, colors, symbols};

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

pub async fn run_demo(bot: &FaqBot, delay: Duration) {
    ui::print_header(&format!(
        "{} FAQgirl - Auto Response Demo\nDemonstrating automatic responses to business queries",
        symbols::BOT
    ));

    println!("📋 Running demonstration with various business queries...");
    println!();

    for (i, query) in DEMO_QUERIES.iter().enumerate() {
        println!("Example {}:", i + 1);
        println!("{} Customer Query: {}", symbols::USER, query);
        println!();
        println!("{} FAQgirl is processing your query...", symbols::BOT);
        pause(delay).await;
        commands::print_exchange(bot, query);
    }

    ui::print_rule();
    commands::print_topics(bot);
    commands::print_samples();

    ui::print_rule();
    println!(
        "{}",
        ui::paint(
            colors::OK,
            "✅ Demo completed! FAQgirl successfully handled various business queries."
        )
    );
    ui::print_section("🎯 Business Value:");
    for line in BUSINESS_VALUE {
        ui::print_bullet(line);
    }
    ui::print_rule();
}

async fn run_scenario(bot: &FaqBot, scenario: &Scenario, delay: Duration) {
    println!("📊 Scenario: {}", scenario.description);
    println!("{} Customer ({}): {}", symbols::USER, scenario.customer, scenario.query);
    println!();

    print!("{} FAQgirl processing... ", symbols::BOT);
    let _ = std::io::stdout().flush();
    let started = Instant::now();
    let response = bot.respond(scenario.query);
    let elapsed = started.elapsed();
    pause(delay).await;
    println!("✅ Response generated!");
    println!();

    println!("{} FAQgirl Response:", symbols::BOT);
    println!("   {}", response);
    println!();

    ui::print_section("📈 Business Metrics:");
    ui::print_bullet(&format!("Response Time: {:.3} ms", elapsed.as_secs_f64() * 1000.0));
    ui::print_bullet("Customer Satisfaction: High (instant response)");
    ui::print_bullet("Support Cost: $0 (automated)");
    ui::print_bullet("Staff Time Saved: 2-3 minutes");
    println!();
    ui::print_rule();
    println!();
}

pub async fn run_showcase(bot: &FaqBot, delay: Duration) {
    ui::print_header("🏢 FAQgirl Business Demonstration\n   Automatic Customer Service for Modern Businesses");

    println!("🎯 Demonstrating real business scenarios where FAQgirl saves time and money:");
    println!();

    let total = SHOWCASE_SCENARIOS.len();
    for (i, scenario) in SHOWCASE_SCENARIOS.iter().enumerate() {
        println!("Example {}/{}:", i + 1, total);
        run_scenario(bot, scenario, delay).await;
        if i + 1 < total {
            pause(delay / 2).await;
        }
    }

    ui::print_section("💼 BUSINESS IMPACT SUMMARY");
    ui::print_rule();
    ui::print_ok(&format!(
        "{} customer queries handled instantly (0 wait time)",
        total
    ));
    for line in IMPACT_SUMMARY {
        ui::print_ok(line);
    }
    println!();

    ui::print_section("📊 ROI CALCULATION (monthly):");
    for line in ROI_LINES {
        ui::print_bullet(line);
    }
    println!();

    ui::print_section("🚀 NEXT STEPS:");
    for (i, step) in NEXT_STEPS.iter().enumerate() {
        println!("{}. {}", i + 1, step);
    }
    println!();

    ui::print_rule();
    println!("FAQgirl: Transforming customer service through intelligent automation! 🤖✨");
    ui::print_rule();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_demo_and_showcase_run_without_delay() {
        let bot = FaqBot::default();
        run_demo(&bot, Duration::ZERO).await;
        run_showcase(&bot, Duration::ZERO).await;
    }
}
