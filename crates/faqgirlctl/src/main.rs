//! FAQgirl Control - CLI front end for the FAQgirl auto-responder
//!
//! Loads the configuration and knowledge base once, then runs one command.

use anyhow::{Context, Result};
use clap::Parser;
use faqgirl_shared::{FaqBot, KnowledgeBase};
use std::time::Duration;

use faqgirlctl::cli::{Cli, Commands};
use faqgirlctl::config::{ColorMode, FaqConfig};
use faqgirlctl::{commands, demo, logging, repl, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = FaqConfig::load(cli.config.as_deref())?
        .with_overrides(cli.kb.clone(), cli.threshold)?;

    let color = match config.output.color {
        _ if cli.no_color => false,
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => ui::detect_color_support(),
    };
    ui::set_color_enabled(color);

    let command = cli.command_or_default();

    // Validation and config printing do not need a knowledge base
    match &command {
        Commands::Validate { file } => {
            if !commands::validate(file) {
                std::process::exit(1);
            }
            return Ok(());
        }
        Commands::Config => return commands::show_config(&config),
        _ => {}
    }

    let bot = build_bot(&config, cli.strict)?;

    match command {
        Commands::Ask { query, explain } => commands::ask(&bot, &query.join(" "), explain),
        Commands::Topics => commands::print_topics(&bot),
        Commands::Samples => commands::print_samples(),
        Commands::Chat => repl::start_repl(&bot)?,
        Commands::Demo { delay_ms } => demo::run_demo(&bot, Duration::from_millis(delay_ms)).await,
        Commands::Showcase { delay_ms } => {
            demo::run_showcase(&bot, Duration::from_millis(delay_ms)).await
        }
        Commands::Export => commands::export(&bot)?,
        Commands::Validate { .. } | Commands::Config => {}
    }

    Ok(())
}

fn build_bot(config: &FaqConfig, strict: bool) -> Result<FaqBot> {
    let source = config.knowledge_source();
    let responder = config.responder();

    if strict {
        let kb = KnowledgeBase::try_load(&source)
            .with_context(|| format!("Failed to load {}", source))?;
        return Ok(FaqBot::new(kb, responder));
    }

    let (bot, warning) = FaqBot::load(&source, responder);
    if let Some(err) = warning {
        if err.is_missing_source() {
            ui::print_warn(&format!("{} not found. Using default data.", source));
        } else {
            ui::print_warn(&format!("{}. Using default data.", err));
        }
    }
    Ok(bot)
}
