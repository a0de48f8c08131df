//! REPL - interactive question loop
//!
//! Special inputs: quit/exit/bye, help, topics, clear. Anything else is a
//! question for the bot.

use anyhow::Result;
use faqgirl_shared::FaqBot;
use std::io::{self, BufRead, Write};

use crate::commands;
use crate::ui::{self, colors, symbols, CLEAR_SCREEN};

/// What a line of input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplInput {
    Exit,
    Help,
    Topics,
    Clear,
    Blank,
    Question(String),
}

/// Route one line of input
pub fn route_input(line: &str) -> ReplInput {
    let trimmed = line.trim();
    match trimmed.to_lowercase().as_str() {
        "" => ReplInput::Blank,
        "quit" | "exit" | "bye" => ReplInput::Exit,
        "help" => ReplInput::Help,
        "topics" => ReplInput::Topics,
        "clear" => ReplInput::Clear,
        _ => ReplInput::Question(trimmed.to_string()),
    }
}

pub fn print_welcome() {
    ui::print_header(&format!("{} Welcome to FAQgirl Interactive Demo!", symbols::BOT));
    println!("This demo allows you to test how FAQgirl responds to your questions.");
    println!();
    ui::print_section("💡 Tips:");
    ui::print_bullet("Try asking about: hours, contact, pricing, services, delivery, refunds");
    ui::print_bullet("Use natural language - FAQgirl understands variations");
    ui::print_bullet("Type 'help' to see sample questions");
    ui::print_bullet("Type 'topics' to see available FAQ categories");
    ui::print_bullet("Type 'quit' or 'exit' to end the demo");
    println!();
    ui::print_rule();
    println!();
}

fn print_prompt() -> io::Result<()> {
    print!("{} {} ", symbols::USER, ui::paint(colors::CYAN, "Your Question:"));
    io::stdout().flush()
}

/// Start the interactive loop on stdin
pub fn start_repl(bot: &FaqBot) -> Result<()> {
    print_welcome();
    println!(
        "{} FAQgirl is ready! Ask me anything about our business.",
        symbols::BOT
    );
    println!();

    let stdin = io::stdin();
    run_repl_loop(bot, stdin.lock())
}

/// Main loop over any line source (factored out for tests)
pub fn run_repl_loop<R: BufRead>(bot: &FaqBot, input: R) -> Result<()> {
    let mut lines = input.lines();

    loop {
        print_prompt()?;

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                ui::print_err(&format!("Error reading input: {}", e));
                continue;
            }
            None => {
                println!();
                println!();
                println!("{} Demo ended. Thank you for trying FAQgirl! 👋", symbols::BOT);
                break;
            }
        };

        match route_input(&line) {
            ReplInput::Exit => {
                println!();
                println!("{} Thank you for trying FAQgirl! Goodbye! 👋", symbols::BOT);
                break;
            }
            ReplInput::Help => {
                println!();
                commands::print_topics(bot);
                commands::print_samples();
            }
            ReplInput::Topics => {
                println!();
                commands::print_topics(bot);
            }
            ReplInput::Clear => {
                print!("{}", CLEAR_SCREEN);
                print_welcome();
            }
            ReplInput::Blank => continue,
            ReplInput::Question(query) => {
                tracing::info!("question: {}", query);
                println!();
                commands::print_exchange(bot, &query);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_route_input() {
        assert_eq!(route_input("  QUIT "), ReplInput::Exit);
        assert_eq!(route_input("bye"), ReplInput::Exit);
        assert_eq!(route_input("Help"), ReplInput::Help);
        assert_eq!(route_input("topics"), ReplInput::Topics);
        assert_eq!(route_input("clear"), ReplInput::Clear);
        assert_eq!(route_input("   "), ReplInput::Blank);
        assert_eq!(
            route_input("  When are you open? "),
            ReplInput::Question("When are you open?".to_string())
        );
        // Only exact commands are intercepted
        assert_eq!(
            route_input("help me with a refund"),
            ReplInput::Question("help me with a refund".to_string())
        );
    }

    #[test]
    fn test_loop_stops_on_exit_and_eof() {
        let bot = FaqBot::default();
        run_repl_loop(&bot, Cursor::new("When are you open?\n\nexit\nnever read\n")).unwrap();
        run_repl_loop(&bot, Cursor::new("topics\n")).unwrap();
    }
}
