//! Terminal UI helpers for consistent output styling.

use std::io::IsTerminal;
use std::sync::atomic::{AtomicBool, Ordering};

/// ANSI color codes using true color (24-bit)
pub mod colors {
    pub const HEADER: &str = "\x1b[38;2;255;170;210m";
    pub const OK: &str = "\x1b[38;2;120;255;120m";
    pub const ERR: &str = "\x1b[38;2;255;100;100m";
    pub const WARN: &str = "\x1b[38;2;255;200;100m";
    pub const DIM: &str = "\x1b[38;2;140;140;140m";
    pub const CYAN: &str = "\x1b[38;2;100;200;255m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Unicode symbols
pub mod symbols {
    pub const OK: &str = "✓";
    pub const ERR: &str = "✗";
    pub const WARN: &str = "⚠";
    pub const BULLET: &str = "•";
    pub const USER: &str = "👤";
    pub const BOT: &str = "🤖";
}

/// Horizontal rule
pub const HR: &str =
    "────────────────────────────────────────────────────────────────────────────────";

/// Clear screen and move the cursor home
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

static COLOR_ENABLED: AtomicBool = AtomicBool::new(true);

pub fn set_color_enabled(enabled: bool) {
    COLOR_ENABLED.store(enabled, Ordering::Relaxed);
}

pub fn color_enabled() -> bool {
    COLOR_ENABLED.load(Ordering::Relaxed)
}

/// Colour is on when stdout is a terminal and NO_COLOR is unset
pub fn detect_color_support() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

/// Wrap `text` in `color` if colour output is on
pub fn paint(color: &str, text: &str) -> String {
    if color_enabled() {
        format!("{}{}{}", color, text, colors::RESET)
    } else {
        text.to_string()
    }
}

/// Print a styled header
pub fn print_header(title: &str) {
    println!("{}", paint(colors::DIM, HR));
    println!("{}", paint(colors::HEADER, title));
    println!("{}", paint(colors::DIM, HR));
    println!();
}

/// Print a horizontal rule
pub fn print_rule() {
    println!("{}", paint(colors::DIM, HR));
}

/// Print a section title like "📚 Available FAQ Topics:"
pub fn print_section(title: &str) {
    println!("{}", paint(colors::BOLD, title));
}

/// Print an indented bullet line
pub fn print_bullet(text: &str) {
    println!("  {} {}", paint(colors::CYAN, symbols::BULLET), text);
}

/// Print an OK line with checkmark
pub fn print_ok(message: &str) {
    println!("  {} {}", paint(colors::OK, symbols::OK), message);
}

/// Print a warning to stderr
pub fn print_warn(message: &str) {
    eprintln!("{} {}", paint(colors::WARN, symbols::WARN), message);
}

/// Print an error to stderr
pub fn print_err(message: &str) {
    eprintln!("{} {}", paint(colors::ERR, symbols::ERR), message);
}

/// Dimmed text
pub fn dim(text: &str) -> String {
    paint(colors::DIM, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_respects_switch() {
        set_color_enabled(false);
        assert_eq!(paint(colors::OK, "done"), "done");
        set_color_enabled(true);
        assert_eq!(paint(colors::OK, "done"), format!("{}done{}", colors::OK, colors::RESET));
    }
}
