//! Command-line surface for faqgirlctl

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

// Version is embedded at build time
pub const VERSION: &str = env!("FAQGIRL_VERSION");

#[derive(Parser, Debug)]
#[command(name = "faqgirlctl")]
#[command(about = "FAQgirl - automatic answers to frequently asked questions", long_about = None)]
#[command(version = VERSION)]
pub struct Cli {
    /// Config file (default: ~/.config/faqgirl/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Knowledge base document (.json or .toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub kb: Option<PathBuf>,

    /// Minimum confidence (0-1) needed to answer
    #[arg(long, global = true)]
    pub threshold: Option<f64>,

    /// Fail instead of falling back to the built-in FAQ
    #[arg(long, global = true)]
    pub strict: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Defaults to `chat`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Answer a single question
    Ask {
        /// The question (words are joined with spaces)
        query: Vec<String>,

        /// Show the score of every topic
        #[arg(long)]
        explain: bool,
    },

    /// List FAQ topics
    Topics,

    /// Show sample questions
    Samples,

    /// Interactive question loop
    Chat,

    /// Scripted walkthrough of typical questions
    Demo {
        /// Pause between examples in milliseconds
        #[arg(long, default_value_t = 500)]
        delay_ms: u64,
    },

    /// Customer-service scenarios with business metrics
    Showcase {
        /// Pause between scenarios in milliseconds
        #[arg(long, default_value_t = 800)]
        delay_ms: u64,
    },

    /// Check a knowledge base document without using it
    Validate {
        file: PathBuf,
    },

    /// Print the active knowledge base as JSON
    Export,

    /// Print the effective configuration as TOML
    Config,
}

impl Cli {
    pub fn command_or_default(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Chat)
    }
}
