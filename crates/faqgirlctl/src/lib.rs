//! faqgirlctl - terminal front end for FAQgirl.
//!
//! The binary in `main.rs` only wires these modules together.

pub mod cli;
pub mod commands;
pub mod config;
pub mod demo;
pub mod logging;
pub mod repl;
pub mod samples;
pub mod ui;
