//! CLI integration tests for faqgirlctl
//!
//! Tests the CLI surface:
//! - faqgirlctl ask QUERY        answer with confidence marker
//! - faqgirlctl ask              empty question gets the greeting
//! - faqgirlctl topics           topics in knowledge base order
//! - faqgirlctl --kb FILE ...    custom knowledge base, fallback on bad files
//! - faqgirlctl validate FILE    exit status reflects validity
//! - faqgirlctl export           JSON that validates again

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(args: &[&str], config_dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_faqgirlctl"))
        .arg("--no-color")
        .args(args)
        // Keep the developer's own config out of the picture
        .env("XDG_CONFIG_HOME", config_dir)
        .env("HOME", config_dir)
        .env_remove("FAQGIRL_CONFIG")
        .env_remove("FAQGIRL_LOG")
        .output()
        .expect("failed to run faqgirlctl")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn write_kb(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_ask_business_hours() {
    let home = TempDir::new().unwrap();
    let out = run(&["ask", "What", "are", "your", "business", "hours?"], home.path());
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("Our business hours are Monday to Friday"));
    assert!(text.contains("Confidence: 55.0%"));
}

#[test]
fn test_ask_nonsense_falls_back() {
    let home = TempDir::new().unwrap();
    let out = run(&["ask", "xyz123"], home.path());
    assert!(out.status.success());
    assert!(stdout(&out).contains("couldn't find a specific answer"));
}

#[test]
fn test_ask_empty_greets() {
    let home = TempDir::new().unwrap();
    let out = run(&["ask"], home.path());
    assert!(stdout(&out).contains("Hello! I'm FAQgirl"));
}

#[test]
fn test_threshold_flag_forces_fallback() {
    let home = TempDir::new().unwrap();
    let out = run(&["ask", "--threshold", "0.9", "When are you open?"], home.path());
    assert!(stdout(&out).contains("couldn't find a specific answer"));

    let out = run(&["ask", "--threshold", "2", "When are you open?"], home.path());
    assert!(!out.status.success());
}

#[test]
fn test_topics_in_order() {
    let home = TempDir::new().unwrap();
    let out = run(&["topics"], home.path());
    let text = stdout(&out);
    let hours = text.find("Business Hours").unwrap();
    let partner = text.find("Partnership").unwrap();
    assert!(hours < partner);
}

#[test]
fn test_custom_kb() {
    let home = TempDir::new().unwrap();
    let kb = write_kb(
        &home,
        "faq.toml",
        "[parking]\nkeywords = [\"parking\", \"car\"]\nresponse = \"Free parking behind the store.\"\n",
    );
    let out = run(&["--kb", kb.to_str().unwrap(), "ask", "Where is parking?"], home.path());
    assert!(stdout(&out).contains("Free parking behind the store."));
}

#[test]
fn test_broken_kb_falls_back_with_warning() {
    let home = TempDir::new().unwrap();
    let kb = write_kb(&home, "faq.json", r#"{"bad": {"keywords": [], "response": "x"}}"#);
    let out = run(&["--kb", kb.to_str().unwrap(), "ask", "When are you open?"], home.path());
    assert!(out.status.success());
    assert!(stderr(&out).contains("Using default data"));
    assert!(stdout(&out).contains("Our business hours"));

    let out = run(&["--kb", kb.to_str().unwrap(), "--strict", "topics"], home.path());
    assert!(!out.status.success());
}

#[test]
fn test_validate_exit_codes() {
    let home = TempDir::new().unwrap();
    let good = write_kb(&home, "good.json", r#"{"a": {"keywords": ["x"], "response": "y"}}"#);
    let bad = write_kb(&home, "bad.json", "not json");
    assert!(run(&["validate", good.to_str().unwrap()], home.path()).status.success());
    assert!(!run(&["validate", bad.to_str().unwrap()], home.path()).status.success());
}

#[test]
fn test_export_validates() {
    let home = TempDir::new().unwrap();
    let out = run(&["export"], home.path());
    let path = write_kb(&home, "exported.json", &stdout(&out));
    assert!(run(&["validate", path.to_str().unwrap()], home.path()).status.success());
}
