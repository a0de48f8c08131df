//! Diagnostic logging for faqgirlctl.
//!
//! Logs go to stderr so replies on stdout stay clean. FAQGIRL_LOG takes an
//! EnvFilter directive (e.g. `faqgirl_shared=trace`) and overrides -v.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "FAQGIRL_LOG";

/// Level for a `-v` count: 0 error, 1 info, 2 debug, 3+ trace.
/// Knowledge base fallbacks are reported by `main` itself.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "error",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
