//! FAQgirl configuration.
//!
//! Config file: ~/.config/faqgirl/config.toml or /etc/faqgirl/config.toml
//!
//! ```toml
//! knowledge_base = "/srv/faq/faq.json"
//! threshold = 0.25
//!
//! [messages]
//! greeting = "Hi! Ask me anything about the shop."
//!
//! [output]
//! color = "never"
//! ```

use anyhow::{bail, Context, Result};
use faqgirl_shared::{KnowledgeSource, Responder, DEFAULT_THRESHOLD, FALLBACK, GREETING};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "FAQGIRL_CONFIG";

/// Color display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when stdout is a terminal and NO_COLOR is unset
    #[default]
    Auto,
    Always,
    Never,
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,
}

/// Fixed reply texts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagesConfig {
    /// Reply to an empty question
    #[serde(default = "default_greeting")]
    pub greeting: String,

    /// Reply when nothing matches well enough
    #[serde(default = "default_fallback")]
    pub fallback: String,
}

fn default_greeting() -> String {
    GREETING.to_string()
}

fn default_fallback() -> String {
    FALLBACK.to_string()
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            greeting: default_greeting(),
            fallback: default_fallback(),
        }
    }
}

/// Main FAQgirl configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqConfig {
    /// Knowledge base document (.json or .toml); built-in FAQ when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub knowledge_base: Option<PathBuf>,

    /// Minimum confidence to answer, in [0, 1]
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    #[serde(default)]
    pub messages: MessagesConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for FaqConfig {
    fn default() -> Self {
        Self {
            knowledge_base: None,
            threshold: DEFAULT_THRESHOLD,
            messages: MessagesConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl FaqConfig {
    /// Get default user config path: ~/.config/faqgirl/config.toml
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("faqgirl").join("config.toml"))
    }

    /// Get system config path: /etc/faqgirl/config.toml
    pub fn system_config_path() -> PathBuf {
        PathBuf::from("/etc/faqgirl/config.toml")
    }

    /// Load configuration
    ///
    /// Priority:
    /// 1. `explicit` path (from --config)
    /// 2. $FAQGIRL_CONFIG
    /// 3. User config (~/.config/faqgirl/config.toml)
    /// 4. System config (/etc/faqgirl/config.toml)
    /// 5. Defaults
    ///
    /// Explicitly named files must exist; implicit ones are skipped when absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::from_file(Path::new(&path));
        }

        let implicit = Self::user_config_path()
            .into_iter()
            .chain(std::iter::once(Self::system_config_path()));
        for path in implicit {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        tracing::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load and validate a specific file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: FaqConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        validate_threshold(self.threshold)?;
        if self.messages.greeting.trim().is_empty() {
            bail!("messages.greeting must not be empty");
        }
        if self.messages.fallback.trim().is_empty() {
            bail!("messages.fallback must not be empty");
        }
        Ok(())
    }

    /// Apply command-line overrides on top of the file values
    pub fn with_overrides(mut self, knowledge_base: Option<PathBuf>, threshold: Option<f64>) -> Result<Self> {
        if let Some(path) = knowledge_base {
            self.knowledge_base = Some(path);
        }
        if let Some(t) = threshold {
            validate_threshold(t).context("Invalid --threshold")?;
            self.threshold = t;
        }
        Ok(self)
    }

    pub fn knowledge_source(&self) -> KnowledgeSource {
        KnowledgeSource::from_path(self.knowledge_base.clone())
    }

    pub fn responder(&self) -> Responder {
        Responder::new(self.threshold)
            .with_messages(self.messages.greeting.clone(), self.messages.fallback.clone())
    }

    /// Render as TOML (for `faqgirlctl config`)
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}

fn validate_threshold(threshold: f64) -> Result<()> {
    if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
        bail!("threshold must be between 0 and 1, got {}", threshold);
    }
    Ok(())
}
