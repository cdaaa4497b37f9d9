//! Server configuration loading from `summarizer.toml`.
//!
//! ## Example
//!
//! ```toml
//! host = "127.0.0.1"
//! port = 8080
//! language = "en"
//! default-ratio = 0.25
//! default-method = "frequency"
//! ```
//!
//! Every key is optional. Command-line flags override file values.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::errors::{Result, SummarizeError};
use crate::types::{ScoringMethod, SummarizerConfig, DEFAULT_RATIO};

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "summarizer.toml";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_LANGUAGE: &str = "en";

/// Summarizer server configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Source file for this config (for display).
    pub source: Option<PathBuf>,
    pub host: String,
    pub port: u16,
    /// Stopword language loaded at startup
    pub language: String,
    /// Ratio and method used when a request omits them
    pub defaults: SummarizerConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            source: None,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            language: DEFAULT_LANGUAGE.to_string(),
            defaults: SummarizerConfig::default(),
        }
    }
}

/// Raw config as deserialized from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawConfig {
    host: Option<String>,
    port: Option<u16>,
    language: Option<String>,
    default_ratio: Option<f64>,
    default_method: Option<ScoringMethod>,
}

impl ServerConfig {
    /// Load configuration.
    ///
    /// Search order:
    /// 1. `path`, if given (must exist)
    /// 2. `summarizer.toml` in `directory`
    /// 3. Defaults
    pub fn load(path: Option<&Path>, directory: &Path) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        let candidate = directory.join(DEFAULT_CONFIG_FILE);
        if candidate.exists() {
            return Self::from_file(&candidate);
        }

        Ok(Self::default())
    }

    /// Parse a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml(&content)
            .map_err(|e| SummarizeError::Config(format!("{}: {e}", path.display())))?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Parse TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let raw: RawConfig =
            toml::from_str(content).map_err(|e| SummarizeError::Config(e.to_string()))?;
        let config = Self::from_raw(raw);
        config.validate()?;
        Ok(config)
    }

    fn from_raw(raw: RawConfig) -> Self {
        Self {
            source: None,
            host: raw.host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: raw.port.unwrap_or(DEFAULT_PORT),
            language: raw.language.unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            defaults: SummarizerConfig {
                ratio: raw.default_ratio.unwrap_or(DEFAULT_RATIO),
                method: raw.default_method.unwrap_or_default(),
            },
        }
    }

    /// Reject a default ratio that could never summarize.
    pub fn validate(&self) -> Result<()> {
        self.defaults
            .validate()
            .map_err(|e| SummarizeError::Config(format!("default-ratio: {e}")))
    }

    /// Format config for verbose display.
    pub fn display_summary(&self) -> String {
        let source = match self.source {
            Some(ref source) => source.display().to_string(),
            None => "(defaults)".to_string(),
        };
        format!(
            "config: {source}, listen: {}:{}, language: {}, ratio: {}, method: {}",
            self.host, self.port, self.language, self.defaults.ratio, self.defaults.method
        )
    }
}
