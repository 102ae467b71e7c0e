//! Budget configuration
//!
//! Holds the default budget split, the keyword sets used by the categorizer,
//! and the summary label.
//!
//! ## Configuration Resolution
//!
//! Config is loaded with a layered resolution:
//! 1. An explicit path (`--config` / `BUCKETWISE_CONFIG`), which must exist
//! 2. Override in data dir (~/.local/share/bucketwise/config/budget.toml)
//! 3. Fall back to embedded defaults (compiled into binary)
//!
//! Files may be partial: any section or key left out keeps its default.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::categorize::KeywordRules;
use crate::error::{Error, Result};
use crate::insights::engine::DEFAULT_MONTH_LABEL;
use crate::models::BudgetSplit;

/// Embedded default config (compiled into binary)
pub const DEFAULT_CONFIG: &str = include_str!("../../../config/budget.toml");

/// Where the active configuration came from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConfigSource {
    #[default]
    Embedded,
    File(PathBuf),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => write!(f, "built-in defaults"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Budget configuration
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetConfig {
    /// Split used when a request does not supply percentages
    pub split: BudgetSplit,
    /// Merchant keyword sets
    pub rules: KeywordRules,
    /// Label reported as the summary month
    pub month_label: String,
    pub source: ConfigSource,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            split: BudgetSplit::default(),
            rules: KeywordRules::default(),
            month_label: DEFAULT_MONTH_LABEL.to_string(),
            source: ConfigSource::Embedded,
        }
    }
}

impl BudgetConfig {
    /// Load configuration (explicit path, then data dir override, then default)
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            if !path.exists() {
                return Err(Error::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            return Self::from_file(path);
        }

        match default_config_path() {
            Some(default_path) if default_path.exists() => Self::from_file(&default_path),
            _ => Self::parse(DEFAULT_CONFIG),
        }
    }

    /// Load configuration from a specific TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        let mut config = Self::parse(&content)?;
        config.source = ConfigSource::File(path.to_path_buf());
        debug!(path = %path.display(), "Loaded budget config");
        Ok(config)
    }

    /// Parse configuration from TOML content
    pub fn parse(content: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

        let mut config = Self::default();

        if let Some(split) = raw.split {
            if let Some(needs) = split.needs {
                config.split.needs = needs;
            }
            if let Some(wants) = split.wants {
                config.split.wants = wants;
            }
            if let Some(future) = split.future {
                config.split.future = future;
            }
        }

        if let Some(summary) = raw.summary {
            if let Some(month) = summary.month {
                config.month_label = month;
            }
        }

        if let Some(keywords) = raw.keywords {
            let future = keywords
                .future
                .unwrap_or_else(|| config.rules.future_keywords().to_vec());
            let needs = keywords
                .needs
                .unwrap_or_else(|| config.rules.needs_keywords().to_vec());
            config.rules = KeywordRules::new(future, needs);
        }

        Ok(config)
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("bucketwise").join("config").join("budget.toml"))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    split: Option<RawSplit>,
    summary: Option<RawSummary>,
    keywords: Option<RawKeywords>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSplit {
    needs: Option<f64>,
    wants: Option<f64>,
    future: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSummary {
    month: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawKeywords {
    future: Option<Vec<String>>,
    needs: Option<Vec<String>>,
}
