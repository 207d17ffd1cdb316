//! Manager and logging configuration.
//!
//! # Responsibility
//! - Describe tunables for the table view and the log sink.
//! - Load them from TOML with per-field defaults.
//!
//! # Invariants
//! - A validated config always has a non-zero page size that is one of
//!   the offered page-size options.

use crate::logging::{default_log_level, init_logging, LoggingError};
use crate::pagination::paginator::DEFAULT_PAGE_SIZE;
use crate::query::criteria::SortOrder;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::time::Duration;

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_page_size_options() -> Vec<usize> {
    vec![5, 10, 20]
}

fn default_fixture_delay_ms() -> u64 {
    1000
}

fn default_level() -> String {
    default_log_level().to_string()
}

/// Configuration load or validation failure.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read config: {err}"),
            Self::Parse(err) => write!(f, "failed to parse config: {err}"),
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        Self::Parse(value)
    }
}

/// Log sink settings consumed by `init_logging`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    /// Absolute directory for rolling log files.
    pub dir: String,
}

/// Table-view settings for an `EventManager`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ManagerConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<usize>,
    #[serde(default)]
    pub sort_order: SortOrder,
    /// Simulated latency of the fixture data source.
    #[serde(default = "default_fixture_delay_ms")]
    pub fixture_delay_ms: u64,
    pub logging: Option<LoggingConfig>,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            page_size_options: default_page_size_options(),
            sort_order: SortOrder::default(),
            fixture_delay_ms: default_fixture_delay_ms(),
            logging: None,
        }
    }
}

impl ManagerConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// # Errors
    /// - Any page size (default or option) is zero.
    /// - `page_size` is not listed in non-empty `page_size_options`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Invalid("page_size must be at least 1".into()));
        }
        if self.page_size_options.contains(&0) {
            return Err(ConfigError::Invalid(
                "page_size_options cannot contain 0".into(),
            ));
        }
        if !self.page_size_options.is_empty() && !self.page_size_options.contains(&self.page_size)
        {
            return Err(ConfigError::Invalid(format!(
                "page_size {} is not one of page_size_options {:?}",
                self.page_size, self.page_size_options
            )));
        }
        Ok(())
    }

    /// Whether `page_size` may be selected at runtime.
    pub fn allows_page_size(&self, page_size: usize) -> bool {
        page_size > 0
            && (self.page_size_options.is_empty() || self.page_size_options.contains(&page_size))
    }

    /// Starts file logging when a `[logging]` section is present.
    ///
    /// Returns `Ok(false)` when the config has no logging section.
    pub fn start_logging(&self) -> Result<bool, LoggingError> {
        match &self.logging {
            Some(logging) => init_logging(logging).map(|()| true),
            None => Ok(false),
        }
    }

    pub fn fixture_delay(&self) -> Duration {
        Duration::from_millis(self.fixture_delay_ms)
    }
}
