//! Runtime configuration merged from environment variables

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const LOG_LEVEL_VAR: &str = "LINEMEAN_LOG_LEVEL";
pub const FORMAT_VAR: &str = "LINEMEAN_FORMAT";

/// How the report is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(Error::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// `EnvFilter` directive for the subscriber
    pub log_level: String,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(level) = lookup(LOG_LEVEL_VAR).filter(|l| !l.trim().is_empty()) {
            config.log_level = level;
        }

        if let Some(format) = lookup(FORMAT_VAR) {
            config.format = format.parse()?;
        }

        Ok(config)
    }
}
