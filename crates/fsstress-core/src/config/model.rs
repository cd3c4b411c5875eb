use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::consts::workload::{DEFAULT_FILES, DEFAULT_ITERS};
use crate::error::{FsstressError, Result};

/// Workload config file schema
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub workload: WorkloadConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkloadConfig {
    #[serde(default = "default_files")]
    pub files: usize,
    #[serde(default = "default_iters")]
    pub iters: usize,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            files: DEFAULT_FILES,
            iters: DEFAULT_ITERS,
        }
    }
}

fn default_files() -> usize {
    DEFAULT_FILES
}

fn default_iters() -> usize {
    DEFAULT_ITERS
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Rendering of the command stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One command per line, the format harnesses read from stdin
    #[default]
    Text,
    /// JSON Lines, one object per command
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = FsstressError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(FsstressError::InvalidArgument(format!(
                "unknown output format '{}' (expected 'text' or 'json')",
                other
            ))),
        }
    }
}

impl Config {
    /// Read a workload config from a TOML file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            FsstressError::ConfigParseError(format!("{}: {}", path.display(), e))
        })?;

        Self::from_toml(&content)
    }

    /// Parse a workload config from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| FsstressError::ConfigInvalid(e.to_string()))
    }
}
