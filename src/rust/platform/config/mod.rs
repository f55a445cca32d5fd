use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::tools::logger::LogLevel;

const CONFIG_CANDIDATES: [&str; 2] = ["egonlog.toml", "egonlog.json"];

/// Logger construction options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoggerConfig {
    pub level: LogLevel,
}

impl LoggerConfig {
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }
}

impl From<LogLevel> for LoggerConfig {
    fn from(level: LogLevel) -> Self {
        Self { level }
    }
}

/// On-disk shape. Either `level = "debug"` at the top, or a `[logger]`
/// table; the table wins when both are present.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    level: Option<LogLevel>,
    logger: Option<LoggerSection>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LoggerSection {
    level: Option<LogLevel>,
}

impl ConfigFile {
    fn into_config(self) -> LoggerConfig {
        let level = self
            .logger
            .and_then(|section| section.level)
            .or(self.level)
            .unwrap_or_default();
        LoggerConfig { level }
    }
}

impl LoggerConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(raw).context("invalid TOML logger config")?;
        Ok(file.into_config())
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let file: ConfigFile =
            serde_json::from_str(raw).context("invalid JSON logger config")?;
        Ok(file.into_config())
    }

    /// Load a config file, picking the format from its extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;

        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s.to_lowercase());

        match ext.as_deref() {
            Some("json") => Self::from_json_str(&raw)
                .with_context(|| format!("invalid JSON config: {}", path.display())),
            Some("toml") => Self::from_toml_str(&raw)
                .with_context(|| format!("invalid TOML config: {}", path.display())),
            _ => {
                // unknown extension: sniff JSON by its opening brace
                if raw.trim_start().starts_with('{') {
                    Self::from_json_str(&raw)
                        .with_context(|| format!("invalid JSON config: {}", path.display()))
                } else {
                    Self::from_toml_str(&raw)
                        .with_context(|| format!("invalid TOML config: {}", path.display()))
                }
            }
        }
    }

    /// Look for `egonlog.toml` then `egonlog.json` in `root`. Returns the
    /// default config when neither exists.
    pub fn discover(root: impl AsRef<Path>) -> Result<Self> {
        match find_config(root.as_ref()) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

fn find_config(root: &Path) -> Option<PathBuf> {
    CONFIG_CANDIDATES
        .iter()
        .map(|name| root.join(name))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
#[path = "test_config.rs"]
mod tests;
