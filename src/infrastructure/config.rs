//! Configuration management

use crate::error::{Result, ToolshedError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "toolshed.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root of the per-day journal files
    pub data_dir: PathBuf,
    pub cache: CacheSettings,
}

/// Connection settings for the cache tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    pub enabled: bool,
    pub host: String,
    pub port: u16,
    pub password: String,
    /// Bound on connecting and on each operation
    pub timeout_secs: u64,
    /// Bound on the startup connectivity probe
    pub probe_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from("journal_data"),
            cache: CacheSettings::default(),
        }
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        CacheSettings {
            enabled: true,
            host: "localhost".to_string(),
            port: 6379,
            password: String::new(),
            timeout_secs: 5,
            probe_timeout_secs: 2,
        }
    }
}

impl CacheSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }
}

impl Config {
    /// Load configuration from the first available source, then apply
    /// environment overrides.
    ///
    /// An explicit path (argument, then `TOOLSHED_CONFIG`) must exist;
    /// `toolshed.toml` in the working directory is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let explicit = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os("TOOLSHED_CONFIG").map(PathBuf::from));

        let mut config = match explicit {
            Some(path) => Self::load_from_file(&path)?,
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::load_from_file(fallback)?
                } else {
                    Config::default()
                }
            }
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ToolshedError::Config(format!("Config file not found: {}", path.display()))
            } else {
                ToolshedError::Io(e)
            }
        })?;

        toml::from_str(&contents).map_err(|e| {
            ToolshedError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Apply environment overrides read through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("TOOLSHED_DATA_DIR") {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(flag) = lookup("TOOLSHED_CACHE") {
            self.cache.enabled = parse_switch("TOOLSHED_CACHE", &flag)?;
        }
        if let Some(host) = lookup("REDIS_HOST") {
            self.cache.host = host;
        }
        if let Some(port) = lookup("REDIS_PORT") {
            self.cache.port = port.trim().parse().map_err(|_| {
                ToolshedError::Config(format!("REDIS_PORT must be a port number, got '{}'", port))
            })?;
        }
        if let Some(password) = lookup("REDIS_PASSWORD") {
            self.cache.password = password;
        }
        if let Some(timeout) = lookup("REDIS_TIMEOUT") {
            self.cache.timeout_secs = timeout.trim().parse().map_err(|_| {
                ToolshedError::Config(format!(
                    "REDIS_TIMEOUT must be a number of seconds, got '{}'",
                    timeout
                ))
            })?;
        }
        Ok(())
    }
}

fn parse_switch(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(ToolshedError::Config(format!(
            "{} must be on or off, got '{}'",
            key, value
        ))),
    }
}
