//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.userfetch.toml` in the working directory
//! 4. `~/.config/userfetch/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

use crate::constants::{CONFIG_DIR, CONFIG_FILENAME, DEFAULT_BASE_URL, ENV_BASE_URL, ENV_TIMEOUT};
use crate::env::Env;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
}

/// Remote API settings shared by both clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Root prefixed to every request path.
    pub base_url: String,
    /// Per-request timeout. `None` or `0` waits indefinitely.
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

impl ApiConfig {
    /// The effective request timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

/// One config file as written on disk. Unset keys stay `None` so a file
/// only overrides what it names.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    api: ApiFile,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ApiFile {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads the global config, then `dir/.userfetch.toml`, then applies
    /// environment variable overrides. CLI flags go on top via
    /// [`Config::apply_cli`].
    pub fn load(dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                config.merge(global);
            }
        }

        if let Some(dir) = dir {
            let local_path = dir.join(CONFIG_FILENAME);
            if local_path.exists() {
                let local = Self::load_file(&local_path)?;
                config.merge(local);
            }
        }

        config.apply_env_vars(env);

        Ok(config)
    }

    /// Apply command-line overrides, which win over every other layer.
    pub fn apply_cli(&mut self, base_url: Option<String>, timeout_secs: Option<u64>) {
        if let Some(url) = base_url {
            self.api.base_url = url;
        }
        if timeout_secs.is_some() {
            self.api.timeout_secs = timeout_secs;
        }
    }

    fn load_file(path: &Path) -> Result<ConfigFile, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR).join("config.toml"))
    }

    /// Layer a config file over this one. Every key the file sets wins,
    /// even when it repeats the built-in default.
    fn merge(&mut self, file: ConfigFile) {
        if let Some(url) = file.api.base_url {
            self.api.base_url = url;
        }
        if file.api.timeout_secs.is_some() {
            self.api.timeout_secs = file.api.timeout_secs;
        }
    }

    fn apply_env_vars(&mut self, env: &Env) {
        if let Some(url) = env.get(ENV_BASE_URL) {
            self.api.base_url = url;
        }
        if let Some(val) = env.get(ENV_TIMEOUT) {
            match val.parse::<u64>() {
                Ok(secs) => self.api.timeout_secs = Some(secs),
                Err(_) => warn!("ignoring invalid {ENV_TIMEOUT} value: {val}"),
            }
        }
    }
}
