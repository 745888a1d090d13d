use super::errors::ConfigError;
use super::request::RequestConfig;
use crate::target::{Target, DEFAULT_INTERVAL_SECS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_APP_PORT: u16 = 3333;
pub const DEFAULT_LOG_LEVEL: &str = "DEBUG";

/// Prefix shared by every environment override.
pub const ENV_PREFIX: &str = "DNS_VERIFIER_";

/// Locations probed, in order, when no config path is given.
pub const CONFIG_SEARCH_PATHS: [&str; 2] = ["config.yaml", "/etc/dns-verifier/config.yaml"];

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// HTTP port for /metrics, /live and /ready (default: 3333)
    #[serde(default = "default_app_port")]
    pub app_port: u16,

    /// Log verbosity (default: "DEBUG")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Interval applied to requests without their own `interval`.
    /// When unset, requests default to 360 seconds.
    #[serde(default)]
    pub interval: Option<u64>,

    #[serde(default)]
    pub requests: Vec<RequestConfig>,
}

/// Overrides coming from command-line flags; they win over file and environment.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub app_port: Option<u16>,
    pub log_level: Option<String>,
}

/// Result of cleaning the configured requests.
#[derive(Debug)]
pub struct BuiltTargets {
    pub targets: Vec<Target>,
    /// Requests that failed validation and were skipped.
    pub rejected: Vec<ConfigError>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_port: default_app_port(),
            log_level: default_log_level(),
            interval: None,
            requests: Vec::new(),
        }
    }
}

fn default_app_port() -> u16 {
    DEFAULT_APP_PORT
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Config {
    /// Loads the YAML file, then applies environment variables and CLI flags.
    pub fn load(config_path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let path = match config_path {
            Some(path) => PathBuf::from(path),
            None => Self::locate().ok_or_else(|| {
                ConfigError::NotFound(CONFIG_SEARCH_PATHS.join(", "))
            })?,
        };

        let mut config = Self::from_file(&path)?;
        config.apply_env(|key| std::env::var(key).ok())?;
        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn locate() -> Option<PathBuf> {
        CONFIG_SEARCH_PATHS
            .iter()
            .map(PathBuf::from)
            .find(|path| path.is_file())
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not to a map.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Applies `DNS_VERIFIER_APP_PORT`, `DNS_VERIFIER_LOG_LEVEL` and
    /// `DNS_VERIFIER_INTERVAL` through `lookup`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));

        if let Some(port) = var("APP_PORT") {
            self.app_port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }

        if let Some(level) = var("LOG_LEVEL") {
            self.log_level = level;
        }

        if let Some(interval) = var("INTERVAL") {
            let secs: u64 = interval
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidInterval(interval.clone()))?;
            self.interval = Some(secs);
        }

        Ok(())
    }

    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.app_port {
            self.app_port = port;
        }
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.app_port == 0 {
            return Err(ConfigError::InvalidPort("0".to_string()));
        }
        if self.interval == Some(0) {
            return Err(ConfigError::InvalidInterval("0".to_string()));
        }
        if self.requests.is_empty() {
            return Err(ConfigError::EmptyRequests);
        }
        Ok(())
    }

    pub fn default_interval_secs(&self) -> u64 {
        self.interval.unwrap_or(DEFAULT_INTERVAL_SECS)
    }

    /// Turns every request into a [`Target`], skipping invalid ones.
    /// Fails when there is nothing left to monitor.
    pub fn build_targets(&self) -> Result<BuiltTargets, ConfigError> {
        if self.requests.is_empty() {
            return Err(ConfigError::EmptyRequests);
        }

        let default_interval = self.default_interval_secs();
        let mut targets = Vec::with_capacity(self.requests.len());
        let mut rejected = Vec::new();

        for request in &self.requests {
            match request.to_target(default_interval) {
                Ok(target) => targets.push(target),
                Err(e) => rejected.push(e),
            }
        }

        if targets.is_empty() {
            return Err(ConfigError::NoValidRequests);
        }

        Ok(BuiltTargets { targets, rejected })
    }
}
