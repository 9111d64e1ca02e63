//! User configuration and credential resolution
//!
//! An optional TOML file supplies defaults; command-line flags and the
//! environment take precedence over it.

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::{DEFAULT_API_BASE, DEFAULT_COLUMNS, RetryConfig};

/// Path to a service-account key file
pub const CREDENTIAL_ENV: &str = "GOOGLE_SHEETS_CREDENTIAL";
/// Overrides the config file location
pub const CONFIG_PATH_ENV: &str = "SHEETS2JSON_CONFIG";

/// Contents of `config.toml`; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub credential: Option<PathBuf>,
    pub default_columns: Option<String>,
    pub api_base_url: Option<String>,
    pub retry: RetrySettings,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RetrySettings {
    pub max_attempts: Option<u32>,
    pub initial_delay_ms: Option<u64>,
    pub max_delay_ms: Option<u64>,
}

impl Config {
    /// `$SHEETS2JSON_CONFIG`, else `<config dir>/sheets2json/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("sheets2json").join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// A missing file gives defaults; an unreadable or invalid one is an error
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn default_columns(&self) -> &str {
        self.default_columns.as_deref().unwrap_or(DEFAULT_COLUMNS)
    }

    pub fn api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE)
    }

    pub fn retry_config(&self) -> RetryConfig {
        let mut builder = RetryConfig::builder();
        if let Some(attempts) = self.retry.max_attempts {
            builder = builder.max_attempts(attempts);
        }
        if let Some(ms) = self.retry.initial_delay_ms {
            builder = builder.initial_delay(Duration::from_millis(ms));
        }
        if let Some(ms) = self.retry.max_delay_ms {
            builder = builder.max_delay(Duration::from_millis(ms));
        }
        builder.build()
    }
}

/// Where the credential path came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    Flag,
    Environment,
    ConfigFile,
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialSource::Flag => write!(f, "--credential"),
            CredentialSource::Environment => write!(f, "{}", CREDENTIAL_ENV),
            CredentialSource::ConfigFile => write!(f, "config file"),
        }
    }
}

/// Pick the credential file: flag, then environment, then config file
pub fn resolve_credential_path(
    flag: Option<&Path>,
    env_value: Option<String>,
    config: &Config,
) -> Result<(PathBuf, CredentialSource)> {
    if let Some(path) = flag {
        return Ok((path.to_path_buf(), CredentialSource::Flag));
    }

    if let Some(value) = env_value.filter(|v| !v.is_empty()) {
        return Ok((PathBuf::from(value), CredentialSource::Environment));
    }

    if let Some(path) = &config.credential {
        return Ok((path.clone(), CredentialSource::ConfigFile));
    }

    bail!(
        "No credentials provided. Use -c or {} environment variable",
        CREDENTIAL_ENV
    )
}
