// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::{ENV_ONLYFOUNDERS_CONFIG, ENV_ONLYFOUNDERS_LATENCY_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(pub String);

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LaunchpadConfig {
    /// Delay applied by the simulated backend before an action resolves.
    pub simulated_latency_ms: u64,
    pub quick_amounts: Vec<f64>,
    pub default_project: String,
    pub default_sort: String,
    pub log_json: bool,
}

impl Default for LaunchpadConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: 2_000,
            quick_amounts: vec![250.0, 500.0, 1_000.0],
            default_project: "liquidbridge".to_string(),
            default_sort: "trending".to_string(),
            log_json: false,
        }
    }
}

impl LaunchpadConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let cfg: Self =
            toml::from_str(raw).map_err(|e| ConfigError(format!("invalid config toml: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.quick_amounts.is_empty() {
            return Err(ConfigError("quick_amounts must not be empty".to_string()));
        }
        if let Some(bad) = self
            .quick_amounts
            .iter()
            .find(|v| !v.is_finite() || **v <= 0.0)
        {
            return Err(ConfigError(format!(
                "quick_amounts entries must be positive, got {bad}"
            )));
        }
        if self.default_project.trim().is_empty() {
            return Err(ConfigError("default_project must not be empty".to_string()));
        }
        Ok(())
    }

    fn apply_env_overrides<F>(&mut self, lookup: &F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_ONLYFOUNDERS_LATENCY_MS) {
            let trimmed = raw.trim();
            if !trimmed.is_empty() {
                self.simulated_latency_ms = trimmed.parse::<u64>().map_err(|_| {
                    ConfigError(format!(
                        "{ENV_ONLYFOUNDERS_LATENCY_MS} must be an integer, got `{trimmed}`"
                    ))
                })?;
            }
        }
        Ok(())
    }
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Explicit file, then XDG config home, then `~/.config`, then a
/// workspace-local fallback.
#[must_use]
pub fn resolve_config_path() -> PathBuf {
    resolve_config_path_with(&|key: &str| std::env::var(key).ok())
}

pub(crate) fn resolve_config_path_with<F>(lookup: &F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(explicit) = non_empty(lookup, ENV_ONLYFOUNDERS_CONFIG) {
        return PathBuf::from(explicit);
    }
    if let Some(xdg) = non_empty(lookup, "XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("onlyfounders").join("config.toml");
    }
    if let Some(home) = non_empty(lookup, "HOME") {
        return PathBuf::from(home)
            .join(".config")
            .join("onlyfounders")
            .join("config.toml");
    }
    PathBuf::from(".onlyfounders").join("config.toml")
}

/// Loads the config at `path` (or the resolved default location). A missing
/// file yields defaults; env overrides are applied last.
pub fn load_config(path: Option<&Path>) -> Result<LaunchpadConfig, ConfigError> {
    load_config_with(path, &|key: &str| std::env::var(key).ok())
}

pub(crate) fn load_config_with<F>(
    path: Option<&Path>,
    lookup: &F,
) -> Result<LaunchpadConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let explicit = path.is_some();
    let path = path.map_or_else(|| resolve_config_path_with(lookup), Path::to_path_buf);
    let mut cfg = match std::fs::read_to_string(&path) {
        Ok(raw) => LaunchpadConfig::from_toml_str(&raw)?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound && !explicit => {
            LaunchpadConfig::default()
        }
        Err(e) => {
            return Err(ConfigError(format!(
                "failed to read config {}: {e}",
                path.display()
            )))
        }
    };
    cfg.apply_env_overrides(lookup)?;
    cfg.validate()?;
    Ok(cfg)
}
