//! User configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const APP_DIR_NAME: &str = "tasklist";
pub const DEFAULT_TASK_FILE: &str = "tasks.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Task file used when no `--file` is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_file: Option<PathBuf>,

    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_theme_name")]
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
        }
    }
}

fn default_theme_name() -> String {
    "light".to_string()
}

/// `<config dir>/tasklist`, created if missing
pub fn get_app_dir() -> Result<PathBuf> {
    let config_dir =
        dirs::config_dir().ok_or_else(|| anyhow::anyhow!("Cannot find config directory"))?;
    let app_dir = config_dir.join(APP_DIR_NAME);
    fs::create_dir_all(&app_dir)
        .with_context(|| format!("Failed to create {}", app_dir.display()))?;
    Ok(app_dir)
}

fn config_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("config.toml"))
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(load_config()?.unwrap_or_default())
    }

    /// Task file to use given an optional explicit choice.
    pub fn task_file(&self, explicit: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path.to_path_buf());
        }
        if let Some(path) = &self.default_file {
            return Ok(path.clone());
        }
        Ok(get_app_dir()?.join(DEFAULT_TASK_FILE))
    }
}

pub fn load_config() -> Result<Option<Config>> {
    let path = config_path()?;
    if !path.exists() {
        debug!("No config at {}, using defaults", path.display());
        return Ok(None);
    }

    let content = fs::read_to_string(&path)?;
    let config: Config =
        toml::from_str(&content).with_context(|| format!("Invalid config {}", path.display()))?;
    Ok(Some(config))
}

pub fn save_config(config: &Config) -> Result<()> {
    let path = config_path()?;
    let content = toml::to_string_pretty(config)?;
    fs::write(&path, content)?;
    Ok(())
}
