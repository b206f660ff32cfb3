//! Optional TOML configuration for the data file location.
//!
//! The config file is hand-written (there is no `init` command); a missing
//! file simply means defaults apply. Paths follow the XDG conventions:
//! config at `$XDG_CONFIG_HOME/tanklog/config.toml`, data at
//! `$XDG_DATA_HOME/tanklog/fuel-log.json`.

use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TanklogConfig {
    pub data: DataSection,
}

#[derive(Debug, Deserialize)]
pub struct DataSection {
    pub path: String,
}

/// Path of the config file, honoring a `TANKLOG_CONFIG` override.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("TANKLOG_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    Ok(xdg_config_dir()?.join("config.toml"))
}

/// Default data file location when neither flag, env, nor config name one.
pub fn default_data_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join("fuel-log.json"))
}

pub fn read_config(path: &Path) -> anyhow::Result<TanklogConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("tanklog"));
        }
    }
    Ok(home_dir()?.join(".config").join("tanklog"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("tanklog"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("tanklog"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
