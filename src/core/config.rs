use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::variants::expand_tilde;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the variant asset files
    #[serde(default)]
    pub assets_dir: Option<String>,
    /// Preferred terminal emulator for dispatched commands
    #[serde(default)]
    pub terminal: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        // An empty or corrupted file falls back to defaults
        // (this can happen when the config format changes)
        if data.trim().is_empty() {
            return Ok(Config::default());
        }

        Ok(serde_json::from_str(&data).unwrap_or_else(|e| {
            log::warn!("Ignoring unreadable config {:?}: {}", path, e);
            Config::default()
        }))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let data =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        fs::write(path, data).with_context(|| format!("Failed to write config file: {:?}", path))?;

        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().with_context(|| "Could not determine config directory")?;

        Ok(config_dir.join("sysdeck").join("config.json"))
    }

    /// Resolved assets directory: the configured override, else
    /// `{config_dir}/sysdeck/assets`.
    pub fn assets_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.assets_dir {
            return Ok(expand_tilde(dir)?);
        }

        let config_dir =
            dirs::config_dir().with_context(|| "Could not determine config directory")?;

        Ok(config_dir.join("sysdeck").join("assets"))
    }

    pub fn set_assets_dir(&mut self, dir: String) {
        self.assets_dir = Some(dir);
    }

    pub fn terminal(&self) -> Option<&str> {
        self.terminal.as_deref()
    }

    pub fn set_terminal(&mut self, terminal: String) {
        self.terminal = Some(terminal);
    }
}
