//! bookchunk configuration management.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const DEFAULT_MAX_CHARS: usize = 1000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookchunkConfig {
    /// Maximum characters per chunk
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,

    /// Strip publishing boilerplate and TOC blocks by default
    #[serde(default)]
    pub filter_meta: bool,
}

fn default_max_chars() -> usize {
    DEFAULT_MAX_CHARS
}

impl Default for BookchunkConfig {
    fn default() -> Self {
        Self {
            max_chars: default_max_chars(),
            filter_meta: false,
        }
    }
}

impl BookchunkConfig {
    /// Get the config file path: ~/.config/cli-programs/bookchunk.toml
    pub fn config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE"))?;
        Ok(PathBuf::from(home)
            .join(".config")
            .join("cli-programs")
            .join("bookchunk.toml"))
    }

    /// Load config from file, returning default if file doesn't exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save config to file, creating parent directories as needed
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }
}
