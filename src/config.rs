//! TOML configuration
//!
//! Loaded from `~/.tripbuddy/config.toml`, created with defaults on
//! first run. CLI flags override file values; file values override the
//! built-in defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub assistant: AssistantConfig,

    #[serde(default)]
    pub backend: BackendConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AssistantConfig {
    /// Persona name; defaults to Aria when unset
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BackendConfig {
    /// Provider name; defaults to the scripted backend when unset
    pub provider: Option<String>,
}

impl Config {
    /// Load configuration from the default path, creating a default
    /// file if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let config = Config::default();
            config.save()?;
            return Ok(config);
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let toml_string = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, toml_string).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;

        Ok(home.join(".tripbuddy").join("config.toml"))
    }

    /// Configured persona name, if any
    pub fn assistant_name(&self) -> Option<&str> {
        self.assistant.name.as_deref()
    }

    /// Configured backend provider, falling back to the scripted one
    pub fn provider(&self) -> &str {
        self.backend.provider.as_deref().unwrap_or("scripted")
    }
}
