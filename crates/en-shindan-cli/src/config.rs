//! Configuration management for En-Shindan CLI
//!
//! Stores the API base URL and reference clock offset in
//! ~/.config/en-shindan/config.toml

use anyhow::{Context, Result};
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const CONFIG_DIR: &str = "en-shindan";
const CONFIG_FILE: &str = "config.toml";

/// CLI Configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Offset of the local "today" used for biorhythm (hours east of UTC)
    #[serde(default = "default_utc_offset_hours")]
    pub utc_offset_hours: i32,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_utc_offset_hours() -> i32 {
    9
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            utc_offset_hours: default_utc_offset_hours(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        Self::parse(&content)
    }

    fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).with_context(|| "Failed to parse config file")
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {:?}", dir))?;

        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Set API base URL
    pub fn set_base_url(&mut self, url: String) {
        self.base_url = url.trim_end_matches('/').to_string();
    }

    /// Set reference clock offset, rejecting offsets outside ±23 hours
    pub fn set_utc_offset_hours(&mut self, hours: i32) -> Result<()> {
        offset_from_hours(hours)?;
        self.utc_offset_hours = hours;
        Ok(())
    }

    pub fn utc_offset(&self) -> Result<FixedOffset> {
        offset_from_hours(self.utc_offset_hours)
    }
}

fn offset_from_hours(hours: i32) -> Result<FixedOffset> {
    hours
        .checked_mul(3600)
        .and_then(FixedOffset::east_opt)
        .with_context(|| format!("UTC offset out of range: {} hours", hours))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.utc_offset().unwrap().local_minus_utc(), 9 * 3600);
    }

    #[test]
    fn test_round_trip() {
        let mut config = Config::default();
        config.set_base_url("https://shindan.example.com/".to_string());
        config.set_utc_offset_hours(-3).unwrap();

        let text = toml::to_string_pretty(&config).unwrap();
        let back = Config::parse(&text).unwrap();
        assert_eq!(back.base_url, "https://shindan.example.com");
        assert_eq!(back.utc_offset_hours, -3);
    }

    #[test]
    fn test_offset_out_of_range() {
        let mut config = Config::default();
        assert!(config.set_utc_offset_hours(24).is_err());
        assert_eq!(config.utc_offset_hours, 9);
    }
}
