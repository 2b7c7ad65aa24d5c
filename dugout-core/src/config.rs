//! Global dugout configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{DugoutError, DugoutResult};

static DEFAULT_DATA_DIR: &str = "~/.dugout";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

/// Configuration at ~/.config/dugout/config.toml.
/// A missing file means defaults; nothing is required.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DugoutConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Base URL of the optional remote document store. When unset, the
    /// mirror command is unavailable and everything stays local.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_url: Option<String>,
}

impl Default for DugoutConfig {
    fn default() -> Self {
        DugoutConfig {
            data_dir: default_data_dir(),
            remote_url: None,
        }
    }
}

impl DugoutConfig {
    pub fn config_path() -> DugoutResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DugoutError::Config("Could not determine config directory".into()))?
            .join("dugout");

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> DugoutResult<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(DugoutConfig::default());
        }
        let content = std::fs::read_to_string(&path)?;
        toml::from_str(&content).map_err(|e| DugoutError::Config(e.to_string()))
    }

    /// Data directory with the tilde expanded.
    pub fn data_path(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned();
        PathBuf::from(expanded)
    }

    /// Where the working collection lives.
    pub fn schedule_path(&self) -> PathBuf {
        self.data_path().join("schedule.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_fields_are_absent() {
        let config: DugoutConfig = toml::from_str("").unwrap();
        assert_eq!(config.data_dir, PathBuf::from("~/.dugout"));
        assert!(config.remote_url.is_none());
    }

    #[test]
    fn parses_a_full_config() {
        let config: DugoutConfig = toml::from_str(
            "data_dir = \"/tmp/dugout\"\nremote_url = \"https://example.com/api\"\n",
        )
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/dugout"));
        assert_eq!(config.remote_url.as_deref(), Some("https://example.com/api"));
        assert_eq!(config.schedule_path(), PathBuf::from("/tmp/dugout/schedule.json"));
    }
}
