//! Persistent CLI configuration.
//!
//! Loaded from `~/.config/tipcalc/config.toml` on Linux,
//! `~/Library/Application Support/tipcalc/config.toml` on macOS, or
//! `%APPDATA%\tipcalc\config.toml` on Windows.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tipcalc::TipConfig;
use tracing::{debug, warn};

/// CLI configuration loaded from TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CliConfig {
    /// Tip percentage used when `--tip` is omitted.
    pub default_tip_percent: Option<Decimal>,
    /// Start with the round-up toggle on.
    pub round_up: Option<bool>,
    /// Enable file logging by default.
    pub enable_logging: Option<bool>,
}

impl CliConfig {
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tipcalc"))
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }

    /// Loads the config file, or returns defaults if it is missing or broken.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            debug!("Could not determine config directory");
            return Self::default();
        };

        if !path.exists() {
            debug!("No config file found at {:?}", path);
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match Self::parse(&content) {
                Ok(config) => {
                    debug!("Loaded configuration from {:?}", path);
                    config
                }
                Err(e) => {
                    warn!("Failed to parse config file {:?}: {}", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read config file {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn save(&self) -> Result<PathBuf, std::io::Error> {
        let path = Self::config_path().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "Could not determine config directory")
        })?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(&path, content)?;
        debug!("Saved configuration to {:?}", path);
        Ok(path)
    }

    /// Writes a sample file with every key set.
    pub fn create_sample() -> Result<PathBuf, std::io::Error> {
        let sample = CliConfig {
            default_tip_percent: Some(Decimal::from(15)),
            round_up: Some(false),
            enable_logging: Some(false),
        };
        sample.save()
    }

    /// Layers the file values over `base` (usually read from the environment).
    pub fn apply_to(&self, base: TipConfig) -> TipConfig {
        let mut config = base;
        if let Some(percent) = self.default_tip_percent {
            if percent < Decimal::ZERO {
                warn!("Ignoring negative default-tip-percent {} from config file", percent);
            } else {
                config.default_tip_percent = percent;
            }
        }
        if let Some(round_up) = self.round_up {
            config.round_up_by_default = round_up;
        }
        config
    }
}
