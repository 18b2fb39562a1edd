use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use tracing::warn;

use crate::builder::{TipBuilder, Validate};
use crate::inputs::IntoTipDecimal;
use crate::types::TipError;

/// Defaults applied when the user has not entered a value yet.
///
/// Configuration never changes the arithmetic itself; it only seeds the
/// tip percentage and the round-up toggle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TipConfig {
    /// Tip percentage used when none is given (e.g. `15` for 15%).
    pub default_tip_percent: Decimal,
    /// Initial state of the round-up toggle.
    pub round_up_by_default: bool,
}

impl Default for TipConfig {
    fn default() -> Self {
        TipConfig {
            default_tip_percent: dec!(15),
            round_up_by_default: false,
        }
    }
}

impl std::str::FromStr for TipConfig {
    type Err = TipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: TipConfig = serde_json::from_str(s)
            .map_err(|e| TipError::ConfigurationError(format!("Failed to parse config JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }
}

impl TipConfig {
    pub fn builder() -> TipConfigBuilder {
        TipConfigBuilder::default()
    }

    pub fn new(default_tip_percent: impl IntoTipDecimal) -> Result<Self, TipError> {
        let config = Self {
            default_tip_percent: default_tip_percent.into_tip_decimal()?,
            ..Default::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), TipError> {
        if self.default_tip_percent < Decimal::ZERO {
            return Err(TipError::ConfigurationError("Default tip percent must be non-negative".to_string()));
        }
        Ok(())
    }

    /// Loads configuration from `TIPCALC_DEFAULT_PERCENT` and `TIPCALC_ROUND_UP`.
    ///
    /// Unset variables keep their defaults; set but malformed ones are errors.
    pub fn from_env() -> Result<Self, TipError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, TipError> {
        let mut config = Self::default();

        if let Some(percent) = lookup("TIPCALC_DEFAULT_PERCENT") {
            config.default_tip_percent = percent
                .trim()
                .parse::<Decimal>()
                .map_err(|e| TipError::ConfigurationError(format!("Invalid TIPCALC_DEFAULT_PERCENT: {}", e)))?;
        }
        if let Some(round_up) = lookup("TIPCALC_ROUND_UP") {
            config.round_up_by_default = parse_flag(&round_up).ok_or_else(|| {
                TipError::ConfigurationError(format!("Invalid TIPCALC_ROUND_UP: '{}'", round_up))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a JSON file.
    pub fn try_from_json(path: &str) -> Result<Self, TipError> {
        let content = fs::read_to_string(path)
            .map_err(|e| TipError::ConfigurationError(format!("Failed to read config file: {}", e)))?;
        content.parse()
    }

    pub fn with_default_percent(mut self, percent: impl IntoTipDecimal) -> Result<Self, TipError> {
        self.default_tip_percent = percent.into_tip_decimal()?;
        self.validate()?;
        Ok(self)
    }

    pub fn with_round_up(mut self, round_up: bool) -> Self {
        self.round_up_by_default = round_up;
        self
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

// ========== TipConfigBuilder ==========

#[derive(Default)]
pub struct TipConfigBuilder {
    default_tip_percent: Option<Decimal>,
    round_up: Option<bool>,
}

impl TipConfigBuilder {
    pub fn default_tip_percent(mut self, percent: impl IntoTipDecimal) -> Self {
        match percent.into_tip_decimal() {
            Ok(p) => self.default_tip_percent = Some(p),
            Err(e) => warn!("Ignoring default tip percent: {}", e),
        }
        self
    }

    pub fn round_up(mut self, round_up: bool) -> Self {
        self.round_up = Some(round_up);
        self
    }
}

impl Validate for TipConfigBuilder {
    fn validate(&self) -> Result<(), TipError> {
        if let Some(percent) = self.default_tip_percent
            && percent < Decimal::ZERO
        {
            return Err(TipError::ConfigurationError("Default tip percent must be non-negative".to_string()));
        }
        Ok(())
    }
}

impl TipBuilder<TipConfig> for TipConfigBuilder {
    fn build(self) -> Result<TipConfig, TipError> {
        Validate::validate(&self)?;

        let defaults = TipConfig::default();
        let config = TipConfig {
            default_tip_percent: self.default_tip_percent.unwrap_or(defaults.default_tip_percent),
            round_up_by_default: self.round_up.unwrap_or(defaults.round_up_by_default),
        };
        config.validate()?;
        Ok(config)
    }
}
