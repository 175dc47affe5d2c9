//! Configuration file support for HealthLog.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/healthlog/config.toml`.

use crate::advice::{AdviceTable, DEFAULT_FALLBACK};
use crate::appointment::default_doctors;
use crate::tips::default_tips;
use crate::{AdviceEntry, Error, Result, Thresholds};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub thresholds: Thresholds,

    #[serde(default)]
    pub advice: AdviceConfig,

    #[serde(default)]
    pub tips: TipsConfig,

    #[serde(default)]
    pub appointments: AppointmentsConfig,

    #[serde(default)]
    pub assets: AssetsConfig,
}

/// Symptom advice configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AdviceConfig {
    #[serde(default = "default_fallback")]
    pub fallback: String,

    /// Replaces the built-in table when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<AdviceEntry>>,
}

impl Default for AdviceConfig {
    fn default() -> Self {
        Self {
            fallback: default_fallback(),
            entries: None,
        }
    }
}

impl AdviceConfig {
    /// The configured table, or the built-in one
    pub fn table(&self) -> AdviceTable {
        match &self.entries {
            Some(entries) => AdviceTable::new(entries.clone()),
            None => AdviceTable::default(),
        }
    }
}

/// Daily tip configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TipsConfig {
    #[serde(default = "default_tips")]
    pub tips: Vec<String>,

    /// Fixed RNG seed for reproducible tips
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for TipsConfig {
    fn default() -> Self {
        Self {
            tips: default_tips(),
            seed: None,
        }
    }
}

/// Appointment scheduling configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppointmentsConfig {
    #[serde(default = "default_doctors")]
    pub doctors: Vec<String>,
}

impl Default for AppointmentsConfig {
    fn default() -> Self {
        Self {
            doctors: default_doctors(),
        }
    }
}

/// Optional asset locations
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct AssetsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_path: Option<PathBuf>,
}

fn default_fallback() -> String {
    DEFAULT_FALLBACK.to_string()
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        let base = match dirs::config_dir() {
            Some(dir) => dir,
            None => {
                let home = std::env::var("HOME").map_err(|_| {
                    Error::Config("HOME environment variable not set".into())
                })?;
                PathBuf::from(home).join(".config")
            }
        };
        Ok(base.join("healthlog").join("config.toml"))
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Check values that serde can't
    pub fn validate(&self) -> Result<()> {
        let t = &self.thresholds;
        if !(t.water_liters.is_finite() && t.water_liters >= 0.0)
            || !(t.sleep_hours.is_finite() && t.sleep_hours >= 0.0)
        {
            return Err(Error::Config(
                "thresholds must be non-negative numbers".into(),
            ));
        }

        let errors = self.advice.table().validate();
        if !errors.is_empty() {
            return Err(Error::Config(format!(
                "invalid advice table: {}",
                errors.join("; ")
            )));
        }

        Ok(())
    }
}
