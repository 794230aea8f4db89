//! Naming configuration
//!
//! Loads the locales the resolver falls back on. Values come from an
//! optional YAML file, then individual environment overrides, then defaults.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::locale::{FixedLocaleSource, Locale};

/// Path to a YAML naming config file
pub const CONFIG_PATH_ENV: &str = "CONCEPT_NAMING_CONFIG";
/// Override for [`NamingConfig::default_locale`]
pub const DEFAULT_LOCALE_ENV: &str = "CONCEPT_DEFAULT_LOCALE";
/// Override for [`NamingConfig::current_locale`]
pub const CURRENT_LOCALE_ENV: &str = "CONCEPT_CURRENT_LOCALE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Locale whose description is used when nothing compatible exists
    pub default_locale: Locale,
    /// Locale assumed by `get_shortest_name` when the caller passes none
    pub shortest_name_locale: Locale,
    /// Ambient locale handed out by [`NamingConfig::locale_source`]
    pub current_locale: Locale,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            default_locale: Locale::uk(),
            shortest_name_locale: Locale::us(),
            current_locale: Locale::uk(),
        }
    }
}

impl NamingConfig {
    /// Load config from the environment
    ///
    /// Resolution order:
    /// 1. `CONCEPT_NAMING_CONFIG` YAML file (if set)
    /// 2. `CONCEPT_DEFAULT_LOCALE` / `CONCEPT_CURRENT_LOCALE` overrides
    /// 3. Built-in defaults
    pub fn from_env() -> Result<Self> {
        let mut config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_file(&path)?,
            Err(_) => Self::default(),
        };

        if let Ok(value) = std::env::var(DEFAULT_LOCALE_ENV) {
            config.default_locale = value
                .parse()
                .with_context(|| format!("{DEFAULT_LOCALE_ENV}={value}"))?;
        }
        if let Ok(value) = std::env::var(CURRENT_LOCALE_ENV) {
            config.current_locale = value
                .parse()
                .with_context(|| format!("{CURRENT_LOCALE_ENV}={value}"))?;
        }

        debug!(
            default_locale = %config.default_locale,
            current_locale = %config.current_locale,
            "Naming config resolved"
        );
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read naming config: {}", path.display()))?;
        let config = Self::from_yaml_str(&content)
            .with_context(|| format!("Failed to parse naming config: {}", path.display()))?;
        info!(path = %path.display(), "Loaded naming config");
        Ok(config)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// A locale source fixed to the configured current locale
    pub fn locale_source(&self) -> FixedLocaleSource {
        FixedLocaleSource(self.current_locale.clone())
    }
}
