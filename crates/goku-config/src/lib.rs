//! # goku-config
//!
//! Layered configuration loading for goku using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GOKU_*` prefix, `__` as separator)
//! 2. Project-level `.goku/config.toml`
//! 3. User-level `~/.config/goku/config.toml`
//! 4. Built-in defaults
//!
//! Command-line flags are applied by the CLI on top of the loaded values.
//!
//! # Environment Variable Mapping
//!
//! Figment maps `GOKU_GENERATE__MOCK_NAME` -> `generate.mock_name`,
//! `GOKU_SCAN__INCLUDE_TEST_FILES` -> `scan.include_test_files`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use goku_config::GokuConfig;
//!
//! let config = GokuConfig::load().expect("config");
//! println!("{}", config.generate.interface_name("Store"));
//! ```

mod error;
mod general;
mod generate;
mod scan;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use generate::GenerateConfig;
pub use scan::ScanConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG: &str = ".goku/config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GokuConfig {
    #[serde(default)]
    pub generate: GenerateConfig,
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl GokuConfig {
    /// Load and validate configuration from every source.
    ///
    /// # Errors
    /// [`ConfigError::Figment`] when a source cannot be read or has the wrong
    /// shape, [`ConfigError::InvalidValue`] when [`GokuConfig::validate`] fails.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path().filter(|p| p.exists()) {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(PROJECT_CONFIG);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("GOKU_").split("__"))
    }

    /// Reject values that would produce unusable output.
    ///
    /// # Errors
    /// [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let suffix = &self.generate.interface_suffix;
        if suffix.is_empty() || !suffix.chars().all(|c| c.is_alphanumeric() || c == '_') {
            return Err(ConfigError::InvalidValue {
                field: "generate.interface_suffix".to_string(),
                reason: format!("'{suffix}' is not a valid identifier tail"),
            });
        }

        let ext = &self.scan.extension;
        if ext.is_empty() || ext.contains(['/', '\\']) || ext.starts_with('.') {
            return Err(ConfigError::InvalidValue {
                field: "scan.extension".to_string(),
                reason: format!("'{ext}' must be a bare extension such as 'go'"),
            });
        }

        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("goku").join("config.toml"))
    }
}
