//! # Configuration Management for coltypes
//!
//! This crate provides the configuration structures read at startup,
//! currently the platform-specific column types that extend the built-in
//! type registry.
//!
//! ## TOML File Configuration
//! ```toml
//! [registry]
//!
//! [[registry.extensions]]
//! code = -155
//! name = "DATETIMEOFFSET"
//! category = "DATETIME"
//!
//! [[registry.extensions]]
//! code = -150
//! name = "SQL_VARIANT"
//! category = "SPECIAL"
//! ```
//!
//! Load configuration:
//! ```rust,no_run
//! use config::AppConfig;
//!
//! // Load from coltypes.toml
//! let config = AppConfig::load()?;
//!
//! // Or load from custom path
//! let config = AppConfig::from_file("config/production.toml")?;
//! # Ok::<(), config::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::{env, path::Path};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "./coltypes.toml";
const CONFIG_PATH_VAR: &str = "COLTYPES_CONFIG";

const CATEGORIES: [&str; 5] = ["NUMERIC", "TEXTUAL", "BINARY", "DATETIME", "SPECIAL"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Environment variable error: {0}")]
    Env(#[from] env::VarError),
    #[error("Dotenvy error: {0}")]
    Dotenvy(#[from] dotenvy::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub registry: RegistryConfig,
}

/// Type registry configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Platform types registered on top of the built-in table
    #[serde(default)]
    pub extensions: Vec<ExtensionType>,
}

/// A single platform-contributed column type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionType {
    pub code: i32,
    pub name: String,
    /// One of NUMERIC, TEXTUAL, BINARY, DATETIME or SPECIAL (any case)
    pub category: String,
}

impl AppConfig {
    /// Load configuration from TOML file specified in .env or defaults
    ///
    /// Without a config path in the environment and without a default
    /// config file, the built-in table is used as is.
    pub fn load() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(err) if err.not_found() => {}
            Err(err) => return Err(err.into()),
        }

        // Try COLTYPES_CONFIG from the environment or .env file
        if let Ok(config_path) = env::var(CONFIG_PATH_VAR) {
            Self::from_file(&config_path)
        }
        // Try to load config from DEFAULT_CONFIG_PATH
        else if Path::new(DEFAULT_CONFIG_PATH).exists() {
            Self::from_file(DEFAULT_CONFIG_PATH)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        for extension in &self.registry.extensions {
            if extension.name.trim().is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "Extension type {} must have a name",
                    extension.code
                )));
            }
            let category = extension.category.trim().to_ascii_uppercase();
            if !CATEGORIES.contains(&category.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "Extension type {} has unknown category {:?}",
                    extension.name, extension.category
                )));
            }
        }

        Ok(())
    }
}

impl ExtensionType {
    /// Create a new extension type
    pub fn new(code: i32, name: String, category: String) -> Self {
        Self {
            code,
            name,
            category,
        }
    }
}
