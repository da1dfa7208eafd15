//! Bookshelf Configuration System
//!
//! Holds the tunable limits of a catalog: how long a book name may be, which
//! genre labels are recognized and which of those are safe for children.
//!
//! # Architecture
//!
//! - **Trait-based**: each section implements `ConfigSection`
//! - **Graceful degradation**: invalid files still load, with warnings
//! - **Atomic writes**: config files are never left half-written
//!
//! # Example
//!
//! ```rust
//! use bookshelf_config::{CatalogConfig, Config, ConfigSection};
//!
//! let config = Config::default();
//! assert!(config.validate().is_ok());
//! assert_eq!(config.catalog.max_name_length, 40);
//! assert!(CatalogConfig::default().validate().is_ok());
//! ```

mod catalog_config;
mod error;
mod manager;
mod persistence;
mod validation;

pub use catalog_config::CatalogConfig;
pub use error::{ConfigError, ConfigResult, ValidationError};
pub use manager::ConfigManager;
pub use persistence::ConfigPersistence;
pub use validation::{ConfigSection, Validator};

use serde::{Deserialize, Serialize};

/// Current config file format version
pub const CONFIG_VERSION: u32 = 1;

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "BOOKSHELF";

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Config file format version
    pub version: u32,

    /// Catalog limits and genre taxonomy
    pub catalog: CatalogConfig,
}

impl Config {
    /// Creates a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        self.catalog.validate()
    }

    /// Merges this config with another, preferring values from `other`
    pub fn merge(&mut self, other: Config) {
        self.catalog.merge(other.catalog);
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            catalog: CatalogConfig::default(),
        }
    }
}
