//! Configuration management for the library catalog

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LibraryConfig {
    /// Branch name stamped on borrow records
    pub location: String,
    /// Reject empty titles and duplicate ids when adding or renaming items
    pub validate_input: bool,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoanConfig {
    pub duration_days: u32,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub library: LibraryConfig,
    pub loans: LoanConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Environment variables, e.g. LIBRARY_LOANS__DURATION_DAYS=30
            .add_source(
                Environment::with_prefix("LIBRARY")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            location: "Main Branch".to_string(),
            validate_input: false,
        }
    }
}

impl Default for LoanConfig {
    fn default() -> Self {
        Self { duration_days: 21 }
    }
}
