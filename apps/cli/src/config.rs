//! # Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     STOCKROOM_DB_PATH=/srv/stockroom.db                                │
//! │     STOCKROOM_MAX_CONNECTIONS=2                                        │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, or the platform default:                          │
//! │     ~/.config/stockroom/stockroom.toml (Linux)                         │
//! │     ~/Library/Application Support/com.stockroom.stockroom/... (macOS)  │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     database in the platform data dir, 5 connections, "$"             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A missing default file is fine. A file named with `--config` that does
//! not exist is an error.
//!
//! ## Configuration File Format
//! ```toml
//! # stockroom.toml
//! [database]
//! path = "/var/lib/stockroom/stockroom.db"
//! max_connections = 5
//! run_migrations = true
//!
//! [display]
//! currency_symbol = "$"
//! ```
//!
//! Configuration is read-only after loading, so it is passed around by
//! reference.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{CliError, CliResult};
use stockroom_core::Money;
use stockroom_db::DbConfig;

/// Config file name inside the platform config dir.
pub const CONFIG_FILE_NAME: &str = "stockroom.toml";

/// Database file name inside the platform data dir.
pub const DB_FILE_NAME: &str = "stockroom.db";

/// Overrides `[database] path`.
pub const ENV_DB_PATH: &str = "STOCKROOM_DB_PATH";

/// Overrides `[database] max_connections`.
pub const ENV_MAX_CONNECTIONS: &str = "STOCKROOM_MAX_CONNECTIONS";

// =============================================================================
// Sections
// =============================================================================

/// `[database]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// SQLite file. `None` means `<data dir>/stockroom.db`.
    pub path: Option<PathBuf>,

    /// Pool size.
    /// Default: 5
    pub max_connections: u32,

    /// Apply the embedded schema on startup.
    /// Default: true
    pub run_migrations: bool,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        DatabaseSettings {
            path: None,
            max_connections: 5,
            run_migrations: true,
        }
    }
}

/// `[display]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Symbol printed in front of prices and totals.
    /// Default: "$"
    pub currency_symbol: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            currency_symbol: "$".to_string(),
        }
    }
}

// =============================================================================
// App Configuration
// =============================================================================

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub database: DatabaseSettings,
    pub display: DisplaySettings,

    /// File the settings were read from. Not part of the file itself.
    #[serde(skip)]
    source: Option<PathBuf>,
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`config_path`, else the platform default if present)
    /// 3. Environment variables
    pub fn load(config_path: Option<&Path>) -> CliResult<Self> {
        let mut config = match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                Self::from_file(path)?
            }
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parses a config file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&contents)?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Returns the file these settings came from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Renders the configuration as TOML.
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::config(format!("Could not serialize config: {}", e)))
    }

    /// Checks values that would only fail later, at connect time.
    pub fn validate(&self) -> CliResult<()> {
        if self.database.max_connections == 0 {
            return Err(CliError::config(
                "database.max_connections must be greater than 0",
            ));
        }

        if let Some(path) = &self.database.path {
            if path.as_os_str().is_empty() {
                return Err(CliError::config("database.path must not be empty"));
            }
        }

        Ok(())
    }

    /// Applies `STOCKROOM_*` environment overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup(ENV_DB_PATH) {
            debug!(path = %path, "Overriding database path from environment");
            self.database.path = Some(PathBuf::from(path));
        }

        if let Some(max) = lookup(ENV_MAX_CONNECTIONS) {
            match max.parse::<u32>() {
                Ok(n) => self.database.max_connections = n,
                Err(_) => warn!(value = %max, "Ignoring invalid {}", ENV_MAX_CONNECTIONS),
            }
        }
    }

    /// Resolves the database file, creating its parent directory.
    pub fn database_path(&self) -> CliResult<PathBuf> {
        let path = match &self.database.path {
            Some(path) => path.clone(),
            None => project_dirs()
                .ok_or_else(|| CliError::config("Could not determine app data directory"))?
                .data_dir()
                .join(DB_FILE_NAME),
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        Ok(path)
    }

    /// Builds the pool configuration.
    pub fn db_config(&self) -> CliResult<DbConfig> {
        Ok(DbConfig::new(self.database_path()?)
            .max_connections(self.database.max_connections)
            .run_migrations(self.database.run_migrations))
    }

    /// Formats an amount with the configured currency symbol.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = AppConfig::default();
    /// assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        amount.format_with(&self.display.currency_symbol)
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "stockroom", "stockroom")
}
