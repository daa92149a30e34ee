//! # Application State
//!
//! What every screen needs: the open database and the loaded config.
//!
//! ## Thread Safety
//! `Database` wraps a `SqlitePool`, which is shareable across tasks. The
//! config is read-only after startup.

use stockroom_db::Database;

use crate::config::AppConfig;

/// Database plus configuration, built once per invocation.
#[derive(Debug, Clone)]
pub struct AppState {
    db: Database,
    config: AppConfig,
}

impl AppState {
    /// Wraps an open database and its config.
    pub fn new(db: Database, config: AppConfig) -> Self {
        AppState { db, config }
    }

    /// Opens the database described by `config`.
    pub async fn open(config: AppConfig) -> crate::error::CliResult<Self> {
        let db = Database::new(config.db_config()?).await?;
        Ok(AppState::new(db, config))
    }

    /// Returns the database handle.
    pub fn db(&self) -> &Database {
        &self.db
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

/// Fresh in-memory database with default config.
#[cfg(test)]
pub(crate) async fn test_state() -> AppState {
    let db = Database::new(stockroom_db::DbConfig::in_memory())
        .await
        .unwrap();
    AppState::new(db, AppConfig::default())
}
