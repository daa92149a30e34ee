//! # Screens
//!
//! One module per screen, each a set of async functions over [`AppState`].
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (dispatch)
//! ├── home.rs       ◄─── Screen list
//! ├── items.rs      ◄─── Inventory CRUD + restock
//! ├── customers.rs  ◄─── Customer CRUD
//! ├── purchase.rs   ◄─── Purchase form
//! ├── history.rs    ◄─── Purchase history table
//! └── config.rs     ◄─── Effective configuration
//! ```
//!
//! ## How Screens Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stockroom items add --name Widget --quantity 12 --price 19.99          │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  clap parses into ItemCommand::Add(AddItemArgs)                         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  items::add(&state, args, &mut out)                                     │
//! │    ├── validate form fields (stockroom_core::validation)                │
//! │    ├── state.db().items().add(..)                                       │
//! │    └── reload the table and print it                                    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  stdout: confirmation line + table                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Screens write to any `io::Write` so tests can capture their output.

pub mod config;
pub mod customers;
pub mod history;
pub mod home;
pub mod items;
pub mod purchase;

use std::io::Write;

use crate::cli::Commands;
use crate::error::CliResult;
use crate::state::AppState;

/// Runs one screen against an open database.
///
/// `run` prints `config` before the database is opened; here it reports
/// the same source through the loaded [`AppState`].
pub async fn dispatch<W: Write>(
    state: &AppState,
    command: Commands,
    out: &mut W,
) -> CliResult<()> {
    match command {
        Commands::Items { action } => items::run(state, action, out).await,
        Commands::Customers { action } => customers::run(state, action, out).await,
        Commands::Purchase(args) => purchase::run(state, args, out).await,
        Commands::History => history::run(state, out).await,
        Commands::Config => config::run(state.config(), out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use std::io::Write as _;
    use stockroom_db::{Database, DbConfig};

    #[tokio::test]
    async fn test_config_screen_reports_loaded_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stockroom.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        let db_path = dir.path().join("stock.db");
        writeln!(
            file,
            "[database]\npath = {:?}\n\n[display]\ncurrency_symbol = \"€\"",
            db_path.to_str().unwrap()
        )
        .unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let state = AppState::new(db, config);

        let mut out = Vec::new();
        dispatch(&state, Commands::Config, &mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with(&format!("# Config file: {}", path.display())));
        assert!(text.contains("currency_symbol = \"€\""));
    }
}
