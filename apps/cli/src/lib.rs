//! # Stockroom CLI Library
//!
//! Terminal front end for the Stockroom inventory database.
//!
//! ## Module Organization
//! ```text
//! stockroom_cli/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── cli.rs          ◄─── clap definitions
//! ├── config.rs       ◄─── stockroom.toml + STOCKROOM_* overrides
//! ├── state.rs        ◄─── AppState (Database + AppConfig)
//! ├── render.rs       ◄─── Tables
//! ├── commands/
//! │   ├── mod.rs      ◄─── Dispatch
//! │   ├── home.rs     ◄─── Screen list
//! │   ├── items.rs    ◄─── Inventory screen
//! │   ├── customers.rs◄─── Customer screen
//! │   ├── purchase.rs ◄─── Purchase form
//! │   ├── history.rs  ◄─── Purchase history
//! │   └── config.rs   ◄─── Effective configuration
//! └── error.rs        ◄─── CliError for every screen
//! ```
//!
//! ## Output Streams
//! Tables and messages go to stdout. Logs and errors go to stderr, so the
//! tables can be piped without noise.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod render;
pub mod state;

use std::io::Write;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use config::AppConfig;
use error::CliResult;
use state::AppState;

/// Runs one invocation.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Invocation                                        │
/// │                                                                         │
/// │  1. No subcommand ──► home screen, nothing else is touched             │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults → stockroom.toml → STOCKROOM_* env                       │
/// │     • `config` subcommand prints it and stops here                      │
/// │                                                                         │
/// │  3. Open Database ────────────────────────────────────────────────────► │
/// │     • SQLite with WAL mode, foreign keys on                             │
/// │     • Apply embedded schema (pool closed if that fails)                 │
/// │                                                                         │
/// │  4. Run the Screen ───────────────────────────────────────────────────► │
/// │                                                                         │
/// │  5. Close the Pool ───────────────────────────────────────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run<W: Write>(cli: Cli, out: &mut W) -> CliResult<()> {
    let Some(command) = cli.command else {
        return commands::home::run(out);
    };

    let config = AppConfig::load(cli.config.as_deref())?;

    if let Commands::Config = command {
        return commands::config::run(&config, out);
    }

    let state = AppState::open(config).await?;
    info!("Database ready");

    let result = commands::dispatch(&state, command, out).await;
    state.db().close().await;
    result
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=stockroom_db=trace` - Trace the database layer only
/// - Default: warnings, plus info from the stockroom crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,stockroom=info,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write as _;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[tokio::test]
    async fn test_no_subcommand_shows_home() {
        let mut out = Vec::new();
        run(cli(&["stockroom"]), &mut out).await.unwrap();

        assert!(String::from_utf8(out).unwrap().contains("Inventory Data View"));
    }

    #[tokio::test]
    async fn test_missing_explicit_config_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let missing = missing.to_str().unwrap();

        let err = run(cli(&["stockroom", "--config", missing, "history"]), &mut Vec::new())
            .await
            .unwrap_err();
        assert_eq!(err.code, error::ErrorCode::ConfigError);
    }

    #[tokio::test]
    async fn test_screens_share_one_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("stockroom.db");
        let config_path = dir.path().join("stockroom.toml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "[database]\npath = {:?}", db_path.to_str().unwrap()).unwrap();
        let config = config_path.to_str().unwrap();

        let steps: &[&[&str]] = &[
            &["stockroom", "-c", config, "items", "add", "--name", "Bolt", "--quantity", "10", "--price", "0.35"],
            &["stockroom", "-c", config, "customers", "add", "--name", "Ada", "--email", "ada@example.com", "--phone", "555"],
            &["stockroom", "-c", config, "purchase", "--customer", "1", "--item", "1", "--quantity", "4"],
        ];
        for args in steps {
            run(cli(args), &mut Vec::new()).await.unwrap();
        }

        let mut out = Vec::new();
        run(cli(&["stockroom", "-c", config, "items"]), &mut out).await.unwrap();
        let items = String::from_utf8(out).unwrap();
        assert!(items.contains("Bolt"));
        assert!(items.contains(" 6 "));

        let mut out = Vec::new();
        run(cli(&["stockroom", "-c", config, "history"]), &mut out).await.unwrap();
        let history = String::from_utf8(out).unwrap();
        assert!(history.contains("Ada"));
        assert!(history.contains("$1.40"));
    }
}
