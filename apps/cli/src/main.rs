//! # Stockroom Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        stockroom                                        │
//! │                                                                         │
//! │  main.rs ────► parse args, init logging, map errors to exit codes       │
//! │                                                                         │
//! │  lib.rs ─────► config, database, screen dispatch                        │
//! │                                                                         │
//! │  commands/ ──► home, items, customers, purchase, history, config        │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                         SQLite Database                          │  │
//! │  │  stockroom.db (local file, WAL mode, foreign keys on)            │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::process::ExitCode;

use stockroom_cli::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    stockroom_cli::init_tracing();

    let mut stdout = std::io::stdout().lock();
    match stockroom_cli::run(cli, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(code = ?err.code, message = %err.message, "Command failed");
            eprintln!("Error: {}", err.message);
            ExitCode::from(err.code.exit_code())
        }
    }
}
