//! Effective configuration, after file and environment overrides.

use std::io::Write;

use crate::config::AppConfig;
use crate::error::CliResult;

/// Prints where the config came from, the resolved database file and the
/// settings as TOML.
pub fn run<W: Write>(config: &AppConfig, out: &mut W) -> CliResult<()> {
    match config.source() {
        Some(path) => writeln!(out, "# Config file: {}", path.display())?,
        None => writeln!(out, "# Config file: none (defaults)")?,
    }
    writeln!(out, "# Database: {}", config.database_path()?.display())?;
    writeln!(out)?;
    write!(out, "{}", config.to_toml()?)?;
    Ok(())
}
