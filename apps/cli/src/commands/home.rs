//! Home screen: the four views and how to open them.

use std::io::Write;

use crate::error::CliResult;

const TITLE: &str = "Stockroom Inventory Management System";

const SCREENS: &[(&str, &str)] = &[
    ("Inventory Data View", "stockroom items"),
    ("Customer Details View", "stockroom customers"),
    ("Buy Product View", "stockroom purchase --customer <ID> --item <ID> --quantity <N>"),
    ("Purchase History View", "stockroom history"),
];

/// Prints the home screen.
pub fn run<W: Write>(out: &mut W) -> CliResult<()> {
    writeln!(out, "{}", TITLE)?;
    writeln!(out, "{}", "=".repeat(TITLE.len()))?;
    writeln!(out)?;

    let width = SCREENS.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    for (name, command) in SCREENS {
        writeln!(out, "  {:<width$}  {}", name, command, width = width)?;
    }

    writeln!(out)?;
    writeln!(out, "Run `stockroom <screen> --help` for the actions on each screen.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_lists_every_screen() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with(TITLE));
        for (name, command) in SCREENS {
            assert!(text.contains(name));
            assert!(text.contains(command));
        }
    }
}
