use std::io::Write as _;

use anyhow::Result;
use watchlist_service::WatchEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Format {
    Text,
    Json,
}

pub(crate) fn print_titles(format: Format, items: &[String]) -> Result<()> {
    let mut out = std::io::stdout().lock();
    match format {
        Format::Json => writeln!(out, "{}", serde_json::to_string_pretty(items)?)?,
        Format::Text => {
            for item in items {
                writeln!(out, "{item}")?;
            }
        },
    }
    Ok(())
}

pub(crate) fn print_history(format: Format, entries: &[WatchEntry]) -> Result<()> {
    let mut out = std::io::stdout().lock();
    match format {
        Format::Json => writeln!(out, "{}", serde_json::to_string_pretty(entries)?)?,
        Format::Text => {
            for entry in entries {
                writeln!(out, "{}\t{}", entry.name, entry.watches)?;
            }
        },
    }
    Ok(())
}
