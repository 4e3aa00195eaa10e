use crate::cli::JournalFormat;
use anyhow::Result;
use chrono::{DateTime, Utc};
use scanlog_core::{Journal, ScanRecord};
use serde::Serialize;
use std::path::PathBuf;

pub const JOURNAL_SCHEMA_V1: &str = "scanlog.journal.v1";

#[derive(Debug, Serialize)]
struct JournalSnapshot {
    schema: String,
    generated_at: DateTime<Utc>,
    tool: String,
    entries: Vec<ScanRecord>,
}

impl JournalSnapshot {
    fn from_entries(entries: Vec<ScanRecord>) -> Self {
        Self {
            schema: JOURNAL_SCHEMA_V1.to_string(),
            generated_at: Utc::now(),
            tool: format!("scanlog {}", env!("CARGO_PKG_VERSION")),
            entries,
        }
    }
}

pub fn list(
    format: JournalFormat,
    limit: Option<usize>,
    journal_override: Option<&PathBuf>,
    settings_path: Option<&PathBuf>,
) -> Result<()> {
    let mut entries = load_entries(journal_override, settings_path)?;
    if let Some(limit) = limit {
        entries.truncate(limit);
    }

    print_entries(entries, format)
}

pub fn tail(
    lines: usize,
    journal_override: Option<&PathBuf>,
    settings_path: Option<&PathBuf>,
) -> Result<()> {
    let entries = load_entries(journal_override, settings_path)?;
    let skip = entries.len().saturating_sub(lines);

    print_entries(entries.into_iter().skip(skip).collect(), JournalFormat::Text)
}

fn load_entries(
    journal_override: Option<&PathBuf>,
    settings_path: Option<&PathBuf>,
) -> Result<Vec<ScanRecord>> {
    let settings = crate::settings_loader::load(settings_path)?;
    let path = crate::settings_loader::journal_path(journal_override, &settings);
    Ok(Journal::new(path).entries()?)
}

fn print_entries(entries: Vec<ScanRecord>, format: JournalFormat) -> Result<()> {
    match format {
        JournalFormat::Text => {
            for entry in &entries {
                println!("{} - {}", entry.id, entry.uri);
            }
        }
        JournalFormat::Json => {
            let snapshot = JournalSnapshot::from_entries(entries);
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
    }
    Ok(())
}
