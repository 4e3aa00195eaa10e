use anyhow::Result;
use scanlog_config::{load_settings, Settings};
use std::path::PathBuf;

pub const DEFAULT_SETTINGS_FILE: &str = "scanlog.toml";

pub fn settings_path(explicit: Option<&PathBuf>) -> PathBuf {
    explicit
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE))
}

pub fn load(explicit: Option<&PathBuf>) -> Result<Settings> {
    load_settings(&settings_path(explicit))
}

/// Journal path resolution: CLI flag, then settings, then the default.
pub fn journal_path(explicit: Option<&PathBuf>, settings: &Settings) -> PathBuf {
    explicit
        .cloned()
        .or_else(|| settings.scan.journal.clone())
        .unwrap_or_else(|| PathBuf::from(scanlog_core::DEFAULT_JOURNAL_FILE))
}
