use crate::config::Settings;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn load_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        // Absent file means defaults; validation is a separate concern.
        return Ok(Settings::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file at {:?}", path))?;

    let settings: Settings =
        toml::from_str(&content).with_context(|| "Failed to parse TOML settings file")?;

    Ok(settings)
}

pub fn save_settings(settings: &Settings, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(settings)
        .with_context(|| "Failed to serialize settings to TOML")?;

    fs::write(path, content)
        .with_context(|| format!("Failed to write settings file to {:?}", path))?;

    Ok(())
}
