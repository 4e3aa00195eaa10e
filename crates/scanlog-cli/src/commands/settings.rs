use crate::cli::SettingsFormat;
use anyhow::Result;
use colored::Colorize;
use scanlog_config::{validate_settings, Settings, TermsAgreement};
use scanlog_core::{effective_upload_in_background, SystemEnv};
use std::path::PathBuf;

pub fn check(settings_path: Option<&PathBuf>) -> Result<bool> {
    let path = crate::settings_loader::settings_path(settings_path);
    println!("Validating {} ...", path.display());

    let settings = crate::settings_loader::load(settings_path)?;
    if !path.exists() {
        println!(
            "{}",
            "Settings file not present; checking defaults.".dimmed()
        );
    }

    let mut errors = Vec::new();
    if let Err(e) = validate_settings(&settings) {
        errors.push(e.to_string());
    }
    let warnings = hygiene_warnings(&settings);

    if warnings.is_empty() && errors.is_empty() {
        println!("{} No issues found.", "[OK]".green());
        return Ok(false);
    }

    if !warnings.is_empty() {
        println!("\n{}", "Warnings:".yellow());
        for w in &warnings {
            println!("   - {}", w);
        }
    }
    if !errors.is_empty() {
        println!("\n{}", "Errors:".red());
        for e in &errors {
            println!("   - {}", e);
        }
    }

    Ok(!errors.is_empty())
}

fn hygiene_warnings(settings: &Settings) -> Vec<String> {
    let mut warnings = Vec::new();

    if !settings.scan.terms_of_use_url.is_empty()
        && !settings.scan.terms_of_use_url.starts_with("https://")
    {
        warnings.push(format!(
            "'scan.terms_of_use_url' is not HTTPS: {}",
            settings.scan.terms_of_use_url
        ));
    }

    if settings.scan.terms_of_use_agree == TermsAgreement::No {
        warnings.push(
            "'scan.terms_of_use_agree' is 'no'; the build tool will not publish scans".to_string(),
        );
    }

    for plugin in &settings.plugins {
        if semver::Version::parse(&plugin.version).is_err() {
            warnings.push(format!(
                "Plugin '{}' version '{}' is not a semantic version",
                plugin.id, plugin.version
            ));
        }
    }

    warnings
}

pub fn dump(
    settings_path: Option<&PathBuf>,
    format: SettingsFormat,
    effective: bool,
) -> Result<()> {
    let mut settings = crate::settings_loader::load(settings_path)?;

    if effective {
        settings.scan.upload_in_background = Some(effective_upload_in_background(
            settings.scan.upload_in_background,
            &SystemEnv,
        ));
    }

    match format {
        SettingsFormat::Json => {
            let s = serde_json::to_string_pretty(&settings)?;
            println!("{s}");
        }
        SettingsFormat::Toml => {
            let s = toml::to_string_pretty(&settings)?;
            println!("{s}");
        }
    }

    Ok(())
}
