use anyhow::Result;
use colored::Colorize;
use scanlog_config::validate_settings;
use scanlog_core::{effective_upload_in_background, upload_in_background, Journal, SystemEnv};
use std::path::PathBuf;

pub fn doctor(settings_path: Option<&PathBuf>) -> Result<()> {
    println!("{}", "Scanlog Doctor".bold().green());
    println!("{}", "--------------".dimmed());

    println!("Scanlog Version: {}", env!("CARGO_PKG_VERSION").bold());
    let os_info = format!("{}-{}", std::env::consts::OS, std::env::consts::ARCH);
    println!("OS: {}", os_info);

    println!();
    println!("{}", "Settings:".bold());

    let path = crate::settings_loader::settings_path(settings_path);
    let settings = match crate::settings_loader::load(settings_path) {
        Ok(s) => s,
        Err(e) => {
            println!("{} Failed to load {}: {}", "[ERR]".red(), path.display(), e);
            return Ok(());
        }
    };

    if path.exists() {
        println!("{} Settings file present: {}", "[OK]".green(), path.display());
    } else {
        println!(
            "{} Settings file not present ({}), defaults in effect",
            "[-]".dimmed(),
            path.display()
        );
    }
    println!("   - Root project: {}", settings.project.root_name);
    println!("   - Plugin references: {}", settings.plugins.len());

    if let Err(err) = validate_settings(&settings) {
        println!("{} Validation failed:", "[ERR]".red());
        println!("   - {}", err);
    } else {
        println!("{} Settings are valid", "[OK]".green());
    }

    println!();
    println!("{}", "Journal:".bold());

    let journal = Journal::new(crate::settings_loader::journal_path(None, &settings));
    if journal.exists() {
        match journal.entries() {
            Ok(entries) => {
                println!(
                    "{} Journal exists: {} ({} entries)",
                    "[OK]".green(),
                    journal.path().display(),
                    entries.len()
                );
            }
            Err(e) => {
                println!("{} Journal unreadable: {}", "[ERR]".red(), e);
            }
        }
    } else {
        println!(
            "{} Journal not present: {} (created on first record)",
            "[-]".dimmed(),
            journal.path().display()
        );
    }

    println!();
    println!("{}", "Upload Timing:".bold());
    match std::env::var("CI") {
        Ok(val) => println!("CI: {}", val),
        Err(_) => println!("CI: {}", "(not set)".dimmed()),
    }
    println!("  derived upload_in_background:   {}", upload_in_background(&SystemEnv));
    println!(
        "  effective upload_in_background: {}",
        effective_upload_in_background(settings.scan.upload_in_background, &SystemEnv)
    );

    println!();
    println!("{}", "Environment Variables:".bold());
    for var in ["CI", "RUST_LOG"] {
        match std::env::var(var) {
            Ok(val) => println!("{}: {}", var, val),
            Err(_) => println!("{}: {}", var, "(not set)".dimmed()),
        }
    }

    Ok(())
}
