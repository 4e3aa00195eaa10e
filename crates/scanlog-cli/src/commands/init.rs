use anyhow::Result;
use colored::Colorize;
use scanlog_config::{save_settings, PluginRef, Settings, TermsAgreement};
use std::path::PathBuf;

pub fn init(
    force: bool,
    root_name: Option<String>,
    settings_path: Option<&PathBuf>,
) -> Result<()> {
    let path = crate::settings_loader::settings_path(settings_path);

    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists! Use --force to overwrite.",
            path.display()
        );
    }

    let root_name = root_name.unwrap_or_else(default_root_name);
    let settings = starter_settings(&root_name);
    save_settings(&settings, &path)?;

    println!(
        "{}",
        format!("Successfully created {}", path.display())
            .green()
            .bold()
    );
    println!("Root project: {}", settings.project.root_name);
    println!(
        "{}",
        "Tip: Set scan.terms_of_use_agree = \"yes\" after reviewing the terms of use.".dimmed()
    );

    Ok(())
}

fn default_root_name() -> String {
    std::env::current_dir()
        .ok()
        .and_then(|d| d.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "unnamed".to_string())
}

/// Pure logic to build the starter settings for a root name.
pub fn starter_settings(root_name: &str) -> Settings {
    let mut settings = Settings::default();
    settings.project.root_name = root_name.to_string();
    settings.plugins = vec![
        PluginRef {
            id: "com.gradle.develocity".to_string(),
            version: "3.17.4".to_string(),
        },
        PluginRef {
            id: "org.gradle.toolchains.foojay-resolver-convention".to_string(),
            version: "0.8.0".to_string(),
        },
    ];
    settings.scan.terms_of_use_url = "https://gradle.com/terms-of-service".to_string();
    settings.scan.terms_of_use_agree = TermsAgreement::No;
    settings
}

#[cfg(test)]
mod tests {
    use super::*;
    use scanlog_config::validate_settings;

    #[test]
    fn starter_settings_pass_validation() {
        let settings = starter_settings("oop-23-TD");
        assert!(validate_settings(&settings).is_ok());
        assert_eq!(settings.project.root_name, "oop-23-TD");
        assert_eq!(settings.plugins.len(), 2);
        // Agreement stays an explicit user decision.
        assert_eq!(settings.scan.terms_of_use_agree, TermsAgreement::No);
    }
}
