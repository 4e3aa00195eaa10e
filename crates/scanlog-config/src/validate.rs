use crate::config::{Settings, TermsAgreement};
use anyhow::{bail, Result};

pub fn validate_settings(settings: &Settings) -> Result<()> {
    if settings.project.root_name.trim().is_empty() {
        bail!("Invalid settings field 'project.root_name': must not be empty");
    }

    for plugin in &settings.plugins {
        if plugin.id.is_empty() {
            bail!("Plugin reference has an empty 'id'");
        }
        if plugin.version.is_empty() {
            bail!("Plugin '{}' has an empty 'version'", plugin.id);
        }
        if plugin.id.chars().any(char::is_whitespace) {
            bail!("Plugin id '{}' must not contain whitespace", plugin.id);
        }
        if plugin.version.chars().any(char::is_whitespace) {
            bail!(
                "Plugin '{}' has a version containing whitespace: '{}'",
                plugin.id,
                plugin.version
            );
        }
    }

    // Agreeing to terms without naming them is meaningless to the
    // telemetry service the values are passed through to.
    if settings.scan.terms_of_use_agree == TermsAgreement::Yes
        && settings.scan.terms_of_use_url.is_empty()
    {
        bail!("'scan.terms_of_use_agree = yes' requires a non-empty 'scan.terms_of_use_url'");
    }

    if let Some(journal) = &settings.scan.journal {
        if journal.is_dir() {
            bail!(
                "Invalid settings field 'scan.journal': {:?} is a directory",
                journal
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PluginRef, Settings, TermsAgreement};

    #[test]
    fn default_settings_are_valid() {
        assert!(validate_settings(&Settings::default()).is_ok());
    }

    #[test]
    fn empty_root_name_fails() {
        let mut settings = Settings::default();
        settings.project.root_name = "  ".to_string();

        let result = validate_settings(&settings);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("project.root_name"));
    }

    #[test]
    fn plugin_with_empty_version_fails() {
        let mut settings = Settings::default();
        settings.plugins.push(PluginRef {
            id: "com.gradle.develocity".to_string(),
            version: String::new(),
        });

        let result = validate_settings(&settings);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("empty 'version'"));
    }

    #[test]
    fn plugin_id_with_whitespace_fails() {
        let mut settings = Settings::default();
        settings.plugins.push(PluginRef {
            id: "com.gradle develocity".to_string(),
            version: "3.17.4".to_string(),
        });

        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn agree_without_url_fails() {
        let mut settings = Settings::default();
        settings.scan.terms_of_use_agree = TermsAgreement::Yes;

        let result = validate_settings(&settings);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("terms_of_use_url"));

        settings.scan.terms_of_use_url = "https://gradle.com/terms-of-service".to_string();
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn journal_pointing_at_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = Settings::default();
        settings.scan.journal = Some(dir.path().to_path_buf());

        let result = validate_settings(&settings);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("is a directory"));
    }
}
