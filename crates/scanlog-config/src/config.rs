use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Deserialize, Serialize, Default, Clone)]
pub struct Settings {
    #[serde(default)]
    pub project: ProjectConfig,
    #[serde(default)]
    pub plugins: Vec<PluginRef>,
    #[serde(default)]
    pub scan: ScanConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProjectConfig {
    #[serde(default = "default_root_name")]
    pub root_name: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            root_name: default_root_name(),
        }
    }
}

fn default_root_name() -> String {
    "unnamed".to_string()
}

/// A plugin reference passed through to the external build tool.
/// Resolution and application happen entirely on that side.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct PluginRef {
    pub id: String,
    pub version: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ScanConfig {
    #[serde(default)]
    pub terms_of_use_url: String,
    #[serde(default)]
    pub terms_of_use_agree: TermsAgreement,
    /// Explicit override. When absent, the timing is derived from the
    /// `CI` environment variable at the usage site.
    #[serde(default)]
    pub upload_in_background: Option<bool>,
    /// Journal path override (default: scan-journal.log in the working dir).
    #[serde(default)]
    pub journal: Option<PathBuf>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            terms_of_use_url: String::new(),
            terms_of_use_agree: TermsAgreement::No,
            upload_in_background: None,
            journal: None,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")] // "yes", "no"
pub enum TermsAgreement {
    Yes,
    #[default]
    No,
}

impl std::fmt::Display for TermsAgreement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TermsAgreement::Yes => write!(f, "yes"),
            TermsAgreement::No => write!(f, "no"),
        }
    }
}
