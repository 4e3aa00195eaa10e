pub mod config;
pub mod loader;
pub mod validate;

pub use config::{PluginRef, ProjectConfig, ScanConfig, Settings, TermsAgreement};
pub use loader::{load_settings, save_settings};
pub use validate::validate_settings;
