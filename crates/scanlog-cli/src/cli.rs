use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scanlog")]
#[command(about = "Build-scan settings and publication journal", long_about = None)]
pub struct Cli {
    /// Path to settings file (default: ./scanlog.toml)
    #[arg(long, short, global = true)]
    pub settings: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record a published build scan in the journal
    Record {
        /// Scan id assigned by the remote telemetry service
        scan_id: String,
        /// Scan URI assigned by the remote telemetry service
        scan_uri: String,
        /// Journal file (overrides scan.journal from settings)
        #[arg(long)]
        journal: Option<PathBuf>,
        /// Hold an exclusive lock on a <journal>.lock sidecar while appending
        #[arg(long)]
        locked: bool,
    },
    /// Inspect the publication journal
    #[command(subcommand)]
    Journal(JournalCommand),
    /// Validate or dump the settings file
    #[command(subcommand)]
    Settings(SettingsCommand),
    /// Generate a starter scanlog.toml
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
        /// Root project name (default: working directory name)
        #[arg(long)]
        root_name: Option<String>,
    },
    /// Run environment diagnostics
    Doctor,
}

#[derive(Subcommand)]
pub enum JournalCommand {
    /// Print journal entries in file order
    List {
        /// Output format (text, json)
        #[arg(long, value_enum, default_value_t = JournalFormat::Text)]
        format: JournalFormat,
        /// Print at most N entries
        #[arg(long)]
        limit: Option<usize>,
        /// Journal file (overrides scan.journal from settings)
        #[arg(long)]
        journal: Option<PathBuf>,
    },
    /// Print the last N journal entries
    Tail {
        /// Number of entries
        #[arg(short = 'n', long, default_value_t = 10)]
        lines: usize,
        /// Journal file (overrides scan.journal from settings)
        #[arg(long)]
        journal: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum SettingsCommand {
    /// Load and validate the settings file, reporting warnings
    Check,
    /// Print the settings
    Dump {
        /// Output format (json, toml)
        #[arg(long, value_enum, default_value_t = SettingsFormat::Json)]
        format: SettingsFormat,
        /// Resolve upload_in_background against the real environment
        #[arg(long)]
        effective: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum JournalFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SettingsFormat {
    Json,
    Toml,
}
