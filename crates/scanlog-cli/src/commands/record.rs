use anyhow::{bail, Result};
use colored::Colorize;
use scanlog_core::{Journal, ScanRecord};
use std::path::PathBuf;

/// The published-scan callback entry point: append exactly one
/// `<id> - <uri>` line to the journal.
pub fn record(
    scan_id: &str,
    scan_uri: &str,
    journal_override: Option<&PathBuf>,
    locked: bool,
    settings_path: Option<&PathBuf>,
    quiet: bool,
) -> Result<()> {
    if scan_id.is_empty() {
        bail!("scan id must not be empty");
    }
    if scan_uri.is_empty() {
        bail!("scan uri must not be empty");
    }

    let settings = crate::settings_loader::load(settings_path)?;
    let path = crate::settings_loader::journal_path(journal_override, &settings);
    let journal = Journal::new(&path);
    let record = ScanRecord::new(scan_id, scan_uri);

    tracing::debug!(journal = %path.display(), locked, "appending scan record");

    if locked {
        journal.append_locked(&record)?;
    } else {
        journal.append(&record)?;
    }

    if !quiet {
        println!(
            "{} {} -> {}",
            "Recorded".green(),
            record.id,
            path.display()
        );
    }

    Ok(())
}
