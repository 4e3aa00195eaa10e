use serde::{Deserialize, Serialize};

/// Separator between the scan id and the scan uri in a journal line.
pub const JOURNAL_SEPARATOR: &str = " - ";

/// One published build scan, as handed over by the external build tool.
/// Both fields are opaque tokens assigned by the remote telemetry service;
/// this side never interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRecord {
    pub id: String,
    pub uri: String,
}

impl ScanRecord {
    pub fn new(id: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            uri: uri.into(),
        }
    }

    /// The exact journal representation: `<id> - <uri>\n`.
    pub fn journal_line(&self) -> String {
        format!("{}{}{}\n", self.id, JOURNAL_SEPARATOR, self.uri)
    }

    /// Parses a journal line (without trailing newline) back into a record.
    ///
    /// Splits on the first separator occurrence, so URIs containing
    /// ` - ` survive; an id containing it would not round-trip.
    pub fn parse_line(line: &str) -> Option<Self> {
        let (id, uri) = line.split_once(JOURNAL_SEPARATOR)?;
        Some(Self::new(id, uri))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn journal_line_format() {
        let record = ScanRecord::new("abc123", "https://scans.example/abc123");
        assert_eq!(
            record.journal_line(),
            "abc123 - https://scans.example/abc123\n"
        );
    }

    #[test]
    fn parse_splits_on_first_separator() {
        let record = ScanRecord::parse_line("abc - https://scans.example/a - b").unwrap();
        assert_eq!(record.id, "abc");
        assert_eq!(record.uri, "https://scans.example/a - b");
    }

    #[test]
    fn parse_rejects_line_without_separator() {
        assert!(ScanRecord::parse_line("no separator here").is_none());
        assert!(ScanRecord::parse_line("").is_none());
    }
}
