pub mod env;
pub mod journal;
pub mod lock;
pub mod record;

pub use env::{effective_upload_in_background, upload_in_background, Env, MapEnv, SystemEnv};
pub use journal::{Journal, JournalError, DEFAULT_JOURNAL_FILE};
pub use record::{ScanRecord, JOURNAL_SEPARATOR};
