use fs2::FileExt;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

/// Executes an operation with an exclusive lock on a separate lock file.
///
/// The lock file is created at `<path>.lock`.
/// Drops the lock automatically when the file handle goes out of scope.
pub fn with_file_lock<F, T>(path: &Path, op: F) -> io::Result<T>
where
    F: FnOnce() -> io::Result<T>,
{
    // e.g. "scan-journal.log" -> "scan-journal.log.lock"
    let lock_path_name = format!("{}.lock", path.display());
    let lock_path = Path::new(&lock_path_name);

    if let Some(parent) = lock_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(lock_path)?;

    file.lock_exclusive()?;

    let result = op();

    // Lock is released when `file` is dropped.
    drop(file);

    result
}
