// src/actions.rs

use crate::db;
use crate::error::Result;
use crate::models::{Entry, RemoveOutcome};
use crate::opener::DirectoryOpener;
use crate::paths;
use std::io;
use std::path::{Path, PathBuf};

/// Opens the entry's log directory. Existence is not checked.
pub fn open_log_folder(
    entry: &Entry,
    db_path: &Path,
    opener: &dyn DirectoryOpener,
) -> Result<PathBuf> {
    let dir = paths::checked_log_dir(entry, db_path)?;
    tracing::debug!(hwid = %entry.hwid, path = %dir.display(), "opening log folder");
    opener.open(&dir)?;
    Ok(dir)
}

/// Deletes the rows for `hwid`, then removes the log folders they pointed at
/// and, once empty, `<db_dir>/logs/<hwid>` itself.
///
/// Folder cleanup never fails the removal; problems are logged and reported
/// in the outcome.
pub fn remove_entry(hwid: &str, db_path: &Path) -> Result<RemoveOutcome> {
    let mut conn = db::open_connection(db_path)?;
    let (rows_deleted, filepaths) = db::delete_entries_by_hwid(&mut conn, hwid)?;
    drop(conn);
    tracing::info!(hwid, rows = rows_deleted, "Removed entry");

    let mut outcome = RemoveOutcome {
        rows_deleted,
        ..RemoveOutcome::default()
    };
    for filepath in &filepaths {
        let Some(dir) = paths::cleanup_dir(filepath, db_path) else {
            tracing::warn!(hwid, filepath = %filepath, "skipping cleanup of unsafe log path");
            outcome.cleanup_failures.push(filepath.clone());
            continue;
        };
        match std::fs::remove_dir_all(&dir) {
            Ok(()) => outcome.removed_dirs.push(dir.display().to_string()),
            Err(e) => {
                tracing::warn!(hwid, dir = %dir.display(), error = %e, "failed to remove log folder");
                outcome.cleanup_failures.push(dir.display().to_string());
            }
        }
    }
    remove_hwid_dir(hwid, db_path, &mut outcome);
    Ok(outcome)
}

/// Removes `<db_dir>/logs/<hwid>` when nothing is left in it.
fn remove_hwid_dir(hwid: &str, db_path: &Path, outcome: &mut RemoveOutcome) {
    let dir = match paths::hwid_dir(hwid, db_path) {
        Ok(dir) => dir,
        Err(e) => {
            if outcome.rows_deleted > 0 {
                tracing::warn!(hwid, error = %e, "skipping cleanup of client log folder");
                outcome.cleanup_failures.push(hwid.to_string());
            }
            return;
        }
    };
    match std::fs::remove_dir(&dir) {
        Ok(()) => outcome.removed_dirs.push(dir.display().to_string()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => {
            tracing::warn!(hwid, dir = %dir.display(), error = %e, "failed to remove client log folder");
            outcome.cleanup_failures.push(dir.display().to_string());
        }
    }
}
