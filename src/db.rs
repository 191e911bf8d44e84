// src/db.rs

use crate::error::{PanelError, Result};
use crate::models::{dedup_entries, Entry};
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags, Row, TransactionBehavior};
use std::path::{Path, PathBuf};

/// Default database location (~/.config/clients-panel/panel.db)
pub fn default_db_path() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or(PanelError::HomeDirNotFound)?;
    Ok(home_dir.join(".config/clients-panel/panel.db"))
}

/// Opens an existing database. A missing file is an error, never a fresh database.
pub fn open_connection(db_path: &Path) -> Result<Connection> {
    let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
        | OpenFlags::SQLITE_OPEN_URI
        | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    Connection::open_with_flags(db_path, flags).map_err(PanelError::Sql)
}

/// Reads a text-ish column; the ingestion side is not strict about types.
fn text_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<String> {
    Ok(match row.get_ref(idx)? {
        ValueRef::Null => String::new(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Text(t) | ValueRef::Blob(t) => String::from_utf8_lossy(t).into_owned(),
    })
}

/// All rows of `entries` in storage order, columns mapped by position.
/// A NULL id is kept as `None`; an id that is not an integer is an error.
pub fn fetch_entries(conn: &Connection) -> Result<Vec<Entry>> {
    let mut stmt = conn.prepare("SELECT * FROM entries")?;
    let rows = stmt
        .query_map([], |row| {
            Ok(Entry {
                id: row.get::<_, Option<i64>>(0)?,
                hwid: text_column(row, 1)?,
                country_code: text_column(row, 2)?,
                hostname: text_column(row, 3)?,
                date: text_column(row, 4)?,
                timezone: text_column(row, 5)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// Loads the display list: every row, duplicates collapsed.
pub fn load_entries(db_path: &Path) -> Result<Vec<Entry>> {
    let conn = open_connection(db_path)?;
    let rows = fetch_entries(&conn)?;
    let total = rows.len();
    let entries = dedup_entries(rows);
    tracing::debug!(
        db = %db_path.display(),
        rows = total,
        shown = entries.len(),
        "loaded client entries"
    );
    Ok(entries)
}

/// Deletes every row for `hwid` and returns the stored `filepath` values of
/// the deleted rows (distinct, non-null, in storage order).
///
/// Lookup and delete share one IMMEDIATE transaction, so no other writer can
/// slip in between them.
pub fn delete_entries_by_hwid(conn: &mut Connection, hwid: &str) -> Result<(usize, Vec<String>)> {
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    let filepaths = {
        let mut stmt = tx.prepare("SELECT filepath FROM entries WHERE hwid = ?1")?;
        let found = stmt
            .query_map([hwid], |row| row.get::<_, Option<String>>(0))?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let mut distinct: Vec<String> = Vec::new();
        for path in found.into_iter().flatten() {
            if !distinct.contains(&path) {
                distinct.push(path);
            }
        }
        distinct
    };
    let count = tx.execute("DELETE FROM entries WHERE hwid = ?1", [hwid])?;
    tx.commit()?;
    Ok((count, filepaths))
}
