// src/commands.rs

use crate::actions;
use crate::db;
use crate::error::{PanelError, Result};
use crate::models::Entry;
use crate::opener::SystemOpener;
use crate::paths;
use std::io::{self, Write};
use std::path::Path;

const COLUMNS: [&str; 6] = ["ID", "HWID", "Country Code", "Hostname", "Date", "Timezone"];

/// Handles 'list'
pub fn handle_list(db_path: &Path, search: Option<String>) -> Result<()> {
    print!("{}", list_output(db_path, search.as_deref())?);
    Ok(())
}

fn list_output(db_path: &Path, search: Option<&str>) -> Result<String> {
    let entries: Vec<Entry> = db::load_entries(db_path)?
        .into_iter()
        .filter(|e| search.map_or(true, |s| e.matches(s)))
        .collect();

    if entries.is_empty() {
        return Ok("No clients found.\n".to_string());
    }

    let mut out = render_table(&entries);
    out.push_str(&format!("{} client(s)\n", entries.len()));
    Ok(out)
}

fn render_table(entries: &[Entry]) -> String {
    let rows: Vec<[String; 6]> = entries
        .iter()
        .map(|e| {
            [
                e.id.map(|id| id.to_string()).unwrap_or_default(),
                e.hwid.clone(),
                e.country_code.clone(),
                e.hostname.clone(),
                e.date.clone(),
                e.timezone.clone(),
            ]
        })
        .collect();

    let mut widths = COLUMNS.map(|c| c.chars().count());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let line = |cells: &[&str]| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, w)| format!("{:<w$}", cell, w = w))
            .collect();
        format!("{}\n", padded.join("  ").trim_end())
    };

    let mut out = line(&COLUMNS);
    out.push_str(&line(&widths.map(|w| "─".repeat(w)).each_ref().map(String::as_str)));
    for row in &rows {
        out.push_str(&line(&row.each_ref().map(String::as_str)));
    }
    out
}

/// The entry a hwid (and optional id) refers to in the displayed list.
fn select_entry(db_path: &Path, hwid: &str, id: Option<i64>) -> Result<Entry> {
    db::load_entries(db_path)?
        .into_iter()
        .find(|e| e.hwid == hwid && id.map_or(true, |id| e.id == Some(id)))
        .ok_or_else(|| PanelError::EntryNotFound(hwid.to_string()))
}

/// Handles 'path'
pub fn handle_path(db_path: &Path, hwid: &str, id: Option<i64>) -> Result<()> {
    let entry = select_entry(db_path, hwid, id)?;
    println!("{}", paths::resolve_log_dir(&entry, db_path).display());
    Ok(())
}

/// Handles 'open'
pub fn handle_open(db_path: &Path, hwid: &str, id: Option<i64>) -> Result<()> {
    let entry = select_entry(db_path, hwid, id)?;
    let dir = actions::open_log_folder(&entry, db_path, &SystemOpener)?;
    println!("✓ Opened {}", dir.display());
    Ok(())
}

/// Handles 'remove'
pub fn handle_remove(db_path: &Path, hwid: &str, yes: bool) -> Result<()> {
    if hwid.trim().is_empty() {
        return Err(PanelError::InvalidInput("HWID must not be empty.".to_string()));
    }

    if !yes {
        print!("Remove client {} and delete its logs? (y/N): ", hwid);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let outcome = actions::remove_entry(hwid, db_path)?;
    println!("✓ Removed {} row(s) for HWID {}.", outcome.rows_deleted, hwid);
    for dir in &outcome.removed_dirs {
        println!("  └─ Deleted {}", dir);
    }
    if !outcome.cleanup_failures.is_empty() {
        println!(
            "  Could not delete {} log folder(s); see warnings above.",
            outcome.cleanup_failures.len()
        );
    }
    Ok(())
}
