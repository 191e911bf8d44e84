// src/models.rs

use std::collections::HashSet;

/// One connected client as shown in the list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    /// `None` when the row's id column is NULL.
    pub id: Option<i64>,
    pub hwid: String,
    pub country_code: String,
    pub hostname: String,
    pub date: String,
    pub timezone: String,
}

impl Entry {
    /// Case-insensitive substring match over every displayed field.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        let id = self.id.map(|id| id.to_string()).unwrap_or_default();
        [
            id.as_str(),
            self.hwid.as_str(),
            self.country_code.as_str(),
            self.hostname.as_str(),
            self.date.as_str(),
            self.timezone.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Drops rows equal to an earlier row in all six fields, keeping the order.
pub fn dedup_entries(rows: Vec<Entry>) -> Vec<Entry> {
    let mut seen = HashSet::new();
    rows.into_iter()
        .filter(|entry| seen.insert(entry.clone()))
        .collect()
}

/// Result of a remove action.
#[derive(Debug, Default)]
pub struct RemoveOutcome {
    pub rows_deleted: usize,
    pub removed_dirs: Vec<String>,
    pub cleanup_failures: Vec<String>,
}

#[cfg(test)]
pub(crate) fn entry(id: i64, hwid: &str) -> Entry {
    Entry {
        id: Some(id),
        hwid: hwid.to_string(),
        country_code: "US".to_string(),
        hostname: "h1".to_string(),
        date: "2024-01-01".to_string(),
        timezone: "UTC".to_string(),
    }
}
