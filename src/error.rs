// src/error.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PanelError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database Error: {0}")]
    Sql(#[from] rusqlite::Error),

    #[error("Home directory not found")]
    HomeDirNotFound,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No client entry with HWID {0}")]
    EntryNotFound(String),

    #[error("Refusing to use unsafe path segment: {0:?}")]
    UnsafePath(String),
}

pub type Result<T> = std::result::Result<T, PanelError>;
