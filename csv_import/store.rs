use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: io::Error,
    },
    #[error("invalid JSON in {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid CSV in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        source: csv::Error,
    },
}

/// One source row. A column missing from the header deserializes as empty
/// and disqualifies the row downstream.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceRow {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

pub fn fetch_rows(path: &Path) -> Result<Vec<SourceRow>, StoreError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| classify_csv(path, e))?;
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        let row: SourceRow = row.map_err(|e| classify_csv(path, e))?;
        rows.push(row);
    }
    Ok(rows)
}

pub fn load_collection(path: &Path) -> Result<Vec<Value>, StoreError> {
    let raw = fs::read_to_string(path).map_err(|e| classify_read(path, e))?;
    serde_json::from_str(&raw).map_err(|e| StoreError::Malformed {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Highest integer id present in the collection, 0 when there is none.
/// Entries with a missing or non-integer id are skipped; legacy collections
/// mix id shapes.
pub fn max_entry_id(entries: &[Value]) -> i64 {
    entries
        .iter()
        .filter_map(|e| e.get("id").and_then(Value::as_i64))
        .fold(0, i64::max)
}

/// Whole-file write, pretty-printed with two-space indent. Non-ASCII text is
/// written literally, not escaped.
pub fn save_collection(path: &Path, entries: &[Value]) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(entries).map_err(|e| StoreError::Malformed {
        path: path.to_path_buf(),
        source: e,
    })?;
    fs::write(path, json).map_err(|e| StoreError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

fn classify_read(path: &Path, err: io::Error) -> StoreError {
    if err.kind() == io::ErrorKind::NotFound {
        StoreError::NotFound(path.to_path_buf())
    } else {
        StoreError::Read {
            path: path.to_path_buf(),
            source: err,
        }
    }
}

fn classify_csv(path: &Path, err: csv::Error) -> StoreError {
    if let csv::ErrorKind::Io(io_err) = err.kind() {
        if io_err.kind() == io::ErrorKind::NotFound {
            return StoreError::NotFound(path.to_path_buf());
        }
    }
    StoreError::Csv {
        path: path.to_path_buf(),
        source: err,
    }
}
