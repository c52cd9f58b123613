use std::fs;
use std::io;
use std::path::{Path, PathBuf};

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
}

pub fn load_collection(path: &Path) -> Result<Vec<Value>, StoreError> {
    let raw = fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            StoreError::NotFound(path.to_path_buf())
        } else {
            StoreError::Read {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    serde_json::from_str(&raw).map_err(|e| StoreError::Malformed {
        path: path.to_path_buf(),
        source: e,
    })
}

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

/// Sibling path the pre-dedupe snapshot is written to.
pub fn backup_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("collection");
    path.with_file_name(format!("{stem}_backup.json"))
}
