//! Corruption recovery: preserve the unreadable file and start fresh.

use std::fs;
use std::path::{Path, PathBuf};

use crate::codec;
use crate::error::Result;
use crate::model::Task;
use crate::store::atomic;

/// Sibling path holding the verbatim contents of the last unreadable file.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut raw = path.as_os_str().to_os_string();
    raw.push(".bak");
    PathBuf::from(raw)
}

/// Back up the undecodable file at `<path>.bak` (overwriting any prior
/// backup) and rewrite `path` as a fresh empty collection.
///
/// The backup copy is best-effort; only a failure to write the fresh file
/// surfaces to the caller.
pub fn recover(path: &Path) -> Result<Vec<Task>> {
    let _ = fs::copy(path, backup_path(path));
    let empty: Vec<Task> = Vec::new();
    atomic::write(path, codec::encode(&empty)?.as_bytes())?;
    Ok(empty)
}
