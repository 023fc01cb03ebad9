//! All-or-nothing rewrites of the backing file.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Result, TickError};

fn persist_err(path: &Path, source: std::io::Error) -> TickError {
    TickError::Persist {
        path: path.to_path_buf(),
        source,
    }
}

/// Replace `path` with `bytes` without ever exposing partial content.
///
/// Stages a sibling temp file in the same directory (so the final step is a
/// same-volume rename), fsyncs it, then renames it over the target. A
/// failure before the rename leaves the target byte-identical and removes
/// the temp file; the rename itself is atomic at the filesystem level.
pub fn write(path: &Path, bytes: &[u8]) -> Result<()> {
    let tmp = stage(path, bytes)?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(persist_err(path, e));
    }
    Ok(())
}

/// Write and fsync the staging file; the caller completes the swap.
fn stage(path: &Path, bytes: &[u8]) -> Result<PathBuf> {
    let tmp = temp_path(path);
    let staged: std::io::Result<()> = (|| {
        let mut file = File::create(&tmp)?;
        file.write_all(bytes)?;
        file.sync_all()?;
        Ok(())
    })();
    if let Err(e) = staged {
        let _ = fs::remove_file(&tmp);
        return Err(persist_err(path, e));
    }
    Ok(tmp)
}

fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.tmp"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn write_creates_target_with_exact_bytes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        write(&path, b"[]\n").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"[]\n");
    }

    #[test]
    fn write_replaces_existing_content_and_cleans_temp() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        fs::write(&path, "old").unwrap();

        write(&path, b"new").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"new");
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn interrupted_swap_leaves_target_byte_identical() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        fs::write(&path, "original contents").unwrap();

        // Stage the replacement but never attempt the rename, as if the
        // process died between the two steps.
        let tmp = stage(&path, b"replacement").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"original contents");
        assert_eq!(fs::read(&tmp).unwrap(), b"replacement");
    }

    #[test]
    fn write_into_missing_directory_reports_persist_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("tasks.json");

        let err = write(&path, b"[]\n").unwrap_err();

        assert_eq!(err.code(), "persist_error");
        assert!(!path.exists());
        assert!(!temp_path(&path).exists());
    }
}
