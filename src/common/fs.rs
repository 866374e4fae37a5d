use std::{fs, path::Path};

use anyhow::{bail, Context, Result};

/// Create `path` as a directory unless it already is one.
pub(crate) fn ensure_dir_exists(path: &Path) -> Result<()> {
    if path.is_dir() { return Ok(()) }
    if path.exists() {
        bail!("[common::fs] Not a directory: {}", path.display());
    }
    fs::create_dir_all(path)
        .with_context(|| format!("[common::fs] Failed to create directory {}", path.display()))
}

/// Fail unless `path` is an existing directory.
pub(crate) fn require_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("[common::fs] Data directory does not exist: {}", path.display());
    }
    if !path.is_dir() {
        bail!("[common::fs] Not a directory: {}", path.display());
    }
    Ok(())
}
