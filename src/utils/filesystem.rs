//! File system utility functions

use anyhow::{Context, Result, bail};
use std::path::Path;

/// Ensure a directory exists, creating it if necessary
///
/// Fails if `path` exists but is not a directory.
pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if path.exists() && !path.is_dir() {
        bail!("'{}' exists and is not a directory", path.display());
    }
    std::fs::create_dir_all(path)
        .with_context(|| format!("Failed to create directory '{}'", path.display()))?;
    Ok(())
}
