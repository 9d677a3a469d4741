//! Conversion between local relative paths and gist file names
//!
//! Gists have a flat file namespace, so nested paths are flattened by joining
//! their components with [`PATH_SEPARATOR`].

use crate::constants::config::PATH_SEPARATOR;
use std::path::{Component, Path, PathBuf};

/// Flatten a path relative to the synced directory into a gist file name
///
/// Returns `None` for paths that are absolute or leave the directory.
pub fn path_to_gist_name(relative: &Path) -> Option<String> {
    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_str()?.to_string()),
            Component::CurDir => {}
            _ => return None,
        }
    }
    if parts.is_empty() {
        return None;
    }
    Some(parts.join(PATH_SEPARATOR))
}

/// Turn a gist file name back into a relative path
///
/// Returns `None` when the name would escape the synced directory.
pub fn gist_name_to_path(name: &str) -> Option<PathBuf> {
    let mut path = PathBuf::new();
    for part in name.split(PATH_SEPARATOR) {
        if part.is_empty() || part == "." || part == ".." || part.contains(['/', '\\']) {
            return None;
        }
        path.push(part);
    }
    if path.is_absolute() {
        return None;
    }
    Some(path)
}
