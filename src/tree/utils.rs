//! Shared path helpers for tree walking

use std::path::{Component, Path, PathBuf};

use crate::error::TreeError;

/// Resolve a user-supplied root to an absolute, lexically clean path.
///
/// Symbolic links are not resolved, so the root is displayed the way the
/// user named it. The path does not have to exist.
pub fn resolve_root(path: &Path) -> Result<PathBuf, TreeError> {
    let absolute = std::path::absolute(path).map_err(|source| TreeError::PathResolution {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(clean_path(&absolute))
}

/// Drop `.` components and fold `..` into the component before it.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match cleaned.components().next_back() {
                Some(Component::Normal(_)) => {
                    cleaned.pop();
                }
                // `..` at the root stays at the root
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => cleaned.push(".."),
            },
            other => cleaned.push(other),
        }
    }
    if cleaned.as_os_str().is_empty() {
        cleaned.push(".");
    }
    cleaned
}
