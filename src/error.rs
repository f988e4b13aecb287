//! Error types for tree rendering

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures scoped to a single path during a walk.
///
/// None of these abort a walk on their own: `Read` and `LinkCycle` leave the
/// affected subtree empty while siblings keep rendering, and `PathResolution`
/// only skips the one root it belongs to.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("cannot resolve '{}': {source}", path.display())]
    PathResolution {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("'{}': recursive directory link, not followed", path.display())]
    LinkCycle { path: PathBuf },
}

impl TreeError {
    /// The path this error is about.
    pub fn path(&self) -> &std::path::Path {
        match self {
            TreeError::PathResolution { path, .. } => path,
            TreeError::Read { path, .. } => path,
            TreeError::LinkCycle { path } => path,
        }
    }
}
