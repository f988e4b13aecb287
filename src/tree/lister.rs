//! Entry listing: reads a directory and applies visibility and ordering policy

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::error::TreeError;

use super::config::WalkerConfig;
use super::filter::NameFilter;
use super::source::{DirSource, EntryKind, RawEntry};

/// A visible child of a listed directory, in render order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    /// Will be descended into; links only count when links are followed
    pub is_dir: bool,
    pub is_symlink: bool,
}

/// Files before directories, then case-sensitive name order. Names that
/// decode to the same text fall back to their raw bytes.
pub fn compare_entries(a: &Entry, b: &Entry) -> Ordering {
    a.is_dir
        .cmp(&b.is_dir)
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.path.file_name().cmp(&b.path.file_name()))
}

/// Sort entries into render order. The sort is stable.
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(compare_entries);
}

/// Lists directories through a `DirSource`, filtered and sorted.
pub struct EntryLister<S> {
    source: S,
    filter: NameFilter,
    dirs_only: bool,
    follow_links: bool,
}

impl<S: DirSource> EntryLister<S> {
    pub fn new(source: S, config: &WalkerConfig) -> Self {
        Self {
            source,
            filter: NameFilter::from_config(config),
            dirs_only: config.dirs_only,
            follow_links: config.follow_links,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// List the visible children of `path` in render order.
    pub fn list(&self, path: &Path) -> Result<Vec<Entry>, TreeError> {
        let raw = self
            .source
            .read_entries(path)
            .map_err(|source| TreeError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let total = raw.len();

        let mut entries: Vec<Entry> = raw
            .into_iter()
            .filter_map(|r| self.classify(path, r))
            .collect();
        sort_entries(&mut entries);

        trace!(
            path = %path.display(),
            total,
            visible = entries.len(),
            "listed directory"
        );
        Ok(entries)
    }

    fn classify(&self, parent: &Path, raw: RawEntry) -> Option<Entry> {
        let name = raw.name.to_string_lossy().into_owned();
        if !self.filter.is_visible(&name) {
            return None;
        }

        let (is_dir, is_symlink) = match raw.kind {
            EntryKind::File => (false, false),
            EntryKind::Dir => (true, false),
            EntryKind::Symlink { target_is_dir } => (self.follow_links && target_is_dir, true),
        };

        if self.dirs_only && !is_dir {
            return None;
        }

        Some(Entry {
            path: parent.join(&raw.name),
            name,
            is_dir,
            is_symlink,
        })
    }
}
