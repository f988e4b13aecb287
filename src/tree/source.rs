//! Directory listing capability consumed by the walkers

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Classification of a raw directory entry, before any listing policy runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    /// A symbolic link; `target_is_dir` is false for broken links.
    Symlink { target_is_dir: bool },
}

/// One unfiltered child of a directory as reported by a `DirSource`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub name: OsString,
    pub kind: EntryKind,
}

impl RawEntry {
    pub fn new(name: impl Into<OsString>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Something that can enumerate the immediate children of a directory.
///
/// Implementations must release any handle before returning, so nothing is
/// held open while the caller recurses into children.
pub trait DirSource {
    /// List the immediate children of `path`, in no particular order.
    fn read_entries(&self, path: &Path) -> io::Result<Vec<RawEntry>>;

    /// Resolve `path` to its canonical form, following links.
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;
}

/// Keep the entries that could be inspected. A single bad entry is skipped
/// so the rest of the directory still renders.
fn collect_readable<I>(path: &Path, entries: I) -> Vec<RawEntry>
where
    I: IntoIterator<Item = io::Result<RawEntry>>,
{
    entries
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(error) => {
                debug!(path = %path.display(), %error, "skipping unreadable entry");
                None
            }
        })
        .collect()
}

/// `DirSource` backed by the operating system via `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsDirSource;

impl DirSource for OsDirSource {
    fn read_entries(&self, path: &Path) -> io::Result<Vec<RawEntry>> {
        let entries = fs::read_dir(path)?.map(|entry| {
            let entry = entry?;
            let file_type = entry.file_type()?;
            let kind = if file_type.is_symlink() {
                // Broken or unreadable targets are treated as non-directories
                let target_is_dir = fs::metadata(entry.path()).is_ok_and(|m| m.is_dir());
                EntryKind::Symlink { target_is_dir }
            } else if file_type.is_dir() {
                EntryKind::Dir
            } else {
                EntryKind::File
            };
            Ok(RawEntry::new(entry.file_name(), kind))
        });
        Ok(collect_readable(path, entries))
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        fs::canonicalize(path)
    }
}
