//! Run summary counters and walk results

use std::fmt;

/// Directory and file counts accumulated during a single walk.
///
/// The root itself is never counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub directories: usize,
    pub files: usize,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a visible directory entry, whether or not it could be read.
    pub fn record_directory(&mut self) {
        self.directories += 1;
    }

    /// Record a visible non-directory entry.
    pub fn record_file(&mut self) {
        self.files += 1;
    }
}

fn plural(count: usize, singular: &'static str, plural: &'static str) -> &'static str {
    if count == 1 { singular } else { plural }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, {} {}",
            self.directories,
            plural(self.directories, "directory", "directories"),
            self.files,
            plural(self.files, "file", "files"),
        )
    }
}

/// Outcome of walking one root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkReport {
    pub summary: RunSummary,
    /// Subtrees reported on the diagnostic channel and skipped
    pub errors: usize,
    pub root_readable: bool,
}

impl WalkReport {
    pub fn new() -> Self {
        Self {
            summary: RunSummary::new(),
            errors: 0,
            root_readable: true,
        }
    }

    /// A walk succeeds when its root could be listed; nested failures are
    /// reported but do not fail the run.
    pub fn is_success(&self) -> bool {
        self.root_readable
    }
}

impl Default for WalkReport {
    fn default() -> Self {
        Self::new()
    }
}
