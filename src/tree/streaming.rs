//! StreamingWalker - renders a directory tree as it is traversed

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::TreeError;
use crate::summary::{RunSummary, WalkReport};

use super::config::WalkerConfig;
use super::lister::{Entry, EntryLister};
use super::source::{DirSource, OsDirSource};
use super::state::TraversalState;

/// Callback for streaming output - receives traversal events in pre-order.
pub trait StreamingOutput {
    /// Called once per walk, before any entry.
    fn output_root(&mut self, root: &Path) -> io::Result<()>;

    /// Called for every visible entry. `state` describes the entry's
    /// ancestors, not the entry itself.
    fn output_entry(
        &mut self,
        entry: &Entry,
        is_last: bool,
        state: &TraversalState,
    ) -> io::Result<()>;

    /// A subtree could not be rendered. The walk continues.
    fn report_error(&mut self, error: &TreeError) -> io::Result<()>;

    fn finish(&mut self, summary: &RunSummary) -> io::Result<()>;
}

/// Depth-first, pre-order tree walker that streams every entry to a
/// `StreamingOutput` without holding the tree in memory.
pub struct StreamingWalker<S = OsDirSource> {
    config: WalkerConfig,
    lister: EntryLister<S>,
}

impl StreamingWalker<OsDirSource> {
    pub fn new(config: WalkerConfig) -> Self {
        Self::with_source(config, OsDirSource)
    }
}

impl<S: DirSource> StreamingWalker<S> {
    pub fn with_source(config: WalkerConfig, source: S) -> Self {
        let lister = EntryLister::new(source, &config);
        Self { config, lister }
    }

    /// Walk `root` and stream it to `output`.
    ///
    /// Read failures are reported through `output` and never returned; the
    /// only error here is a failure to write.
    pub fn walk_streaming<O: StreamingOutput>(
        &self,
        root: &Path,
        output: &mut O,
    ) -> io::Result<WalkReport> {
        debug!(root = %root.display(), "walking tree");
        let mut report = WalkReport::new();
        output.output_root(root)?;

        // Canonical paths of the directories currently being listed, used to
        // stop link cycles when links are followed
        let mut ancestors = Vec::new();
        if self.config.follow_links {
            if let Ok(canonical) = self.lister.source().canonicalize(root) {
                ancestors.push(canonical);
            }
        }

        report.root_readable = self.walk_dir(
            root,
            &TraversalState::root(),
            &mut ancestors,
            output,
            &mut report,
        )?;

        output.finish(&report.summary)?;
        debug!(
            directories = report.summary.directories,
            files = report.summary.files,
            errors = report.errors,
            "walk finished"
        );
        Ok(report)
    }

    /// Render the children of `path`. Returns false if `path` could not be
    /// listed.
    fn walk_dir<O: StreamingOutput>(
        &self,
        path: &Path,
        state: &TraversalState,
        ancestors: &mut Vec<PathBuf>,
        output: &mut O,
        report: &mut WalkReport,
    ) -> io::Result<bool> {
        let entries = match self.lister.list(path) {
            Ok(entries) => entries,
            Err(error) => {
                self.skip_subtree(error, output, report)?;
                return Ok(false);
            }
        };

        let total = entries.len();
        for (i, entry) in entries.iter().enumerate() {
            let is_last = i + 1 == total;
            output.output_entry(entry, is_last, state)?;

            if !entry.is_dir {
                report.summary.record_file();
                continue;
            }

            report.summary.record_directory();
            if self.config.should_descend(state.depth()) {
                self.descend(entry, &state.child(is_last), ancestors, output, report)?;
            } else {
                trace!(path = %entry.path.display(), "depth limit reached");
            }
        }

        Ok(true)
    }

    fn descend<O: StreamingOutput>(
        &self,
        entry: &Entry,
        state: &TraversalState,
        ancestors: &mut Vec<PathBuf>,
        output: &mut O,
        report: &mut WalkReport,
    ) -> io::Result<()> {
        if !self.config.follow_links {
            self.walk_dir(&entry.path, state, ancestors, output, report)?;
            return Ok(());
        }

        let canonical = match self.lister.source().canonicalize(&entry.path) {
            Ok(canonical) => canonical,
            Err(source) => {
                let error = TreeError::Read {
                    path: entry.path.clone(),
                    source,
                };
                return self.skip_subtree(error, output, report);
            }
        };

        if ancestors.contains(&canonical) {
            let error = TreeError::LinkCycle {
                path: entry.path.clone(),
            };
            return self.skip_subtree(error, output, report);
        }

        ancestors.push(canonical);
        let result = self.walk_dir(&entry.path, state, ancestors, output, report);
        ancestors.pop();
        result.map(|_| ())
    }

    fn skip_subtree<O: StreamingOutput>(
        &self,
        error: TreeError,
        output: &mut O,
        report: &mut WalkReport,
    ) -> io::Result<()> {
        debug!(%error, "skipping subtree");
        report.errors += 1;
        output.report_error(&error)
    }
}
