//! Test utilities: an in-memory directory source and render helpers.
//!
//! This module is only compiled for tests and benchmarks.

use std::io;
use std::path::{Path, PathBuf};

use termcolor::Buffer;

use crate::output::{OutputConfig, StreamingFormatter, TreeStyle};
use crate::summary::WalkReport;
use crate::tree::{DirSource, EntryKind, RawEntry, StreamingWalker, WalkerConfig};

/// Link resolution gives up after this many hops, like `ELOOP`.
const MAX_LINK_HOPS: usize = 40;

#[derive(Debug, Clone)]
enum MemoryNode {
    File,
    Dir,
    /// A directory whose listing fails with permission denied
    Unreadable,
    Symlink(PathBuf),
}

impl MemoryNode {
    fn is_dir(&self) -> bool {
        matches!(self, MemoryNode::Dir | MemoryNode::Unreadable)
    }
}

/// A `DirSource` over a hand-built tree of absolute paths.
///
/// Children are listed in insertion order, so tests can check that sorting
/// is done by the lister and not inherited from the source. Parent
/// directories are not created implicitly.
#[derive(Debug, Clone, Default)]
pub struct MemoryDirSource {
    nodes: Vec<(PathBuf, MemoryNode)>,
}

impl MemoryDirSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dir(self, path: impl Into<PathBuf>) -> Self {
        self.insert(path.into(), MemoryNode::Dir)
    }

    pub fn file(self, path: impl Into<PathBuf>) -> Self {
        self.insert(path.into(), MemoryNode::File)
    }

    pub fn unreadable(self, path: impl Into<PathBuf>) -> Self {
        self.insert(path.into(), MemoryNode::Unreadable)
    }

    /// Add a link at `path` pointing at the absolute path `target`.
    pub fn symlink(self, path: impl Into<PathBuf>, target: impl Into<PathBuf>) -> Self {
        self.insert(path.into(), MemoryNode::Symlink(target.into()))
    }

    fn insert(mut self, path: PathBuf, node: MemoryNode) -> Self {
        self.nodes.push((path, node));
        self
    }

    fn node(&self, path: &Path) -> Option<&MemoryNode> {
        self.nodes
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, node)| node)
    }

    /// Resolve every link along `path`.
    fn resolve(&self, path: &Path, hops: &mut usize) -> io::Result<PathBuf> {
        let mut resolved = PathBuf::new();
        for component in path.components() {
            resolved.push(component);
            if let Some(MemoryNode::Symlink(target)) = self.node(&resolved) {
                *hops += 1;
                if *hops > MAX_LINK_HOPS {
                    return Err(io::Error::other("too many levels of symbolic links"));
                }
                resolved = self.resolve(target, hops)?;
            }
        }
        Ok(resolved)
    }

    fn resolve_existing(&self, path: &Path) -> io::Result<(PathBuf, &MemoryNode)> {
        let resolved = self.resolve(path, &mut 0)?;
        match self.node(&resolved) {
            Some(node) => Ok((resolved, node)),
            None => Err(io::Error::from(io::ErrorKind::NotFound)),
        }
    }

    fn kind_of(&self, node: &MemoryNode) -> EntryKind {
        match node {
            MemoryNode::File => EntryKind::File,
            MemoryNode::Dir | MemoryNode::Unreadable => EntryKind::Dir,
            MemoryNode::Symlink(target) => EntryKind::Symlink {
                target_is_dir: self
                    .resolve_existing(target)
                    .is_ok_and(|(_, node)| node.is_dir()),
            },
        }
    }
}

impl DirSource for MemoryDirSource {
    fn read_entries(&self, path: &Path) -> io::Result<Vec<RawEntry>> {
        let (resolved, node) = self.resolve_existing(path)?;
        match node {
            MemoryNode::Dir => {}
            MemoryNode::Unreadable => {
                return Err(io::Error::from(io::ErrorKind::PermissionDenied));
            }
            _ => return Err(io::Error::from(io::ErrorKind::NotADirectory)),
        }

        Ok(self
            .nodes
            .iter()
            .filter(|(p, _)| p.parent() == Some(resolved.as_path()))
            .filter_map(|(p, node)| {
                let name = p.file_name()?;
                Some(RawEntry::new(name, self.kind_of(node)))
            })
            .collect())
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        self.resolve_existing(path).map(|(resolved, _)| resolved)
    }
}

/// Everything one walk wrote, with colours disabled.
#[derive(Debug)]
pub struct Rendered {
    pub stdout: String,
    pub stderr: String,
    pub report: WalkReport,
}

impl Rendered {
    pub fn lines(&self) -> Vec<&str> {
        self.stdout.lines().collect()
    }
}

/// Walk `root` with an existing walker and capture the output.
pub fn render_with<S: DirSource>(
    walker: &StreamingWalker<S>,
    root: &Path,
    style: TreeStyle,
) -> Rendered {
    let config = OutputConfig {
        use_color: false,
        style,
    };
    let mut formatter = StreamingFormatter::new(config, Buffer::no_color(), Vec::new());
    let report = walker
        .walk_streaming(root, &mut formatter)
        .expect("writing to memory cannot fail");
    let (out, err) = formatter.into_parts();

    Rendered {
        stdout: String::from_utf8(out.into_inner()).expect("tree output is UTF-8"),
        stderr: String::from_utf8(err).expect("error output is UTF-8"),
        report,
    }
}

/// Walk `root` inside `source` with the default glyphs.
pub fn render(source: MemoryDirSource, config: WalkerConfig, root: &str) -> Rendered {
    let walker = StreamingWalker::with_source(config, source);
    render_with(&walker, Path::new(root), TreeStyle::default())
}
