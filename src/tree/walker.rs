//! BookWalker - pre-order walk of a source tree, emitting one entry per
//! qualifying directory and file

use std::path::{Path, PathBuf};

use crate::error::Result;

use super::config::WalkerConfig;
use super::filter::IgnoreFilter;
use super::traversal::BaseTraversal;
use super::utils::{dir_readme_path, file_stub_path, flat_dir_stub_path};

/// What a walked entry turns into in the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Mirrored directory with its own `README.md`; its children follow.
    Dir,
    /// Directory at the maximum depth, rendered as a single `<name>.md`.
    FlatDir,
    /// Regular file, rendered as `<base>_<ext>.md`.
    File,
}

/// A single entry produced by the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookEntry {
    pub kind: EntryKind,
    /// Display name, the source entry's own name
    pub name: String,
    /// Path relative to the source root
    pub rel_path: PathBuf,
    /// Stub document path relative to the book root
    pub stub: PathBuf,
    /// 1 for children of the source root
    pub depth: usize,
}

/// Receives entries in walk order.
pub trait BookOutput {
    fn output_entry(&mut self, entry: &BookEntry) -> Result<()>;
}

/// Number of directories and files emitted by a walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkCounts {
    pub dirs: usize,
    pub files: usize,
}

/// Walks a source tree and streams `BookEntry` values to a `BookOutput`.
///
/// At each level every sub-directory (with its whole subtree) comes before
/// the level's files.
pub struct BookWalker {
    config: WalkerConfig,
    filter: IgnoreFilter,
}

impl BookWalker {
    /// Create a walker, compiling the configured ignore patterns.
    pub fn new(config: WalkerConfig) -> Result<Self> {
        let filter = IgnoreFilter::new(&config.ignore_patterns)?;
        Ok(Self { config, filter })
    }

    pub fn walk<O: BookOutput>(&self, root: &Path, output: &mut O) -> Result<WalkCounts> {
        let mut counts = WalkCounts::default();
        self.walk_dir(root, Path::new(""), 1, output, &mut counts)?;
        Ok(counts)
    }

    fn walk_dir<O: BookOutput>(
        &self,
        dir: &Path,
        rel_dir: &Path,
        depth: usize,
        output: &mut O,
        counts: &mut WalkCounts,
    ) -> Result<()> {
        let base = BaseTraversal::new(&self.config, &self.filter);
        if base.beyond_max_depth(depth) {
            return Ok(());
        }

        let partition = base.read_and_partition(dir)?;

        for child in partition.dirs {
            let rel_path = rel_dir.join(&child.name);
            counts.dirs += 1;

            if base.at_max_depth(depth) {
                let entry = BookEntry {
                    kind: EntryKind::FlatDir,
                    stub: flat_dir_stub_path(rel_dir, &child.name),
                    name: child.name,
                    rel_path,
                    depth,
                };
                output.output_entry(&entry)?;
                continue;
            }

            let entry = BookEntry {
                kind: EntryKind::Dir,
                stub: dir_readme_path(&rel_path),
                name: child.name,
                rel_path,
                depth,
            };
            output.output_entry(&entry)?;
            self.walk_dir(&child.path, &entry.rel_path, depth + 1, output, counts)?;
        }

        for child in partition.files {
            counts.files += 1;
            let entry = BookEntry {
                kind: EntryKind::File,
                stub: file_stub_path(rel_dir, &child.name),
                rel_path: rel_dir.join(&child.name),
                name: child.name,
                depth,
            };
            output.output_entry(&entry)?;
        }

        Ok(())
    }
}
