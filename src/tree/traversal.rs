//! Directory listing and partitioning shared by the walker.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::error::{GenError, Result};

use super::config::WalkerConfig;
use super::filter::IgnoreFilter;

/// A qualifying child of a directory being walked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Child {
    pub name: String,
    pub path: PathBuf,
}

/// Children of one directory, split into sub-directories and regular files.
#[derive(Debug, Default)]
pub struct Partition {
    pub dirs: Vec<Child>,
    pub files: Vec<Child>,
}

/// Listing and filtering rules applied to a single directory level.
pub struct BaseTraversal<'a> {
    pub config: &'a WalkerConfig,
    pub filter: &'a IgnoreFilter,
}

impl<'a> BaseTraversal<'a> {
    pub fn new(config: &'a WalkerConfig, filter: &'a IgnoreFilter) -> Self {
        Self { config, filter }
    }

    /// Check if we're past the maximum depth
    pub fn beyond_max_depth(&self, depth: usize) -> bool {
        depth > self.config.max_depth
    }

    /// Check if a directory at this depth becomes a flat stub
    pub fn at_max_depth(&self, depth: usize) -> bool {
        depth == self.config.max_depth
    }

    pub fn is_hidden(&self, name: &str) -> bool {
        name.starts_with(self.config.hidden_prefix)
    }

    pub fn should_ignore(&self, name: &str) -> bool {
        self.filter.is_ignored(name)
    }

    /// Read a directory and partition its children.
    ///
    /// Hidden entries are dropped, as are files with the private prefix.
    /// Ignore patterns are applied here too, so skipped entries never reach
    /// the walker. Both lists are sorted by name.
    pub fn read_and_partition(&self, path: &Path) -> Result<Partition> {
        let entries = fs::read_dir(path).map_err(|e| GenError::io(path, e))?;

        let mut children = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| GenError::io(path, e))?;
            children.push(entry);
        }
        children.sort_by_key(|e| e.file_name());

        let mut partition = Partition::default();
        for entry in children {
            let name = entry.file_name().to_string_lossy().to_string();
            if self.is_hidden(&name) {
                trace!(name = %name, "skipping hidden entry");
                continue;
            }

            // Follows symlinks, so a link to a directory is walked as one
            let entry_path = entry.path();
            let is_dir = entry_path.is_dir();
            let is_file = !is_dir && entry_path.is_file();
            if !is_dir && !is_file {
                continue;
            }
            if is_file && name.starts_with(self.config.private_file_prefix) {
                trace!(name = %name, "skipping private file");
                continue;
            }
            if self.should_ignore(&name) {
                trace!(name = %name, "skipping ignored entry");
                continue;
            }

            let child = Child {
                name,
                path: entry_path,
            };
            if is_dir {
                partition.dirs.push(child);
            } else {
                partition.files.push(child);
            }
        }

        Ok(partition)
    }
}
