//! SUMMARY.md (table of contents) writer
//!
//! The summary is recreated at project initialization and then grows by one
//! line per walked entry, indented four spaces per level below the top.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{GenError, Result};

/// Name of the table-of-contents document.
pub const SUMMARY: &str = "SUMMARY.md";

const SUMMARY_HEADER: &str = "# Summary\n\n* [Introduction](README.md)\n";

const INDENT: &str = "    ";

/// Format one table-of-contents line (without the trailing newline).
///
/// `link` must already use forward slashes.
pub fn format_entry(name: &str, link: &str, depth: usize) -> String {
    format!(
        "{}* [{}]({})",
        INDENT.repeat(depth.saturating_sub(1)),
        name,
        link
    )
}

/// Append-only handle on a freshly truncated SUMMARY.md.
pub struct SummaryWriter {
    path: PathBuf,
    out: BufWriter<File>,
}

impl SummaryWriter {
    /// Truncate (or create) the summary at `path` and write its header.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|e| GenError::io(path, e))?;
        let mut writer = Self {
            path: path.to_path_buf(),
            out: BufWriter::new(file),
        };
        writer.write_raw(SUMMARY_HEADER)?;
        Ok(writer)
    }

    pub fn append_entry(&mut self, name: &str, link: &str, depth: usize) -> Result<()> {
        let mut line = format_entry(name, link, depth);
        line.push('\n');
        self.write_raw(&line)
    }

    /// Flush buffered lines to disk.
    pub fn finish(mut self) -> Result<()> {
        self.out.flush().map_err(|e| GenError::io(&self.path, e))
    }

    fn write_raw(&mut self, text: &str) -> Result<()> {
        self.out
            .write_all(text.as_bytes())
            .map_err(|e| GenError::io(&self.path, e))
    }
}
