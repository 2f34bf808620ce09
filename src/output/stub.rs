//! Markdown stub documents

use std::fs;
use std::path::Path;

use crate::error::{GenError, Result};

/// Whether an existing document may be replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritePolicy {
    Overwrite,
    KeepExisting,
}

/// Result of a stub write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    /// The file already existed and `WritePolicy::KeepExisting` left it alone.
    Kept,
}

/// ATX heading of the given level: `heading(2, "src")` is `## src`.
pub fn heading(level: usize, text: &str) -> String {
    format!("{} {}", "#".repeat(level), text)
}

/// Write `content` plus a trailing newline to `path` under `policy`.
pub fn write_document(path: &Path, content: &str, policy: WritePolicy) -> Result<WriteOutcome> {
    if policy == WritePolicy::KeepExisting && path.is_file() {
        return Ok(WriteOutcome::Kept);
    }
    let mut text = String::with_capacity(content.len() + 1);
    text.push_str(content);
    text.push('\n');
    fs::write(path, text).map_err(|e| GenError::io(path, e))?;
    Ok(WriteOutcome::Written)
}
