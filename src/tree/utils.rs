//! Source-path to markdown-path mapping

use std::path::{Component, Path, PathBuf};

/// Name of the per-directory introduction document.
pub const README: &str = "README.md";

const MARKDOWN_EXT: &str = "md";

/// Replaces the extension separator when an extension is folded into a stub name.
const EXTENSION_FILL: char = '_';

/// Split a file name into base and extension.
///
/// The extension starts at the last `.`, leading dots excluded, so
/// `archive.tar.gz` splits into `archive.tar` and `.gz` while `.profile`
/// and `Makefile` have no extension.
pub fn split_extension(name: &str) -> (&str, &str) {
    let leading = name.len() - name.trim_start_matches('.').len();
    match name[leading..].rfind('.') {
        Some(idx) => name.split_at(leading + idx),
        None => (name, ""),
    }
}

/// Fold a file name's extension into its stem: `foo.py` becomes `foo_py`.
pub fn transliterate_file_name(name: &str) -> String {
    let (base, ext) = split_extension(name);
    let mut out = String::with_capacity(name.len());
    out.push_str(base);
    out.extend(ext.chars().map(|c| if c == '.' { EXTENSION_FILL } else { c }));
    out
}

/// Stub path (relative to the book root) for a source file found in `rel_dir`.
pub fn file_stub_path(rel_dir: &Path, name: &str) -> PathBuf {
    rel_dir.join(format!("{}.{}", transliterate_file_name(name), MARKDOWN_EXT))
}

/// Stub path for a directory that is not descended into: `a/b/c` becomes `a/b/c.md`.
pub fn flat_dir_stub_path(rel_dir: &Path, name: &str) -> PathBuf {
    rel_dir.join(format!("{}.{}", name, MARKDOWN_EXT))
}

/// Stub path for a mirrored directory: `a/b` becomes `a/b/README.md`.
pub fn dir_readme_path(rel_path: &Path) -> PathBuf {
    rel_path.join(README)
}

/// Render a relative path with forward slashes, whatever the platform separator.
///
/// `.` components are dropped so that `./a/b` and `a/b` render the same.
pub fn to_slash(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::CurDir => None,
            other => Some(other.as_os_str().to_string_lossy()),
        })
        .collect::<Vec<_>>()
        .join("/")
}
