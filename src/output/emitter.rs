//! Filesystem output for the book walker

use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{GenError, Result};
use crate::tree::{BookEntry, BookOutput, EntryKind, README, to_slash};

use super::stub::{WriteOutcome, WritePolicy, heading, write_document};
use super::summary::{SUMMARY, SummaryWriter};

/// Directory stubs may already hold hand-written text, so they are never replaced.
pub const DIR_STUB_POLICY: WritePolicy = WritePolicy::KeepExisting;

/// File stubs are rewritten on every run. This differs from directory stubs
/// and is kept as-is until someone decides which behavior is wanted.
pub const FILE_STUB_POLICY: WritePolicy = WritePolicy::Overwrite;

/// Whether a stub path lands on a document the book itself owns: any
/// `README.md` or the top-level `SUMMARY.md`.
///
/// A source file named `README` or `SUMMARY` maps onto these. Names are
/// compared ignoring ASCII case so `readme` collides on case-insensitive
/// filesystems too.
pub fn is_managed_document(stub: &Path) -> bool {
    let Some(name) = stub.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    if name.eq_ignore_ascii_case(README) {
        return true;
    }
    let top_level = stub
        .parent()
        .is_none_or(|p| p.components().all(|c| matches!(c, Component::CurDir)));
    top_level && name.eq_ignore_ascii_case(SUMMARY)
}

/// Writes one stub per entry under the book root and records it in SUMMARY.md.
pub struct FsEmitter {
    book_root: PathBuf,
    summary: SummaryWriter,
    kept: Vec<PathBuf>,
}

impl FsEmitter {
    pub fn new(book_root: &Path, summary: SummaryWriter) -> Self {
        Self {
            book_root: book_root.to_path_buf(),
            summary,
            kept: Vec::new(),
        }
    }

    /// Flush SUMMARY.md and return the list of kept stubs.
    pub fn finish(self) -> Result<Vec<PathBuf>> {
        self.summary.finish()?;
        Ok(self.kept)
    }

    /// File stubs never replace a managed document, whatever the file policy says.
    fn policy_for(entry: &BookEntry) -> WritePolicy {
        match entry.kind {
            EntryKind::Dir | EntryKind::FlatDir => DIR_STUB_POLICY,
            EntryKind::File if is_managed_document(&entry.stub) => WritePolicy::KeepExisting,
            EntryKind::File => FILE_STUB_POLICY,
        }
    }
}

impl BookOutput for FsEmitter {
    fn output_entry(&mut self, entry: &BookEntry) -> Result<()> {
        if entry.kind == EntryKind::Dir {
            let dir = self.book_root.join(&entry.rel_path);
            fs::create_dir_all(&dir).map_err(|e| GenError::io(&dir, e))?;
        }

        let stub_path = self.book_root.join(&entry.stub);
        let content = heading(entry.depth, &entry.name);
        match write_document(&stub_path, &content, Self::policy_for(entry))? {
            WriteOutcome::Written => debug!(stub = %stub_path.display(), "wrote stub"),
            WriteOutcome::Kept => {
                warn!(
                    "{} already exists, stop writing content={}",
                    stub_path.display(),
                    content
                );
                self.kept.push(stub_path);
            }
        }

        self.summary
            .append_entry(&entry.name, &to_slash(&entry.stub), entry.depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTree;
    use crate::tree::{BookWalker, WalkerConfig};

    fn emit(tree: &TestTree, source: &str, book: &str) -> Vec<PathBuf> {
        let book_root = tree.path().join(book);
        fs::create_dir_all(&book_root).unwrap();
        let summary = SummaryWriter::create(&book_root.join("SUMMARY.md")).unwrap();
        let mut emitter = FsEmitter::new(&book_root, summary);

        let walker = BookWalker::new(WalkerConfig::default()).unwrap();
        walker.walk(&tree.path().join(source), &mut emitter).unwrap();
        emitter.finish().unwrap()
    }

    fn entry(kind: EntryKind, name: &str, stub: &str) -> BookEntry {
        BookEntry {
            kind,
            name: name.to_string(),
            rel_path: PathBuf::from(name),
            stub: PathBuf::from(stub),
            depth: 1,
        }
    }

    #[test]
    fn test_policies() {
        let policy = |kind: EntryKind, name: &str, stub: &str| FsEmitter::policy_for(&entry(kind, name, stub));
        assert_eq!(policy(EntryKind::Dir, "a", "a/README.md"), WritePolicy::KeepExisting);
        assert_eq!(policy(EntryKind::FlatDir, "a", "a.md"), WritePolicy::KeepExisting);
        assert_eq!(policy(EntryKind::File, "a.py", "a_py.md"), WritePolicy::Overwrite);
        assert_eq!(policy(EntryKind::File, "README", "README.md"), WritePolicy::KeepExisting);
        assert_eq!(policy(EntryKind::File, "SUMMARY", "SUMMARY.md"), WritePolicy::KeepExisting);
    }

    #[test]
    fn test_is_managed_document() {
        assert!(is_managed_document(Path::new("README.md")));
        assert!(is_managed_document(Path::new("a/b/README.md")));
        assert!(is_managed_document(Path::new("a/readme.md")));
        assert!(is_managed_document(Path::new("SUMMARY.md")));
        assert!(is_managed_document(Path::new("./SUMMARY.md")));
        // only the top-level summary belongs to the book
        assert!(!is_managed_document(Path::new("a/SUMMARY.md")));
        assert!(!is_managed_document(Path::new("README_md.md")));
        assert!(!is_managed_document(Path::new("a/b_py.md")));
    }

    #[test]
    fn test_emits_stubs_with_headings() {
        let tree = TestTree::new();
        tree.add_file("src/a/b.py", "print()");

        let kept = emit(&tree, "src", "book");
        assert!(kept.is_empty());

        assert_eq!(tree.read("book/a/README.md"), "# a\n");
        assert_eq!(tree.read("book/a/b_py.md"), "## b.py\n");
        assert_eq!(
            tree.read("book/SUMMARY.md"),
            "# Summary\n\n* [Introduction](README.md)\n* [a](a/README.md)\n    * [b.py](a/b_py.md)\n"
        );
    }

    #[test]
    fn test_existing_dir_readme_kept_file_stub_rewritten() {
        let tree = TestTree::new();
        tree.add_file("src/a/b.py", "");
        tree.add_file("book/a/README.md", "my notes on a");
        tree.add_file("book/a/b_py.md", "my notes on b");

        let kept = emit(&tree, "src", "book");
        assert_eq!(kept, vec![tree.path().join("book").join("a").join("README.md")]);

        assert_eq!(tree.read("book/a/README.md"), "my notes on a");
        assert_eq!(tree.read("book/a/b_py.md"), "## b.py\n");
    }

    #[test]
    fn test_readme_named_files_do_not_replace_managed_documents() {
        let tree = TestTree::new();
        tree.add_file("src/README", "");
        tree.add_file("src/a/README", "");
        tree.add_file("book/README.md", "# Mine\n");
        tree.add_file("book/a/README.md", "notes on a");

        let kept = emit(&tree, "src", "book");
        assert_eq!(kept.len(), 3);

        assert_eq!(tree.read("book/README.md"), "# Mine\n");
        assert_eq!(tree.read("book/a/README.md"), "notes on a");
        // the entries are still listed
        assert!(tree.read("book/SUMMARY.md").ends_with("* [README](README.md)\n"));
    }

    #[test]
    fn test_summary_named_file_does_not_truncate_open_summary() {
        let tree = TestTree::new();
        for i in 0..400 {
            tree.add_file(&format!("src/A{:03}.rs", i), "");
        }
        tree.add_file("src/SUMMARY", "");

        let kept = emit(&tree, "src", "book");
        assert_eq!(kept, vec![tree.path().join("book").join("SUMMARY.md")]);

        let summary = tree.read("book/SUMMARY.md");
        assert!(summary.starts_with("# Summary\n\n* [Introduction](README.md)\n"));
        assert!(!summary.contains('\0'));
        assert!(summary.contains("* [A399.rs](A399_rs.md)\n"));
        assert!(summary.ends_with("* [SUMMARY](SUMMARY.md)\n"));
    }
}
