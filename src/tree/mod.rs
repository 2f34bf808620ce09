//! Source tree walking
//!
//! `BookWalker` visits a source directory in pre-order and streams one
//! `BookEntry` per qualifying directory or file to a `BookOutput`. Filtering
//! (`IgnoreFilter`) and path mapping (`utils`) are pure and tested on their own.

mod config;
mod filter;
mod traversal;
mod utils;
mod walker;

// Re-export public types
pub use config::{DEFAULT_IGNORE_PATTERNS, DEFAULT_MAX_DEPTH, WalkerConfig};
pub use filter::IgnoreFilter;
pub use traversal::{BaseTraversal, Child, Partition};
pub use utils::{
    README, dir_readme_path, file_stub_path, flat_dir_stub_path, split_extension,
    to_slash, transliterate_file_name,
};
pub use walker::{BookEntry, BookOutput, BookWalker, EntryKind, WalkCounts};
