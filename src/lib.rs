//! gitbook-gen - mirror a source tree as a GitBook skeleton
//!
//! For every source directory a `<name>_gitbook` directory is created with a
//! `README.md`, a `SUMMARY.md` table of contents, and one placeholder
//! markdown document per directory and file, up to a fixed depth.

pub mod book;
pub mod error;
pub mod logging;
pub mod output;
pub mod report;
pub mod string_utils;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use book::{BookProject, DEFAULT_ATTRIBUTION, DEFAULT_BOOK_SUFFIX, GeneratorConfig, generate};
pub use error::{GenError, Result};
pub use output::{FsEmitter, SummaryWriter, WritePolicy};
pub use report::{GenerationReport, ProjectReport, print_report, print_report_json};
pub use tree::{BookEntry, BookOutput, BookWalker, EntryKind, IgnoreFilter, WalkerConfig};
