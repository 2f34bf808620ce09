//! Book output
//!
//! # Module Structure
//!
//! - `stub` - Stub documents and the overwrite policy
//! - `summary` - SUMMARY.md writer
//! - `emitter` - `BookOutput` implementation writing to the filesystem

mod emitter;
mod stub;
mod summary;

pub use emitter::{DIR_STUB_POLICY, FILE_STUB_POLICY, FsEmitter, is_managed_document};
pub use stub::{WriteOutcome, WritePolicy, heading, write_document};
pub use summary::{SUMMARY, SummaryWriter, format_entry};
