//! Directory tree walking
//!
//! `GroupWalker` performs a depth-first, pre-order traversal and groups the
//! visible files of each directory. Listing goes through the `DirSource`
//! trait so the walk can run against the real filesystem (`FsSource`) or an
//! in-memory tree.

mod group;
mod source;
mod walker;

pub use group::DirectoryGroup;
#[cfg(any(test, feature = "test-utils"))]
pub use source::MemorySource;
pub use source::{DirSource, FsSource, SourceEntry};
pub use walker::{GroupWalker, is_hidden};
