//! Directory listing sources for the walker
//!
//! The walker only needs one capability from the filesystem: list the entries
//! of a directory. `FsSource` does that with `std::fs::read_dir`;
//! `MemorySource` serves a fixed in-memory tree for tests.

use std::io;
use std::path::Path;

/// One entry returned by a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    /// Bare entry name (no path separators)
    pub name: String,
    /// True only for real directories; symlinks are never directories here
    pub is_dir: bool,
}

impl SourceEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }
}

/// Something that can enumerate directory entries.
///
/// Entries must come back in the order the underlying store yields them;
/// the walker preserves that order in its output.
pub trait DirSource {
    fn list_entries(&self, path: &Path) -> io::Result<Vec<SourceEntry>>;
}

/// Lists directories on the real filesystem in OS enumeration order.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSource;

impl DirSource for FsSource {
    fn list_entries(&self, path: &Path) -> io::Result<Vec<SourceEntry>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            // file_type() does not follow symlinks
            let is_dir = entry.file_type()?.is_dir();
            entries.push(SourceEntry {
                name: entry.file_name().to_string_lossy().to_string(),
                is_dir,
            });
        }
        Ok(entries)
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub use memory::MemorySource;

#[cfg(any(test, feature = "test-utils"))]
mod memory {
    use std::collections::{HashMap, HashSet};
    use std::io;
    use std::path::{Path, PathBuf};

    use super::{DirSource, SourceEntry};

    /// In-memory directory tree with explicit entry order.
    ///
    /// Directories are registered implicitly by adding children to them.
    /// Listing a path marked with `fail_on` returns a permission error.
    #[derive(Debug, Default)]
    pub struct MemorySource {
        dirs: HashMap<PathBuf, Vec<SourceEntry>>,
        failing: HashSet<PathBuf>,
    }

    impl MemorySource {
        pub fn new() -> Self {
            Self::default()
        }

        /// Register an empty directory at `path`.
        pub fn with_dir(mut self, path: impl AsRef<Path>) -> Self {
            self.ensure_dir(path.as_ref());
            self
        }

        /// Append a file entry named `name` to directory `parent`.
        pub fn with_file(mut self, parent: impl AsRef<Path>, name: &str) -> Self {
            self.ensure_dir(parent.as_ref())
                .push(SourceEntry::file(name));
            self
        }

        /// Append a subdirectory entry named `name` to directory `parent`.
        pub fn with_subdir(mut self, parent: impl AsRef<Path>, name: &str) -> Self {
            let parent = parent.as_ref();
            self.ensure_dir(parent).push(SourceEntry::dir(name));
            self.ensure_dir(&parent.join(name));
            self
        }

        /// Make listing `path` fail.
        pub fn fail_on(mut self, path: impl AsRef<Path>) -> Self {
            self.failing.insert(path.as_ref().to_path_buf());
            self
        }

        fn ensure_dir(&mut self, path: &Path) -> &mut Vec<SourceEntry> {
            self.dirs.entry(path.to_path_buf()).or_default()
        }
    }

    impl DirSource for MemorySource {
        fn list_entries(&self, path: &Path) -> io::Result<Vec<SourceEntry>> {
            if self.failing.contains(path) {
                return Err(io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    "permission denied",
                ));
            }
            self.dirs.get(path).cloned().ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, "no such directory")
            })
        }
    }
}
