//! Directory groups collected by the walker

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::clean::clean_dir_name;

/// A directory and the cleaned names of the visible files directly inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryGroup {
    /// Cleaned last segment of the directory path
    pub name: String,
    /// Cleaned file names, in enumeration order
    pub files: Vec<String>,
}

impl DirectoryGroup {
    pub fn new(name: impl Into<String>, files: Vec<String>) -> Self {
        Self {
            name: name.into(),
            files,
        }
    }
}

/// Candidate groups keyed by directory, remembering first-registration order.
#[derive(Debug, Default)]
pub(crate) struct GroupRegistry {
    order: Vec<(PathBuf, Vec<String>)>,
    index: HashMap<PathBuf, usize>,
}

impl GroupRegistry {
    /// Register `key` if unseen and return its slot.
    pub fn register(&mut self, key: &Path) -> usize {
        if let Some(&slot) = self.index.get(key) {
            return slot;
        }
        let slot = self.order.len();
        self.order.push((key.to_path_buf(), Vec::new()));
        self.index.insert(key.to_path_buf(), slot);
        slot
    }

    pub fn push_file(&mut self, slot: usize, name: String) {
        self.order[slot].1.push(name);
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Drop empty candidates and clean the display names.
    pub fn into_groups(self) -> Vec<DirectoryGroup> {
        self.order
            .into_iter()
            .filter(|(_, files)| !files.is_empty())
            .map(|(key, files)| DirectoryGroup::new(clean_dir_name(&last_segment(&key)), files))
            .collect()
    }
}

fn last_segment(key: &Path) -> String {
    key.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| key.to_string_lossy().to_string())
}
