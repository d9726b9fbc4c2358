//! GroupWalker - collects directory groups in one pre-order pass

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::clean::clean_file_name;
use crate::error::{DoclistError, Result};

use super::group::{DirectoryGroup, GroupRegistry};
use super::source::{DirSource, FsSource};

/// Names starting with this marker are skipped along with their subtrees.
const HIDDEN_MARKER: char = '.';

/// Check whether an entry name is hidden.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with(HIDDEN_MARKER)
}

/// Depth-first, pre-order walker grouping files under their parent directory.
///
/// Directories are visited in the order the source lists them. The first
/// listing error aborts the walk; no partial result is returned.
pub struct GroupWalker<S = FsSource> {
    source: S,
}

impl GroupWalker<FsSource> {
    pub fn new() -> Self {
        Self { source: FsSource }
    }
}

impl Default for GroupWalker<FsSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: DirSource> GroupWalker<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Walk `root` and return the groups that hold at least one visible file.
    pub fn walk(&self, root: &Path) -> Result<Vec<DirectoryGroup>> {
        let root_name = root
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| root.to_string_lossy().to_string());

        let mut registry = GroupRegistry::default();

        if is_hidden(&root_name) {
            debug!(path = %root.display(), "root is hidden, nothing to collect");
        } else {
            info!(path = %root.display(), "walking directory");
            self.walk_dir(root, PathBuf::from(&root_name), &mut registry)?;
        }

        let candidates = registry.len();
        let groups = registry.into_groups();
        info!(
            directories = candidates,
            groups = groups.len(),
            "walk complete"
        );
        Ok(groups)
    }

    fn walk_dir(&self, path: &Path, key: PathBuf, registry: &mut GroupRegistry) -> Result<()> {
        let slot = registry.register(&key);

        let entries = self
            .source
            .list_entries(path)
            .map_err(|source| DoclistError::Walk {
                path: path.to_path_buf(),
                source,
            })?;

        for entry in entries {
            if is_hidden(&entry.name) {
                debug!(name = %entry.name, dir = %path.display(), "skipping hidden entry");
                continue;
            }

            if entry.is_dir {
                self.walk_dir(&path.join(&entry.name), key.join(&entry.name), registry)?;
            } else {
                registry.push_file(slot, clean_file_name(&entry.name));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::MemorySource;

    fn names(groups: &[DirectoryGroup]) -> Vec<&str> {
        groups.iter().map(|g| g.name.as_str()).collect()
    }

    #[test]
    fn test_is_hidden() {
        assert!(is_hidden(".git"));
        assert!(is_hidden(".DS_Store"));
        assert!(is_hidden("."));
        assert!(!is_hidden("visible.txt"));
        assert!(!is_hidden("dot.in.middle"));
        assert!(!is_hidden(""));
    }

    #[test]
    fn test_walk_groups_files_by_parent() {
        let source = MemorySource::new()
            .with_file("/srv/My_Docs", "report-final.pdf")
            .with_subdir("/srv/My_Docs", "Minutes")
            .with_file("/srv/My_Docs/Minutes", "jan_2024.docx")
            .with_file("/srv/My_Docs/Minutes", "feb_2024.docx");

        let groups = GroupWalker::with_source(source)
            .walk(Path::new("/srv/My_Docs"))
            .unwrap();

        assert_eq!(
            groups,
            vec![
                DirectoryGroup::new("My Docs", vec!["report final".to_string()]),
                DirectoryGroup::new(
                    "Minutes",
                    vec!["jan 2024".to_string(), "feb 2024".to_string()]
                ),
            ]
        );
    }

    #[test]
    fn test_walk_preserves_enumeration_order() {
        let source = MemorySource::new()
            .with_subdir("/root", "b")
            .with_subdir("/root", "a")
            .with_file("/root/b", "second.txt")
            .with_file("/root/b", "first.txt")
            .with_file("/root/a", "only.txt");

        let groups = GroupWalker::with_source(source)
            .walk(Path::new("/root"))
            .unwrap();

        assert_eq!(names(&groups), ["b", "a"]);
        assert_eq!(groups[0].files, ["second", "first"]);
    }

    #[test]
    fn test_walk_is_pre_order() {
        let source = MemorySource::new()
            .with_subdir("/root", "outer")
            .with_subdir("/root/outer", "inner")
            .with_subdir("/root", "sibling")
            .with_file("/root/outer/inner", "deep.txt")
            .with_file("/root/sibling", "side.txt")
            .with_file("/root/outer", "mid.txt");

        let groups = GroupWalker::with_source(source)
            .walk(Path::new("/root"))
            .unwrap();

        assert_eq!(names(&groups), ["outer", "inner", "sibling"]);
    }

    #[test]
    fn test_root_files_listed_after_subdirs_keep_root_first() {
        let source = MemorySource::new()
            .with_subdir("/root", "sub")
            .with_file("/root/sub", "inner.txt")
            .with_file("/root", "top.txt");

        let groups = GroupWalker::with_source(source)
            .walk(Path::new("/root"))
            .unwrap();

        assert_eq!(names(&groups), ["root", "sub"]);
        assert_eq!(groups[0].files, ["top"]);
    }

    #[test]
    fn test_hidden_directory_subtree_is_skipped() {
        let source = MemorySource::new()
            .with_file("/root", "visible.txt")
            .with_subdir("/root", "public")
            .with_subdir("/root/public", ".secret")
            .with_file("/root/public/.secret", "hidden_child.txt")
            .with_subdir("/root/public/.secret", "nested")
            .with_file("/root/public/.secret/nested", "deeper.txt")
            .fail_on("/root/public/.secret");

        let groups = GroupWalker::with_source(source)
            .walk(Path::new("/root"))
            .unwrap();

        assert_eq!(names(&groups), ["root"]);
        assert!(
            groups
                .iter()
                .flat_map(|g| &g.files)
                .all(|f| f != "hidden child" && f != "deeper")
        );
    }

    #[test]
    fn test_hidden_files_are_skipped() {
        let source = MemorySource::new()
            .with_file("/root", ".DS_Store")
            .with_file("/root", "kept.txt")
            .with_file("/root", ".env");

        let groups = GroupWalker::with_source(source)
            .walk(Path::new("/root"))
            .unwrap();

        assert_eq!(groups[0].files, ["kept"]);
    }

    #[test]
    fn test_directory_with_only_hidden_files_is_dropped() {
        let source = MemorySource::new()
            .with_file("/root", "a.txt")
            .with_subdir("/root", "ghost")
            .with_file("/root/ghost", ".keep")
            .with_subdir("/root", "hollow")
            .with_subdir("/root/hollow", "empty");

        let groups = GroupWalker::with_source(source)
            .walk(Path::new("/root"))
            .unwrap();

        assert_eq!(names(&groups), ["root"]);
    }

    #[test]
    fn test_empty_root_yields_no_groups() {
        let source = MemorySource::new().with_dir("/Empty");
        let groups = GroupWalker::with_source(source)
            .walk(Path::new("/Empty"))
            .unwrap();
        assert!(groups.is_empty());
    }

    #[test]
    fn test_hidden_root_yields_no_groups() {
        let source = MemorySource::new().with_file("/home/user/.notes", "todo.txt");
        let groups = GroupWalker::with_source(source)
            .walk(Path::new("/home/user/.notes"))
            .unwrap();
        assert!(groups.is_empty());
    }

    #[test]
    fn test_same_named_dirs_in_different_parents_stay_separate() {
        let source = MemorySource::new()
            .with_subdir("/root", "a")
            .with_subdir("/root", "b")
            .with_subdir("/root/a", "assets")
            .with_subdir("/root/b", "assets")
            .with_file("/root/a/assets", "one.png")
            .with_file("/root/b/assets", "two.png");

        let groups = GroupWalker::with_source(source)
            .walk(Path::new("/root"))
            .unwrap();

        assert_eq!(
            groups,
            vec![
                DirectoryGroup::new("assets", vec!["one".to_string()]),
                DirectoryGroup::new("assets", vec!["two".to_string()]),
            ]
        );
    }

    #[test]
    fn test_listing_error_aborts_walk() {
        let source = MemorySource::new()
            .with_file("/root", "fine.txt")
            .with_subdir("/root", "locked")
            .fail_on("/root/locked");

        let err = GroupWalker::with_source(source)
            .walk(Path::new("/root"))
            .unwrap_err();

        match err {
            DoclistError::Walk { path, source } => {
                assert_eq!(path, Path::new("/root/locked"));
                assert_eq!(source.kind(), std::io::ErrorKind::PermissionDenied);
            }
            other => panic!("expected walk error, got {other:?}"),
        }
    }

    #[test]
    fn test_fs_walker_on_real_tree() {
        let dir = tempfile::TempDir::new().unwrap();
        let root = dir.path().join("Board_Papers");
        std::fs::create_dir_all(root.join(".git")).unwrap();
        std::fs::write(root.join(".git").join("config"), "").unwrap();
        std::fs::write(root.join("agenda-2024.pdf"), "").unwrap();

        let groups = GroupWalker::new().walk(&root).unwrap();

        assert_eq!(
            groups,
            vec![DirectoryGroup::new(
                "Board Papers",
                vec!["agenda 2024".to_string()]
            )]
        );
    }
}
