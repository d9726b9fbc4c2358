//! Run orchestration: resolve, validate, walk, render, write.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, info};

use crate::error::{DoclistError, Result};
use crate::output::render_html;
use crate::tree::{DirSource, GroupWalker};

/// Name of the file written next to the scanned directory.
pub const OUTPUT_FILE_NAME: &str = "tmp.html";

/// Join `path` onto `cwd` when relative and normalize it lexically.
///
/// `.` segments are dropped and `..` removes the previous segment (never
/// climbing above the root). Symlinks are not resolved.
pub fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if normalized.file_name().is_some() {
                    normalized.pop();
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Resolve the target argument and check that it is an existing directory.
///
/// The path is checked as given (so `..` follows the real filesystem) and
/// only normalized once it is known to exist.
pub fn resolve_target(path: &Path, cwd: &Path) -> Result<PathBuf> {
    let metadata = std::fs::metadata(cwd.join(path)).map_err(|source| DoclistError::Access {
        path: path.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(DoclistError::NotADirectory {
            path: path.to_path_buf(),
        });
    }
    let root = absolutize(path, cwd);
    debug!(path = %root.display(), "resolved target directory");
    Ok(root)
}

/// Where the HTML for `root` is written: `tmp.html` in its parent.
///
/// The filesystem root has no parent, so its output lands inside it.
pub fn output_path_for(root: &Path) -> PathBuf {
    root.parent().unwrap_or(root).join(OUTPUT_FILE_NAME)
}

/// Walk `root` through `source` and render the resulting groups.
pub fn generate<S: DirSource>(root: &Path, source: S) -> Result<String> {
    let groups = GroupWalker::with_source(source).walk(root)?;
    Ok(render_html(&groups))
}

/// Write `html` to `path`, replacing any existing file.
pub fn write_output(path: &Path, html: &str) -> Result<()> {
    let write_err = |source: std::io::Error| DoclistError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    let mut file = options.open(path).map_err(write_err)?;
    file.write_all(html.as_bytes()).map_err(write_err)?;
    info!(path = %path.display(), bytes = html.len(), "wrote output");
    Ok(())
}

/// Run a full conversion of `target` against the real filesystem.
///
/// Relative targets are resolved against `cwd`. The confirmation line is
/// written to `report`. Returns the path of the written file.
pub fn run<W: Write>(target: &Path, cwd: &Path, report: &mut W) -> Result<PathBuf> {
    run_with_source(target, cwd, crate::tree::FsSource, report)
}

/// Same as [`run`], listing directories through `source`.
///
/// Validation and the output write still use the real filesystem.
pub fn run_with_source<S: DirSource, W: Write>(
    target: &Path,
    cwd: &Path,
    source: S,
    report: &mut W,
) -> Result<PathBuf> {
    let root = resolve_target(target, cwd)?;
    let html = generate(&root, source)?;

    let output_path = output_path_for(&root);
    write_output(&output_path, &html)?;

    writeln!(report, "Done! Output saved to: {}", output_path.display())
        .map_err(DoclistError::Report)?;
    Ok(output_path)
}
