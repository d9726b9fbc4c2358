//! Display-name cleanup for files and directories.
//!
//! Raw filesystem names are turned into the text shown in the generated HTML:
//! underscores and hyphens become spaces and surrounding whitespace is trimmed.
//! File names additionally lose their final extension.

/// Characters rendered as a space in display names.
const SEPARATORS: &[char] = &['_', '-'];

/// Clean a file name for display.
///
/// Strips the final extension (everything from the last `.`), then replaces
/// separators with spaces and trims.
///
/// ```
/// use doclist::clean::clean_file_name;
///
/// assert_eq!(clean_file_name("report-final.pdf"), "report final");
/// assert_eq!(clean_file_name("archive.tar.gz"), "archive.tar");
/// assert_eq!(clean_file_name("README"), "README");
/// ```
pub fn clean_file_name(name: &str) -> String {
    normalize(strip_extension(name))
}

/// Clean a directory name for display. Extensions are kept.
///
/// ```
/// use doclist::clean::clean_dir_name;
///
/// assert_eq!(clean_dir_name("My_Docs"), "My Docs");
/// assert_eq!(clean_dir_name("v1.2"), "v1.2");
/// ```
pub fn clean_dir_name(name: &str) -> String {
    normalize(name)
}

/// Return `name` without its final extension, if it has one.
pub fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) => &name[..idx],
        None => name,
    }
}

fn normalize(name: &str) -> String {
    name.replace(SEPARATORS, " ").trim().to_string()
}
