//! Doclist - turn a directory tree into a WordPress-ready HTML fragment
//!
//! Every directory holding visible files becomes an `<h3>` heading followed
//! by a `<ul>` of cleaned-up file names.

pub mod app;
pub mod clean;
pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use app::{OUTPUT_FILE_NAME, run, run_with_source};
pub use clean::{clean_dir_name, clean_file_name};
pub use error::{DoclistError, Result};
pub use output::{HtmlRenderer, escape_html, render_html};
pub use tree::{DirSource, DirectoryGroup, FsSource, GroupWalker, SourceEntry};
