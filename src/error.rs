//! Error types for doclist

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for doclist operations
pub type Result<T> = std::result::Result<T, DoclistError>;

/// Every failure that ends a doclist run.
#[derive(Error, Debug)]
pub enum DoclistError {
    /// The process working directory could not be determined
    #[error("cannot determine current directory: {0}")]
    CurrentDir(#[source] io::Error),

    /// Target path is missing or cannot be inspected
    #[error("cannot access '{}': {source}", path.display())]
    Access {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Target path exists but is not a directory
    #[error("'{}' is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    /// A directory could not be listed during traversal
    #[error("error walking directory '{}': {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The HTML output file could not be written
    #[error("error writing output '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The confirmation line could not be written
    #[error("error writing report: {0}")]
    Report(#[source] io::Error),
}
