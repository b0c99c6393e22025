use std::io;

use glob::GlobError;
use thiserror::Error;

/// Errors surfaced by the traversal engine.
#[derive(Debug, Error)]
pub enum TraverseError {
    /// A traversal was requested without any needle globs.
    #[error("needle globs must not be empty")]
    NoNeedles,

    /// A traversal instance was run a second time.
    #[error("traversal already run; construct a fresh one per call")]
    AlreadyRun,

    /// The base path canonicalizes to nothing.
    #[error("base path '{0}' does not exist")]
    MissingBase(String),

    /// An operation on the file tree failed.
    #[error("I/O error on '{path}'")]
    Io {
        /// Path the operation was applied to.
        path: String,
        /// Underlying error reported by the tree.
        #[source]
        source: io::Error,
    },

    /// A pattern operation failed.
    #[error(transparent)]
    Glob(#[from] GlobError),
}
