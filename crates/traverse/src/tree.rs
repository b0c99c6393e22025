use std::io;

use crate::entry::Entry;

/// Name of the per-directory ignore file tried by default.
pub const DEFAULT_IGNORE_FILE: &str = ".eignore";

/// Capability surface the traversal engine needs from a backing tree.
///
/// Path entries are separated by `/` on all platforms; nothing here needs
/// to live on disk. [`DiskFileTree`](crate::DiskFileTree) is the adapter
/// for the local filesystem, and tests drive the engine over in-memory
/// trees.
pub trait FileTree {
    /// Returns the direct children of `dir_path`, excluding `.` and `..`,
    /// each classified as file or directory. The `depth` of returned
    /// entries may be left unset; the engine fills it in. Ignore rules need
    /// not be taken into account.
    ///
    /// # Errors
    ///
    /// Unreadable directories surface their I/O error.
    fn read_dir(&mut self, dir_path: &str) -> io::Result<Vec<Entry>>;

    /// Returns the full content of the file at `path`.
    ///
    /// # Errors
    ///
    /// Any failure surfaces; the engine catches it where recovery is
    /// intended (ignore-file candidates).
    fn read_file(&mut self, path: &str) -> io::Result<Vec<u8>>;

    /// Returns the absolute, separator-normalized form of `path` with no
    /// `.` or `..` components, or the empty string when the path does not
    /// exist.
    ///
    /// # Errors
    ///
    /// Nonexistence is never an error; other I/O failures are.
    fn canonicalize(&self, path: &str) -> io::Result<String>;

    /// Paths to try reading as ignore files for `dir_path`, absolute or
    /// relative to it. Candidates that do not exist are skipped silently.
    fn ignore_candidates_for(&mut self, _dir_path: &str) -> Vec<String> {
        vec![DEFAULT_IGNORE_FILE.to_string()]
    }
}

/// Joins a directory and a child name without doubling separators.
pub(crate) fn join_path(dir: &str, name: &str) -> String {
    if dir.ends_with('/') {
        format!("{dir}{name}")
    } else {
        format!("{dir}/{name}")
    }
}
