use std::fs;
use std::io;

use logging::debug_log;

use crate::entry::{Entry, EntryKind};
use crate::tree::{join_path, FileTree};

/// [`FileTree`] over the local filesystem.
///
/// `canonicalize` maps to the operating system's real-path resolution, so
/// symlinks are resolved; a nonexistent path yields the empty string.
/// `read_dir` keeps only regular files and directories. Entries whose names
/// are not valid UTF-8 are skipped rather than corrupted, since the engine
/// matches `str` paths.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiskFileTree;

impl DiskFileTree {
    /// Creates the adapter. It holds no state.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FileTree for DiskFileTree {
    fn read_dir(&mut self, dir_path: &str) -> io::Result<Vec<Entry>> {
        let mut entries = Vec::new();
        for dirent in fs::read_dir(dir_path)? {
            let dirent = dirent?;
            let file_type = dirent.file_type()?;

            let kind = if file_type.is_file() {
                EntryKind::File
            } else if file_type.is_dir() {
                EntryKind::Dir
            } else {
                debug_log!(
                    Walk,
                    2,
                    "skipping {:?}: neither regular file nor directory",
                    dirent.path()
                );
                continue;
            };

            match dirent.file_name().to_str() {
                Some(name) => entries.push(Entry::new(kind, join_path(dir_path, name))),
                None => {
                    debug_log!(Walk, 1, "skipping {:?}: non-UTF-8 name", dirent.path());
                }
            }
        }
        Ok(entries)
    }

    fn read_file(&mut self, path: &str) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn canonicalize(&self, path: &str) -> io::Result<String> {
        match fs::canonicalize(path) {
            Ok(resolved) => resolved.into_os_string().into_string().map_err(|resolved| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("non-UTF-8 path: {resolved:?}"),
                )
            }),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(String::new()),
            Err(error) => Err(error),
        }
    }
}
