//! Shared helpers: an in-memory file tree and a recording sink.
#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};
use std::io;

use traverse::{Entry, EntryKind, FileTree, ProcessEntry, ProcessStatus, DEFAULT_IGNORE_FILE};

/// In-memory [`FileTree`] for driving the engine without touching disk.
///
/// Registering a file or directory registers its ancestor directories too.
/// `canonicalize` collapses repeated separators and returns the empty
/// string for unregistered paths, like the disk adapter does for
/// nonexistent ones.
pub struct MemTree {
    dirs: BTreeSet<String>,
    files: BTreeMap<String, Vec<u8>>,
    never_ignore: BTreeSet<String>,
    userdata: BTreeMap<String, i64>,
    candidates: Vec<String>,
}

impl MemTree {
    pub fn new() -> Self {
        Self {
            dirs: BTreeSet::from(["/".to_string()]),
            files: BTreeMap::new(),
            never_ignore: BTreeSet::new(),
            userdata: BTreeMap::new(),
            candidates: vec![DEFAULT_IGNORE_FILE.to_string()],
        }
    }

    pub fn file(mut self, path: &str, contents: &[u8]) -> Self {
        self.add_parents(path);
        self.files.insert(path.to_string(), contents.to_vec());
        self
    }

    pub fn dir(mut self, path: &str) -> Self {
        self.add_parents(path);
        self.dirs.insert(path.to_string());
        self
    }

    /// Flags an already-registered path as never-ignore.
    pub fn never_ignore(mut self, path: &str) -> Self {
        self.never_ignore.insert(path.to_string());
        self
    }

    /// Attaches an integer userdata payload to an already-registered path.
    pub fn userdata(mut self, path: &str, value: i64) -> Self {
        self.userdata.insert(path.to_string(), value);
        self
    }

    /// Replaces the default `.eignore` ignore-file candidate list.
    pub fn candidates(mut self, candidates: &[&str]) -> Self {
        self.candidates = candidates.iter().map(|c| c.to_string()).collect();
        self
    }

    fn add_parents(&mut self, path: &str) {
        let mut pos = 0;
        while let Some(next) = path[pos + 1..].find('/') {
            pos = pos + 1 + next;
            self.dirs.insert(path[..pos].to_string());
        }
    }

    fn make_entry(&self, kind: EntryKind, path: &str) -> Entry {
        let mut entry = Entry::new(kind, path);
        if self.never_ignore.contains(path) {
            entry.never_ignore = true;
        }
        if let Some(&value) = self.userdata.get(path) {
            entry = entry.with_userdata(Box::new(value));
        }
        entry
    }
}

fn normalize(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    for part in path.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        out.push('/');
        out.push_str(part);
    }
    if out.is_empty() {
        "/".to_string()
    } else {
        out
    }
}

fn is_direct_child(path: &str, prefix: &str) -> bool {
    path.strip_prefix(prefix)
        .is_some_and(|rest| !rest.is_empty() && !rest.contains('/'))
}

impl FileTree for MemTree {
    fn read_dir(&mut self, dir_path: &str) -> io::Result<Vec<Entry>> {
        let dir = normalize(dir_path);
        if !self.dirs.contains(&dir) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such directory: {dir}"),
            ));
        }

        let prefix = if dir == "/" {
            "/".to_string()
        } else {
            format!("{dir}/")
        };

        let mut entries = Vec::new();
        for child in &self.dirs {
            if is_direct_child(child, &prefix) {
                entries.push(self.make_entry(EntryKind::Dir, child));
            }
        }
        for child in self.files.keys() {
            if is_direct_child(child, &prefix) {
                entries.push(self.make_entry(EntryKind::File, child));
            }
        }
        Ok(entries)
    }

    fn read_file(&mut self, path: &str) -> io::Result<Vec<u8>> {
        self.files.get(&normalize(path)).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no such file: {path}"))
        })
    }

    fn canonicalize(&self, path: &str) -> io::Result<String> {
        let normalized = normalize(path);
        if self.dirs.contains(&normalized) || self.files.contains_key(&normalized) {
            Ok(normalized)
        } else {
            Ok(String::new())
        }
    }

    fn ignore_candidates_for(&mut self, _dir_path: &str) -> Vec<String> {
        self.candidates.clone()
    }
}

/// Sink that records every dispatched and ignored path.
#[derive(Default)]
pub struct SaveEntries {
    /// Canonical paths of dispatched entries.
    pub found: BTreeSet<String>,
    /// Dispatched-entry count, including re-dispatches the sets would hide.
    pub dispatch_count: usize,
    /// `ignored` flag of each dispatched entry.
    pub found_flags: BTreeMap<String, bool>,
    /// Userdata payloads observed on dispatched entries.
    pub userdata: BTreeMap<String, i64>,
    /// Canonical paths reported through the ignored hook.
    pub ignored_paths: BTreeSet<String>,
    /// Paths to answer `Skip` for.
    pub skip: BTreeSet<String>,
    /// Path to answer `Stop` at.
    pub stop_at: Option<String>,
}

impl ProcessEntry for SaveEntries {
    fn process_entry(&mut self, entry: &Entry) -> ProcessStatus {
        self.dispatch_count += 1;
        self.found.insert(entry.canon_path.clone());
        self.found_flags
            .insert(entry.canon_path.clone(), entry.ignored);
        if let Some(value) = entry
            .userdata
            .as_ref()
            .and_then(|data| data.downcast_ref::<i64>())
        {
            self.userdata.insert(entry.canon_path.clone(), *value);
        }

        if self.stop_at.as_deref() == Some(entry.canon_path.as_str()) {
            ProcessStatus::Stop
        } else if self.skip.contains(&entry.canon_path) {
            ProcessStatus::Skip
        } else {
            ProcessStatus::Continue
        }
    }

    fn entry_ignored(&mut self, entry: &Entry) {
        self.ignored_paths.insert(entry.canon_path.clone());
    }
}

/// Convenience: the found set as a sorted `Vec<&str>`.
pub fn found_vec(sink: &SaveEntries) -> Vec<&str> {
    sink.found.iter().map(String::as_str).collect()
}
