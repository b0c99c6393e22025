use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

use glob::{Matcher, PathCheckResult};
use logging::debug_log;

use crate::entry::{Entry, EntryKind};
use crate::error::TraverseError;
use crate::ignore::add_ignore_lines;
use crate::tree::{join_path, FileTree};

/// Status values a [`ProcessEntry`] implementation returns.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProcessStatus {
    /// Keep going; for a directory, descend into it.
    Continue,
    /// For a directory, do not descend into it. For a file, treated the
    /// same as [`Continue`](Self::Continue).
    Skip,
    /// Do not process any more entries at all.
    Stop,
}

/// Receiver for dispatched entries.
pub trait ProcessEntry {
    /// Called for each entry the needle matcher includes and the active
    /// ignore matcher does not suppress. The returned status steers the
    /// traversal.
    fn process_entry(&mut self, entry: &Entry) -> ProcessStatus;

    /// Called for entries that would have been dispatched but were matched
    /// by an ignore rule. Cannot affect control flow.
    fn entry_ignored(&mut self, _entry: &Entry) {}
}

/// An entry and the ignore matcher active for it. The matcher is never
/// null; the base entry carries an empty one.
struct WorkItem {
    entry: Entry,
    ignores: Arc<Matcher>,
}

/// Single-shot breadth-first traversal of a [`FileTree`].
///
/// Construction compiles the needle matcher, anchored at the canonical base
/// path, and seeds the work queue with the base directory. [`run`](Self::run)
/// then pulls entries off the queue: already-seen canonical paths and
/// entries beyond the depth limit are dropped, ignore-matched entries are
/// reported to [`ProcessEntry::entry_ignored`], needle-included entries are
/// dispatched, and directories the needle says nothing about are descended
/// into, since files of interest may sit below them.
///
/// On descent the engine reads the directory's ignore-file candidates into
/// a fresh matcher delegating to the parent directory's, so deeper rules
/// override shallower ones while everything an ancestor ignored stays
/// ignored unless re-included with a `!` pattern.
///
/// A traverser runs once; [`run`](Self::run) fails with
/// [`TraverseError::AlreadyRun`] on reentry. Use [`traverse`] when nothing
/// needs configuring between construction and the run.
pub struct Traverser<'a, T: FileTree, P: ProcessEntry> {
    tree: &'a mut T,
    sink: &'a mut P,
    queue: VecDeque<WorkItem>,
    needle_matcher: Matcher,
    max_depth: isize,
    seen: HashSet<String>,
    traversed: bool,
}

impl<'a, T: FileTree, P: ProcessEntry> Traverser<'a, T, P> {
    /// Prepares a traversal of `tree` rooted at `base_path`.
    ///
    /// `needles` are EditorConfig-style globs resolved against the base
    /// path. `max_depth` bounds how many levels below the base are visited;
    /// negative means unlimited, and `0` is treated like `1` (direct
    /// children only).
    ///
    /// # Errors
    ///
    /// [`TraverseError::NoNeedles`] when `needles` is empty,
    /// [`TraverseError::MissingBase`] when the base does not exist, plus
    /// I/O and pattern errors from canonicalizing and compiling.
    pub fn new<I, S>(
        tree: &'a mut T,
        sink: &'a mut P,
        base_path: &str,
        needles: I,
        max_depth: isize,
    ) -> Result<Self, TraverseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let needles: Vec<S> = needles.into_iter().collect();
        if needles.is_empty() {
            return Err(TraverseError::NoNeedles);
        }

        let root = tree
            .canonicalize(base_path)
            .map_err(|source| TraverseError::Io {
                path: base_path.to_string(),
                source,
            })?;
        if root.is_empty() {
            return Err(TraverseError::MissingBase(base_path.to_string()));
        }
        debug_log!(Walk, 1, "traversal rooted at {}", root);

        let mut needle_matcher = Matcher::new();
        for needle in &needles {
            needle_matcher.add_glob_at(needle.as_ref(), &root)?;
        }
        needle_matcher.finalize()?;

        // The ignore chain starts empty, so the base entry cannot be ignored.
        let mut queue = VecDeque::new();
        queue.push_back(WorkItem {
            entry: Entry::new(EntryKind::Dir, root),
            ignores: Arc::new(Matcher::new()),
        });

        Ok(Self {
            tree,
            sink,
            queue,
            needle_matcher,
            max_depth,
            seen: HashSet::new(),
            traversed: false,
        })
    }

    /// Runs the traversal to completion, or until the sink returns
    /// [`ProcessStatus::Stop`].
    ///
    /// # Errors
    ///
    /// [`TraverseError::AlreadyRun`] on reentry; otherwise I/O errors from
    /// directory reads. Ignore-file candidates that fail to resolve or read
    /// are skipped, not surfaced.
    pub fn run(&mut self) -> Result<(), TraverseError> {
        if self.traversed {
            return Err(TraverseError::AlreadyRun);
        }
        self.traversed = true;

        while let Some(mut item) = self.queue.pop_front() {
            if !self.seen.insert(item.entry.canon_path.clone()) {
                debug_log!(Dup, 1, "already seen {}; skipping", item.entry.canon_path);
                continue;
            }

            if let Some(limit) = self.depth_limit() {
                if item.entry.depth > limit {
                    debug_log!(
                        Walk,
                        2,
                        "{} exceeds depth limit; skipping",
                        item.entry.canon_path
                    );
                    continue;
                }
            }

            if item.ignores.contains(&item.entry.canon_path)? {
                item.entry.ignored = true;
                if item.entry.never_ignore {
                    debug_log!(
                        Ignore,
                        1,
                        "{} is ignored but flagged never-ignore; dispatching",
                        item.entry.canon_path
                    );
                } else {
                    debug_log!(Ignore, 1, "ignored {}; skipping", item.entry.canon_path);
                    self.sink.entry_ignored(&item.entry);
                    continue;
                }
            }

            let matched = self.needle_matcher.check(&item.entry.canon_path)?;
            debug_log!(Match, 1, "{:?} for {}", matched, item.entry.canon_path);

            let status = match matched {
                PathCheckResult::Excluded => continue,
                PathCheckResult::Included => self.sink.process_entry(&item.entry),
                PathCheckResult::Unknown => {
                    // A directory not named by the needle may still hold
                    // entries that are; descend without dispatching.
                    if item.entry.kind == EntryKind::Dir {
                        self.load_dir(&item.entry, &item.ignores)?;
                    }
                    continue;
                }
            };

            match status {
                ProcessStatus::Continue => {
                    if item.entry.kind == EntryKind::Dir {
                        self.load_dir(&item.entry, &item.ignores)?;
                    }
                }
                ProcessStatus::Skip => {}
                ProcessStatus::Stop => break,
            }
        }

        Ok(())
    }

    /// Effective depth bound, if any. 0 is normalized to 1 so that a zero
    /// limit still reaches the base directory's direct children.
    fn depth_limit(&self) -> Option<isize> {
        if self.max_depth < 0 {
            None
        } else {
            Some(self.max_depth.max(1))
        }
    }

    /// Loads the ignore files and children of a directory about to be
    /// descended into, enqueueing each child with the child ignore matcher.
    fn load_dir(&mut self, entry: &Entry, parent_ignores: &Arc<Matcher>) -> Result<(), TraverseError> {
        if self
            .depth_limit()
            .is_some_and(|limit| entry.depth + 1 > limit)
        {
            // Every child would be dropped at the depth check; skip the I/O.
            return Ok(());
        }

        let ignores = self.load_ignore_files(&entry.canon_path, parent_ignores)?;

        let children = self
            .tree
            .read_dir(&entry.canon_path)
            .map_err(|source| TraverseError::Io {
                path: entry.canon_path.clone(),
                source,
            })?;
        debug_log!(
            Walk,
            3,
            "{} entries in {}",
            children.len(),
            entry.canon_path
        );

        for mut child in children {
            child.depth = entry.depth + 1;
            self.queue.push_back(WorkItem {
                entry: child,
                ignores: Arc::clone(&ignores),
            });
        }
        Ok(())
    }

    /// Builds the ignore matcher for a directory: every readable candidate
    /// parses into a fresh matcher whose delegate is the parent's. Absent
    /// or unreadable candidates are normal and skipped.
    fn load_ignore_files(
        &mut self,
        dir_path: &str,
        parent_ignores: &Arc<Matcher>,
    ) -> Result<Arc<Matcher>, TraverseError> {
        let mut matcher = Matcher::with_delegate(Arc::clone(parent_ignores));

        for candidate in self.tree.ignore_candidates_for(dir_path) {
            let canon = if candidate.starts_with('/') {
                candidate
            } else {
                match self.tree.canonicalize(&join_path(dir_path, &candidate)) {
                    Ok(canon) => canon,
                    Err(error) => {
                        debug_log!(
                            Ignore,
                            1,
                            "cannot resolve ignore candidate '{}' under {}: {}",
                            candidate,
                            dir_path,
                            error
                        );
                        continue;
                    }
                }
            };
            if canon.is_empty() {
                continue;
            }

            let contents = match self.tree.read_file(&canon) {
                Ok(contents) => contents,
                Err(error) => {
                    debug_log!(Ignore, 1, "skipping unreadable ignore file {}: {}", canon, error);
                    continue;
                }
            };
            debug_log!(Ignore, 2, "loading ignore file {}", canon);
            add_ignore_lines(&mut matcher, &contents, dir_path)?;
        }

        matcher.finalize()?;
        Ok(Arc::new(matcher))
    }
}

/// Constructs and runs a single traversal over `tree`.
///
/// See [`Traverser::new`] for the parameters and error conditions.
///
/// # Errors
///
/// As for [`Traverser::new`] and [`Traverser::run`].
pub fn traverse<T, P, I, S>(
    tree: &mut T,
    sink: &mut P,
    base_path: &str,
    needles: I,
    max_depth: isize,
) -> Result<(), TraverseError>
where
    T: FileTree,
    P: ProcessEntry,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Traverser::new(tree, sink, base_path, needles, max_depth)?.run()
}
