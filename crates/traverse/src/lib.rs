#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `traverse` walks an abstract file tree breadth-first, dispatching the
//! entries matched by a set of needle globs to a caller-supplied sink while
//! honoring hierarchical ignore files. The engine performs no I/O of its
//! own: everything goes through the [`FileTree`] capability trait, fulfilled
//! by [`DiskFileTree`] for the local filesystem or by any virtual tree.
//!
//! # Design
//!
//! - Needle globs are anchored at the canonical base path and compiled into
//!   one [`Matcher`](glob::Matcher) before the walk starts.
//! - The queue carries [`Entry`] values paired with the ignore matcher
//!   active for their directory. Descending into a directory loads its
//!   ignore-file candidates (`.eignore` by default, see
//!   [`FileTree::ignore_candidates_for`]) into a fresh matcher that
//!   delegates to the parent's, so deeper rules override shallower ones.
//! - A seen-set of canonical paths guarantees each entry is processed at
//!   most once even when canonicalization folds distinct names together.
//! - The sink steers the walk: [`ProcessStatus::Skip`] prunes a directory,
//!   [`ProcessStatus::Stop`] ends the traversal cleanly.
//!
//! # Invariants
//!
//! - Scheduling is single-threaded and cooperative; the sink runs
//!   synchronously inside the loop.
//! - Breadth-first across levels; within a directory, the order is whatever
//!   [`FileTree::read_dir`] returned.
//! - Entries are owned by the engine and never copied; sinks receive
//!   references, and adapter data rides along in [`Entry::userdata`].
//! - A directory the needle matcher knows nothing about is still descended,
//!   so `traverse(base, needles)` finds every match strictly below `base`
//!   even when `base` itself does not match.
//!
//! # Errors
//!
//! Fallible operations return [`TraverseError`]. Missing or unreadable
//! ignore-file candidates are not errors; they are skipped where they are
//! read. Everything else — unreadable directories, pattern compilation
//! failures, an empty needle set, a rerun of a finished traversal —
//! surfaces to the caller.
//!
//! # Examples
//!
//! Collect the paths of all matching files under a directory:
//!
//! ```no_run
//! use traverse::{traverse, DiskFileTree, Entry, ProcessEntry, ProcessStatus};
//!
//! struct Collect(Vec<String>);
//!
//! impl ProcessEntry for Collect {
//!     fn process_entry(&mut self, entry: &Entry) -> ProcessStatus {
//!         self.0.push(entry.canon_path.clone());
//!         ProcessStatus::Continue
//!     }
//! }
//!
//! let mut tree = DiskFileTree::new();
//! let mut sink = Collect(Vec::new());
//! traverse(&mut tree, &mut sink, "/etc", ["*.conf"], -1)?;
//! # Ok::<(), traverse::TraverseError>(())
//! ```
//!
//! # See also
//!
//! - The `glob` crate for the pattern dialect and matcher semantics.

mod disk;
mod entry;
mod error;
mod ignore;
mod traverser;
mod tree;

pub use disk::DiskFileTree;
pub use entry::{Entry, EntryKind};
pub use error::TraverseError;
pub use ignore::add_ignore_lines;
pub use traverser::{traverse, ProcessEntry, ProcessStatus, Traverser};
pub use tree::{FileTree, DEFAULT_IGNORE_FILE};
