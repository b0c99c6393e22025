use std::any::Any;
use std::fmt;

/// Abstract type of a traversal entry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntryKind {
    /// A leaf; never descended into.
    File,
    /// A node the traversal may descend into.
    Dir,
}

/// A single entry in a file tree.
///
/// Tree adapters create entries in
/// [`FileTree::read_dir`](crate::FileTree::read_dir); the engine fills in
/// `depth`, owns the entry through the work queue, and hands out references
/// at dispatch time — an entry is never copied. `userdata` is an opaque slot
/// adapters can use to smuggle private data through to the callback.
pub struct Entry {
    /// What this entry represents.
    pub kind: EntryKind,
    /// Canonical path of this entry.
    pub canon_path: String,
    /// Levels below the traversal base; the base itself is 0. Filled by the
    /// engine; adapters may leave it at 0.
    pub depth: isize,
    /// When set by the adapter, an ignore-rule match no longer suppresses
    /// the entry; it is dispatched with [`ignored`](Self::ignored) set.
    pub never_ignore: bool,
    /// Set by the engine when an ignore rule matched this entry.
    pub ignored: bool,
    /// Adapter-private extension slot.
    pub userdata: Option<Box<dyn Any + Send>>,
}

impl Entry {
    /// Creates an entry at depth 0 with no flags and no userdata.
    #[must_use]
    pub fn new(kind: EntryKind, canon_path: impl Into<String>) -> Self {
        Self {
            kind,
            canon_path: canon_path.into(),
            depth: 0,
            never_ignore: false,
            ignored: false,
            userdata: None,
        }
    }

    /// Attaches adapter-private data to the entry.
    #[must_use]
    pub fn with_userdata(mut self, userdata: Box<dyn Any + Send>) -> Self {
        self.userdata = Some(userdata);
        self
    }

    /// Whether this entry is a directory.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("kind", &self.kind)
            .field("canon_path", &self.canon_path)
            .field("depth", &self.depth)
            .field("never_ignore", &self.never_ignore)
            .field("ignored", &self.ignored)
            .field("userdata", &self.userdata.as_ref().map(|_| ".."))
            .finish()
    }
}
