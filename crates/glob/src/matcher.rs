use std::sync::Arc;

use logging::debug_log;

use crate::error::GlobError;
use crate::globset::GlobSet;

/// Characters that are special in globs, escaped when a literal directory
/// prefix is spliced into a pattern.
const GLOB_SPECIAL_CHARS: &str = r"?[]\*-{},";

/// Polarity of a glob: include or exclude.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Polarity {
    /// Globs without a leading `!`.
    Include,
    /// Globs with a leading `!`.
    Exclude,
}

/// The state of a path with respect to a [`Matcher`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PathCheckResult {
    /// Matched by an include set.
    Included,
    /// Matched by an exclude set.
    Excluded,
    /// Matched by no set in this matcher or its delegate chain.
    Unknown,
}

#[derive(Clone, Debug)]
struct SetAndPolarity {
    glob_set: GlobSet,
    polarity: Polarity,
}

impl SetAndPolarity {
    fn new(polarity: Polarity) -> Self {
        Self {
            glob_set: GlobSet::new(),
            polarity,
        }
    }
}

/// Matcher built iteratively from any number of glob patterns.
///
/// Patterns are grouped into runs of equal polarity, each run backed by one
/// [`GlobSet`]. For example
///
/// ```text
/// *.bak
/// *.swp
/// !*.foo
/// *.bar
/// ```
///
/// produces, in order, an include set matching `*.{bak,swp}`, an exclude set
/// matching `*.foo`, and an include set matching `*.bar`. Checks consult the
/// sets newest-first so later patterns override earlier ones, which is what
/// ignore-file semantics require.
///
/// A matcher may hold a delegate: when none of its own sets match a path,
/// the question is forwarded. Delegates chain, so per-directory ignore
/// matchers form a tree rooted at an empty matcher.
///
/// Invariant: every set except the newest is finalized; after
/// [`finalize`](Self::finalize), all of them are.
///
/// ```
/// use glob::{Matcher, PathCheckResult};
///
/// let mut m = Matcher::new();
/// m.add_glob_at("*.txt", "/notes")?;
/// m.add_glob_at("!draft.txt", "/notes")?;
/// m.finalize()?;
///
/// assert!(m.contains("/notes/todo.txt")?);
/// assert_eq!(m.check("/notes/draft.txt")?, PathCheckResult::Excluded);
/// assert_eq!(m.check("/notes/todo.rs")?, PathCheckResult::Unknown);
/// # Ok::<(), glob::GlobError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Matcher {
    globsets: Vec<SetAndPolarity>,
    delegate: Option<Arc<Matcher>>,
}

impl Matcher {
    /// Creates an empty matcher with no delegate. An empty matcher is ready
    /// immediately and answers [`PathCheckResult::Unknown`] for everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty matcher that forwards unmatched paths to `delegate`.
    #[must_use]
    pub fn with_delegate(delegate: Arc<Matcher>) -> Self {
        Self {
            globsets: Vec::new(),
            delegate: Some(delegate),
        }
    }

    /// Builds and finalizes a matcher from `globs`, each anchored at
    /// `anchor_dir`.
    ///
    /// # Errors
    ///
    /// As for [`add_glob_at`](Self::add_glob_at) and
    /// [`finalize`](Self::finalize).
    pub fn anchored<I, S>(globs: I, anchor_dir: &str) -> Result<Self, GlobError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut matcher = Self::new();
        matcher.add_globs_at(globs, anchor_dir)?;
        matcher.finalize()?;
        Ok(matcher)
    }

    /// Adds a single glob. A leading `!` marks it as an exclude.
    ///
    /// The glob lands in the newest set when polarities agree; otherwise the
    /// newest set is finalized and a new one of the other polarity begins.
    ///
    /// # Errors
    ///
    /// [`GlobError::EmptyGlob`] for an empty pattern (`!` alone counts as
    /// empty); [`GlobError::Compile`] if finalizing the previous set fails.
    pub fn add_glob(&mut self, glob: &str) -> Result<(), GlobError> {
        if glob.is_empty() {
            return Err(GlobError::EmptyGlob);
        }

        let (polarity, body) = match glob.strip_prefix('!') {
            Some(rest) => (Polarity::Exclude, rest),
            None => (Polarity::Include, glob),
        };

        let start_new_set = match self.globsets.last() {
            None => true,
            Some(last) => last.polarity != polarity,
        };
        if start_new_set {
            if let Some(last) = self.globsets.last_mut() {
                last.glob_set.finalize()?;
            }
            self.globsets.push(SetAndPolarity::new(polarity));
        }

        if let Some(last) = self.globsets.last_mut() {
            last.glob_set.add_glob(body)?;
        }
        Ok(())
    }

    /// Adds a single glob anchored at the directory `anchor_dir`.
    ///
    /// With `anchor_dir` of `/foo` and a glob of `*.txt`, only
    /// `/foo/*.txt` matches; with `**/*.txt`, `/foo/bar/*.txt` matches too.
    /// The anchor may be given with or without a trailing `/`. Glob-special
    /// characters in the anchor are treated as literal path text.
    ///
    /// The anchored form is `anchor**/glob` when the glob has no `/`,
    /// `anchor glob` when the glob starts with `/`, and `anchor/glob`
    /// otherwise; a leading `!` survives the rewrite.
    ///
    /// # Errors
    ///
    /// [`GlobError::EmptyAnchor`] when `anchor_dir` is empty, plus the
    /// errors of [`add_glob`](Self::add_glob).
    pub fn add_glob_at(&mut self, glob: &str, anchor_dir: &str) -> Result<(), GlobError> {
        if glob.is_empty() {
            return Err(GlobError::EmptyGlob);
        }
        if anchor_dir.is_empty() {
            return Err(GlobError::EmptyAnchor);
        }
        let anchor = anchor_dir.strip_suffix('/').unwrap_or(anchor_dir);

        let (polarity, body) = match glob.strip_prefix('!') {
            Some(rest) => (Polarity::Exclude, rest),
            None => (Polarity::Include, glob),
        };

        let mut full = String::with_capacity(anchor.len() + body.len() + 4);
        if polarity == Polarity::Exclude {
            full.push('!');
        }
        for c in anchor.chars() {
            if GLOB_SPECIAL_CHARS.contains(c) {
                full.push('\\');
            }
            full.push(c);
        }
        if !body.contains('/') {
            // No separator: match at any depth beneath the anchor.
            full.push_str("**/");
        } else if !body.starts_with('/') {
            full.push('/');
        }
        full.push_str(body);

        debug_log!(
            Glob,
            2,
            "glob '{}' anchored at '{}' -> '{}'",
            glob,
            anchor_dir,
            full
        );
        self.add_glob(&full)
    }

    /// Adds every glob the iterator yields, via [`add_glob`](Self::add_glob).
    pub fn add_globs<I, S>(&mut self, globs: I) -> Result<(), GlobError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for glob in globs {
            self.add_glob(glob.as_ref())?;
        }
        Ok(())
    }

    /// Adds every glob the iterator yields, anchored at `anchor_dir`.
    pub fn add_globs_at<I, S>(&mut self, globs: I, anchor_dir: &str) -> Result<(), GlobError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for glob in globs {
            self.add_glob_at(glob.as_ref(), anchor_dir)?;
        }
        Ok(())
    }

    /// Finalizes the newest set. Call once all globs have been added.
    ///
    /// # Errors
    ///
    /// [`GlobError::Compile`] if the regex engine rejects a translation.
    pub fn finalize(&mut self) -> Result<(), GlobError> {
        if let Some(last) = self.globsets.last_mut() {
            last.glob_set.finalize()?;
        }
        Ok(())
    }

    /// Whether [`check`](Self::check) and [`contains`](Self::contains) may
    /// be called.
    #[must_use]
    pub fn ready(&self) -> bool {
        self.globsets
            .last()
            .is_none_or(|last| last.glob_set.finalized())
    }

    /// Checks whether `path` is included, excluded, or unmatched.
    ///
    /// The path must be either empty (the result is
    /// [`PathCheckResult::Unknown`]) or absolute. Sets are consulted
    /// newest-first and the first containing set decides; when none does and
    /// a delegate exists, the delegate answers.
    ///
    /// # Errors
    ///
    /// [`GlobError::NotReady`] before [`finalize`](Self::finalize), and
    /// [`GlobError::RelativePath`] for a non-empty path that does not start
    /// with `/`.
    pub fn check(&self, path: &str) -> Result<PathCheckResult, GlobError> {
        if !self.ready() {
            return Err(GlobError::NotReady);
        }
        if path.is_empty() {
            return Ok(PathCheckResult::Unknown);
        }
        if !path.starts_with('/') {
            return Err(GlobError::RelativePath(path.to_string()));
        }

        // Newest set first: later patterns override earlier ones.
        for entry in self.globsets.iter().rev() {
            if entry.glob_set.contains(path)? {
                let result = match entry.polarity {
                    Polarity::Include => PathCheckResult::Included,
                    Polarity::Exclude => PathCheckResult::Excluded,
                };
                debug_log!(Match, 2, "{:?}: {}", result, path);
                return Ok(result);
            }
        }

        match &self.delegate {
            Some(parent) => parent.check(path),
            None => Ok(PathCheckResult::Unknown),
        }
    }

    /// Whether `path` checks as [`PathCheckResult::Included`].
    ///
    /// # Errors
    ///
    /// As for [`check`](Self::check).
    pub fn contains(&self, path: &str) -> Result<bool, GlobError> {
        Ok(self.check(path)? == PathCheckResult::Included)
    }
}
