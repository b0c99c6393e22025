use std::collections::HashSet;

use logging::debug_log;
use regex::Regex;

use crate::compiler;
use crate::error::GlobError;

/// Inclusive numeric bounds captured from a `{N..M}` range.
pub(crate) type RangePair = (i64, i64);

/// One compiled regex plus the numeric bounds its capture groups must satisfy.
#[derive(Clone, Debug)]
struct Criteria {
    regex: Regex,
    ranges: Vec<RangePair>,
}

impl Criteria {
    fn new(pattern: &str, ranges: Vec<RangePair>) -> Result<Self, GlobError> {
        debug_log!(
            Glob,
            2,
            "compiling regex >>{}<< with {} ranges",
            pattern,
            ranges.len()
        );
        let regex = Regex::new(pattern).map_err(|source| GlobError::Compile {
            pattern: pattern.to_string(),
            source: Box::new(source),
        })?;
        Ok(Self { regex, ranges })
    }

    fn accepts(&self, path: &str) -> bool {
        // Anchored full-string regexes cannot match a zero-length span of a
        // non-empty input; callers filter the empty path beforehand.
        debug_assert!(!path.is_empty());

        if self.ranges.is_empty() {
            return self.regex.is_match(path);
        }

        let Some(caps) = self.regex.captures(path) else {
            return false;
        };
        for (idx, &(lo, hi)) in self.ranges.iter().enumerate() {
            // A group that did not participate constrains nothing.
            let Some(group) = caps.get(idx + 1) else {
                continue;
            };
            let text = group.as_str();
            // Zero-prefixed numbers such as 010 never satisfy a range.
            if text.starts_with('0') {
                return false;
            }
            match text.parse::<i64>() {
                Ok(num) if (lo..=hi).contains(&num) => {}
                _ => return false,
            }
        }
        true
    }
}

/// A set of globs checked as a unit.
///
/// - Each glob must match the entire string: `*.txt` matches `foo.txt` but
///   not `foo/bar.txt`.
/// - Dot files are not treated specially, so `*foo` matches both `foo` and
///   `.foo`.
/// - No glob set contains the empty string.
///
/// Sets are built in two phases: [`add_glob`](Self::add_glob) collects
/// pattern text, then [`finalize`](Self::finalize) compiles it. Querying
/// before finalizing, or adding after, is an error.
#[derive(Clone, Debug, Default)]
pub struct GlobSet {
    globs: HashSet<String>,
    criteria: Vec<Criteria>,
    finalized: bool,
}

impl GlobSet {
    /// Creates an empty, unfinalized set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single glob to the set. Duplicates are absorbed.
    ///
    /// # Errors
    ///
    /// [`GlobError::EmptyGlob`] for an empty pattern and
    /// [`GlobError::AlreadyFinalized`] once [`finalize`](Self::finalize) has
    /// run.
    pub fn add_glob(&mut self, glob: &str) -> Result<(), GlobError> {
        if glob.is_empty() {
            return Err(GlobError::EmptyGlob);
        }
        if self.finalized {
            return Err(GlobError::AlreadyFinalized);
        }
        self.globs.insert(glob.to_string());
        Ok(())
    }

    /// Adds every glob the iterator yields.
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

    /// Compiles the collected globs. Finalizing an empty set is not an
    /// error; it yields a set that matches nothing.
    ///
    /// Globs without numeric ranges are combined into one alternation so a
    /// single regex pass disposes of all of them. Each glob carrying a
    /// `{N..M}` range compiles alone: several numeric captures interleaved
    /// in one alternation would mis-attribute the groups, because every
    /// number matches textually at the first `\d+` placeholder.
    ///
    /// # Errors
    ///
    /// [`GlobError::Compile`] if the regex engine rejects a translation,
    /// which indicates a translator bug rather than bad user input.
    pub fn finalize(&mut self) -> Result<(), GlobError> {
        if self.finalized {
            return Ok(());
        }

        let mut globs: Vec<&str> = self.globs.iter().map(String::as_str).collect();
        globs.sort_unstable();

        let mut combined: Vec<String> = Vec::new();
        let mut criteria = Vec::new();
        for glob in globs {
            let mut src = String::new();
            let mut ranges = Vec::new();
            compiler::append_regex_src(glob, &mut src, &mut ranges);
            if ranges.is_empty() {
                combined.push(format!("(?:{src})"));
            } else {
                criteria.push(Criteria::new(&format!("^(?:{src})$"), ranges)?);
            }
        }

        if !combined.is_empty() {
            // Checked first: one pass over the common case before any of the
            // per-range regexes run.
            let source = format!("^(?:{})$", combined.join("|"));
            criteria.insert(0, Criteria::new(&source, Vec::new())?);
        }

        self.criteria = criteria;
        self.finalized = true;
        Ok(())
    }

    /// Whether [`finalize`](Self::finalize) has been called.
    #[must_use]
    pub fn finalized(&self) -> bool {
        self.finalized
    }

    /// Returns true if the set contains `path`.
    ///
    /// The empty string is contained by no set. All other inputs are
    /// expected to be absolute canonical paths, though this set-level check
    /// does not enforce that; [`Matcher::check`](crate::Matcher::check) does.
    ///
    /// # Errors
    ///
    /// [`GlobError::NotFinalized`] before [`finalize`](Self::finalize).
    pub fn contains(&self, path: &str) -> Result<bool, GlobError> {
        if !self.finalized {
            return Err(GlobError::NotFinalized);
        }
        if path.is_empty() {
            return Ok(false);
        }
        Ok(self.criteria.iter().any(|criteria| criteria.accepts(path)))
    }
}
