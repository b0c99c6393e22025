#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `glob` compiles EditorConfig-dialect glob patterns into regexes and
//! composes them into ordered include/exclude matchers over absolute paths.
//! The dialect covers `?`, `*`, `**`, bracket classes, brace alternation
//! (nesting allowed), numeric ranges such as `{3..120}`, and backslash
//! escapes; a leading `!` inverts a pattern's polarity and a leading `/`
//! anchors it at its binding directory. Path entries are separated by `/`
//! on all platforms.
//!
//! # Design
//!
//! - The compiler translates one pattern into regex source plus a side-band
//!   list of numeric bounds, because `{N..M}` constraints cannot be
//!   expressed as regex text alone.
//! - [`GlobSet`] aggregates same-polarity patterns. At
//!   [`finalize`](GlobSet::finalize) time all range-free patterns fuse into
//!   a single alternation while each range pattern compiles alone so its
//!   captures pair with its bounds.
//! - [`Matcher`] stacks glob sets in insertion order, tagged
//!   [`Include`](Polarity::Include) or [`Exclude`](Polarity::Exclude), and
//!   consults them newest-first so later patterns override earlier ones.
//!   Unmatched paths fall through to an optional delegate matcher, which is
//!   how per-directory ignore files inherit their ancestors' rules.
//!
//! # Invariants
//!
//! - Globs match the entire path; `*.txt` does not match `foo/bar.txt`.
//! - Dot files are not special: `*foo` matches both `foo` and `.foo`.
//! - No set and no matcher contains the empty string.
//! - Compiled state never changes after finalize; matchers are shared
//!   freely behind [`Arc`](std::sync::Arc) once built.
//!
//! # Errors
//!
//! All fallible operations return [`GlobError`]. Mutation after finalize,
//! queries before it, empty patterns, empty anchors, and relative query
//! paths are caller errors; [`GlobError::Compile`] signals a translation
//! bug.
//!
//! # Examples
//!
//! Ignore-style override chains:
//!
//! ```
//! use glob::{Matcher, PathCheckResult};
//!
//! let mut m = Matcher::new();
//! m.add_globs_at(["*.bak", "*.swp", "!important.bak"], "/work")?;
//! m.finalize()?;
//!
//! assert!(m.contains("/work/scratch.bak")?);
//! assert!(m.contains("/work/deep/nested.swp")?);
//! assert_eq!(m.check("/work/important.bak")?, PathCheckResult::Excluded);
//! assert_eq!(m.check("/work/readme.md")?, PathCheckResult::Unknown);
//! # Ok::<(), glob::GlobError>(())
//! ```
//!
//! Numeric ranges match integers without leading zeros:
//!
//! ```
//! use glob::Matcher;
//!
//! let m = Matcher::anchored(["log.{1..12}"], "/var")?;
//! assert!(m.contains("/var/log.7")?);
//! assert!(!m.contains("/var/log.13")?);
//! assert!(!m.contains("/var/log.07")?);
//! # Ok::<(), glob::GlobError>(())
//! ```
//!
//! # See also
//!
//! - The `traverse` crate, which drives a [`Matcher`] over a file tree and
//!   layers per-directory ignore matchers on top.

mod compiler;
mod error;
mod globset;
mod matcher;

pub use error::GlobError;
pub use globset::GlobSet;
pub use matcher::{Matcher, PathCheckResult, Polarity};
