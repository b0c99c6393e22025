use thiserror::Error;

/// Errors surfaced by the pattern engine.
#[derive(Debug, Error)]
pub enum GlobError {
    /// An empty pattern was handed to an `add` operation.
    #[error("cannot add an empty glob")]
    EmptyGlob,

    /// A finalized [`GlobSet`](crate::GlobSet) was asked to accept more patterns.
    #[error("already finalized; cannot add more globs")]
    AlreadyFinalized,

    /// A [`GlobSet`](crate::GlobSet) was queried before being finalized.
    #[error("glob set is not finalized")]
    NotFinalized,

    /// A [`Matcher`](crate::Matcher) was queried while its newest set is
    /// still accepting patterns.
    #[error("matcher is not ready; call finalize() after adding globs")]
    NotReady,

    /// Paths handed to `check`/`contains` must be absolute.
    #[error("path must be absolute (start with /): '{0}'")]
    RelativePath(String),

    /// An anchored add was given an empty anchor directory.
    #[error("anchor directory must not be empty")]
    EmptyAnchor,

    /// The assembled regex was rejected by the regex engine. Reaching this
    /// indicates a translation bug rather than a user error.
    #[error("could not compile regex '{pattern}'")]
    Compile {
        /// The regex source that failed to compile.
        pattern: String,
        /// Error reported by the regex engine.
        #[source]
        source: Box<regex::Error>,
    },
}
