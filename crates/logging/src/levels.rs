//! crates/logging/src/levels.rs
//! Debug flag definitions and per-flag level storage.

/// Subsystems that can be traced independently.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DebugFlag {
    /// Glob-to-regex compilation.
    Glob,
    /// Matcher decisions (include/exclude/unknown).
    Match,
    /// Traversal progress.
    Walk,
    /// Already-seen entries skipped during traversal.
    Dup,
    /// Ignore-file discovery and parsing.
    Ignore,
}

impl DebugFlag {
    /// Every flag, in a fixed order, for iteration and parsing.
    pub const ALL: [DebugFlag; 5] = [
        DebugFlag::Glob,
        DebugFlag::Match,
        DebugFlag::Walk,
        DebugFlag::Dup,
        DebugFlag::Ignore,
    ];

    /// Lower-case flag name as accepted by [`apply_debug_flag`](crate::apply_debug_flag).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            DebugFlag::Glob => "glob",
            DebugFlag::Match => "match",
            DebugFlag::Walk => "walk",
            DebugFlag::Dup => "dup",
            DebugFlag::Ignore => "ignore",
        }
    }
}

/// A verbosity level per debug flag. Level 0 means quiet.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DebugLevels {
    /// Level for [`DebugFlag::Glob`].
    pub glob: u8,
    /// Level for [`DebugFlag::Match`].
    pub matcher: u8,
    /// Level for [`DebugFlag::Walk`].
    pub walk: u8,
    /// Level for [`DebugFlag::Dup`].
    pub dup: u8,
    /// Level for [`DebugFlag::Ignore`].
    pub ignore: u8,
}

impl DebugLevels {
    /// Returns the configured level for `flag`.
    #[must_use]
    pub const fn get(&self, flag: DebugFlag) -> u8 {
        match flag {
            DebugFlag::Glob => self.glob,
            DebugFlag::Match => self.matcher,
            DebugFlag::Walk => self.walk,
            DebugFlag::Dup => self.dup,
            DebugFlag::Ignore => self.ignore,
        }
    }

    /// Sets the level for `flag`.
    pub fn set(&mut self, flag: DebugFlag, level: u8) {
        match flag {
            DebugFlag::Glob => self.glob = level,
            DebugFlag::Match => self.matcher = level,
            DebugFlag::Walk => self.walk = level,
            DebugFlag::Dup => self.dup = level,
            DebugFlag::Ignore => self.ignore = level,
        }
    }
}
