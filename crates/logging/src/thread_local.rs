//! crates/logging/src/thread_local.rs
//! Thread-local verbosity state and event capture.

use std::cell::RefCell;

use crate::config::VerbosityConfig;
use crate::levels::DebugFlag;

/// A diagnostic recorded by [`emit_debug`].
///
/// Events accumulate per thread until [`drain_events`] takes them; tests use
/// this to assert on what a code path logged.
#[derive(Clone, Debug)]
pub struct DiagnosticEvent {
    /// Flag the event was emitted under.
    pub flag: DebugFlag,
    /// Level the event was emitted at.
    pub level: u8,
    /// Rendered message text.
    pub message: String,
}

thread_local! {
    static CONFIG: RefCell<VerbosityConfig> = RefCell::new(VerbosityConfig::default());
    static EVENTS: RefCell<Vec<DiagnosticEvent>> = const { RefCell::new(Vec::new()) };
}

/// Install `config` as the calling thread's verbosity configuration,
/// replacing whatever was installed before.
pub fn init(config: VerbosityConfig) {
    CONFIG.with(|cell| *cell.borrow_mut() = config);
}

/// Whether `flag` is configured at or above `level` on this thread.
#[must_use]
pub fn debug_gte(flag: DebugFlag, level: u8) -> bool {
    CONFIG.with(|cell| cell.borrow().debug.get(flag) >= level)
}

/// Record a diagnostic that already passed the level gate.
///
/// The message goes to stderr and into the thread-local event buffer. Call
/// through [`debug_log!`](crate::debug_log) rather than directly so the
/// level gate and formatting stay in one place.
pub fn emit_debug(flag: DebugFlag, level: u8, message: String) {
    eprintln!("[{}{}] {}", flag.name(), level, message);
    EVENTS.with(|cell| {
        cell.borrow_mut().push(DiagnosticEvent {
            flag,
            level,
            message,
        });
    });
}

/// Take and return every event emitted on this thread since the last drain.
pub fn drain_events() -> Vec<DiagnosticEvent> {
    EVENTS.with(|cell| std::mem::take(&mut *cell.borrow_mut()))
}

/// Apply a textual debug flag such as `walk` or `glob2` to the thread's
/// configuration.
///
/// A trailing run of digits selects the level; its absence means level 1.
/// Unknown flag names are rejected.
pub fn apply_debug_flag(spec: &str) -> Result<(), String> {
    let digits_len = spec
        .chars()
        .rev()
        .take_while(char::is_ascii_digit)
        .count();
    let (name, digits) = spec.split_at(spec.len() - digits_len);

    let level: u8 = if digits.is_empty() {
        1
    } else {
        digits
            .parse()
            .map_err(|_| format!("level out of range in debug flag '{spec}'"))?
    };

    for flag in DebugFlag::ALL {
        if flag.name() == name {
            CONFIG.with(|cell| cell.borrow_mut().debug.set(flag, level));
            return Ok(());
        }
    }

    Err(format!("unknown debug flag '{name}'"))
}
