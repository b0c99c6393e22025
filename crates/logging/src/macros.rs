//! crates/logging/src/macros.rs
//! The `debug_log!` macro.

/// Emit a leveled debug diagnostic when `$flag` is enabled at `$level`.
///
/// The flag is named bare; it resolves against [`DebugFlag`](crate::DebugFlag).
/// Format arguments are only evaluated when the flag passes the gate.
///
/// ```
/// use logging::{debug_log, init, VerbosityConfig};
///
/// init(VerbosityConfig::from_verbose_level(2));
/// debug_log!(Walk, 1, "entering {}", "/some/dir");
/// ```
#[macro_export]
macro_rules! debug_log {
    ($flag:ident, $level:expr, $($arg:tt)*) => {
        if $crate::debug_gte($crate::DebugFlag::$flag, $level) {
            $crate::emit_debug($crate::DebugFlag::$flag, $level, format!($($arg)*));
        }
    };
}
