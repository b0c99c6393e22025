#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging/src/lib.rs
//! Flag-scoped leveled debug diagnostics.
//!
//! Each subsystem of the pattern and traversal engines traces through its own
//! [`DebugFlag`], with a `u8` level per flag. Configuration is thread-local:
//! call [`init`] with a [`VerbosityConfig`], then emit through the
//! [`debug_log!`] macro. A disabled flag costs one thread-local read per
//! call site. Emitted events are mirrored into a thread-local buffer that
//! tests drain with [`drain_events`].
//!
//! ```
//! use logging::{debug_log, drain_events, init, VerbosityConfig};
//!
//! let mut config = VerbosityConfig::default();
//! config.debug.walk = 1;
//! init(config);
//! drain_events();
//!
//! debug_log!(Walk, 1, "entering {}", "/some/dir");
//! debug_log!(Walk, 2, "filtered out");
//!
//! assert_eq!(drain_events().len(), 1);
//! ```

mod config;
mod levels;
mod macros;
mod thread_local;

pub use config::VerbosityConfig;
pub use levels::{DebugFlag, DebugLevels};
pub use thread_local::{
    apply_debug_flag, debug_gte, drain_events, emit_debug, init, DiagnosticEvent,
};
