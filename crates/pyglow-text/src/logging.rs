#![forbid(unsafe_code)]

//! Logging and tracing support.
//!
//! Re-exports the `tracing` macros when the `tracing` feature is enabled.
//! When the feature is disabled, no-op macros with the same names are
//! provided so call sites compile unchanged:
//!
//! ```
//! use pyglow_text::logging::{debug, debug_span};
//!
//! let _guard = debug_span!("apply_edit", len = 3).entered();
//! debug!(len = 3, "edit applied");
//! ```

#[cfg(feature = "tracing")]
pub use tracing::{debug, debug_span, trace, trace_span, warn};

// When tracing is not enabled, provide no-op macros
#[cfg(not(feature = "tracing"))]
mod noop_macros {
    #[doc(hidden)]
    #[macro_export]
    macro_rules! __pyglow_noop_event {
        ($($arg:tt)*) => {};
    }

    #[doc(hidden)]
    #[macro_export]
    macro_rules! __pyglow_noop_span {
        ($($arg:tt)*) => {
            $crate::logging::NoopSpan
        };
    }
}

#[cfg(not(feature = "tracing"))]
pub use crate::{
    __pyglow_noop_event as debug, __pyglow_noop_event as trace, __pyglow_noop_event as warn,
    __pyglow_noop_span as debug_span, __pyglow_noop_span as trace_span,
};

/// A no-op span for when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[derive(Debug, Clone, Copy)]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    /// Enter the no-op span (does nothing).
    #[must_use]
    pub fn entered(self) -> NoopGuard {
        NoopGuard
    }
}

/// A no-op span guard.
#[cfg(not(feature = "tracing"))]
#[derive(Debug)]
pub struct NoopGuard;
