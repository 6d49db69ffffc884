//! Trace-level events for terminal conversion outcomes.
//!
//! With the `tracing` feature enabled `trace!` forwards to `tracing::trace!`.
//! Without it the macro expands to nothing and its arguments are not
//! evaluated, so the conversion paths stay free of logging overhead.

#[cfg(feature = "tracing")]
macro_rules! trace {
    ($($arg:tt)+) => {
        ::tracing::trace!(target: "numscan", $($arg)+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($arg:tt)+) => {};
}
