//! Forwarding macros for the optional `log` dependency.
//!
//! With the `logging` feature disabled the arguments are still type checked
//! (so values that only feed a log line don't trigger unused warnings), but
//! nothing is written anywhere.

macro_rules! debug {
    (target: $target:expr, $($arg:tt)+) => ({
        #[cfg(feature = "logging")]
        log::debug!(target: $target, $($arg)+);
        #[cfg(not(feature = "logging"))]
        let _ = ($target, format_args!($($arg)+));
    });
    ($($arg:tt)+) => (
        debug!(target: "simplevec", $($arg)+)
    )
}

macro_rules! trace {
    (target: $target:expr, $($arg:tt)+) => ({
        #[cfg(feature = "logging")]
        log::trace!(target: $target, $($arg)+);
        #[cfg(not(feature = "logging"))]
        let _ = ($target, format_args!($($arg)+));
    });
    ($($arg:tt)+) => (
        trace!(target: "simplevec", $($arg)+)
    )
}
