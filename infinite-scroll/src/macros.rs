//! Engine logging. Events go to the `infinite_scroll` target so hosts can filter them apart
//! from their own; without the `tracing` feature every macro expands to nothing.

/// Per-call detail: option swaps, trigger decisions and offset compensation.
#[cfg(feature = "tracing")]
macro_rules! istrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "infinite_scroll", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! istrace {
    ($($tt:tt)*) => {};
}

/// Load lifecycle transitions.
#[cfg(feature = "tracing")]
macro_rules! isdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "infinite_scroll", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! isdebug {
    ($($tt:tt)*) => {};
}

/// Rejected or ignored caller requests.
#[cfg(feature = "tracing")]
macro_rules! iswarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "infinite_scroll", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! iswarn {
    ($($tt:tt)*) => {};
}
