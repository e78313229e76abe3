use std::alloc::Layout;
use thiserror::Error;

/// Returned by bounds-checked access when the index is not below the length.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
#[error("index out of range")]
pub struct OutOfRange;

/// Storage for a buffer could not be obtained.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum AllocError {
    /// The requested extent does not fit in `isize::MAX` bytes.
    #[error("requested capacity overflows the address space")]
    CapacityOverflow,

    /// The global allocator returned null for the layout.
    #[error("allocation of {} bytes (align {}) failed", .layout.size(), .layout.align())]
    AllocFailed { layout: Layout },
}

/// A fallible insertion failed; the value is handed back untouched.
pub struct InsertError<T> {
    pub error: AllocError,
    pub value: T,
}

impl<T> InsertError<T> {
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T> std::error::Error for InsertError<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl<T> std::fmt::Debug for InsertError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InsertError")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<T> std::fmt::Display for InsertError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.error, f)
    }
}
