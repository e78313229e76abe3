/// Request for a capacity, without any elements.
///
/// Exists so that "n default elements" (`SimpleVec::with_size`) and "room for n elements"
/// (`SimpleVec::with_reserve`) are different calls rather than one ambiguous integer argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReserveHint {
    capacity: usize,
}

impl ReserveHint {
    pub const fn new(capacity: usize) -> ReserveHint {
        ReserveHint { capacity }
    }

    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Shorthand for `ReserveHint::new`.
///
/// ```
/// use simplevec::{reserve, SimpleVec};
///
/// let v: SimpleVec<u32> = SimpleVec::with_reserve(reserve(16));
/// assert_eq!(0, v.len());
/// assert_eq!(16, v.capacity());
/// ```
pub const fn reserve(capacity: usize) -> ReserveHint {
    ReserveHint::new(capacity)
}
