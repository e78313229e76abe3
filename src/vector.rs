use crate::buffer::{alloc_failure, OwnedBuffer};
use crate::error::{AllocError, InsertError, OutOfRange};
use crate::reserve::ReserveHint;
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::slice::SliceIndex;

/// Growable array backed by a single `OwnedBuffer`.
///
/// Slots `[0, len)` hold the elements. Slots `[len, capacity)` are allocated and hold
/// default or leftover values that are not part of the sequence; they are overwritten
/// when the sequence grows back over them and dropped with the buffer.
///
/// When full, appending doubles the capacity (starting at 1). Reallocation builds the
/// new buffer completely before the old one is given up, so a failed allocation leaves
/// the container as it was.
///
/// Positions passed to `insert` and `erase` are element offsets, so they stay meaningful
/// across reallocation.
pub struct SimpleVec<T> {
    items: OwnedBuffer<T>,
    size: usize,
    capacity: usize,
}

impl<T> SimpleVec<T> {
    /// Creates an empty vector without allocating.
    pub const fn new() -> SimpleVec<T> {
        SimpleVec {
            items: OwnedBuffer::new(),
            size: 0,
            capacity: 0,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.size
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        &self.items.as_slice()[..self.size]
    }

    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let size = self.size;
        &mut self.items.as_mut_slice()[..size]
    }

    /// Returns the element at `index`, or `OutOfRange` if `index >= len`.
    pub fn at(&self, index: usize) -> Result<&T, OutOfRange> {
        self.as_slice().get(index).ok_or(OutOfRange)
    }

    /// Returns the element at `index` mutably, or `OutOfRange` if `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
        self.as_mut_slice().get_mut(index).ok_or(OutOfRange)
    }

    /// Forgets all elements. Capacity and storage are kept, nothing is dropped.
    #[inline(always)]
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Removes the last element from the sequence.
    ///
    /// The value stays in its slot until it is overwritten or the buffer is released.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    pub fn pop_back(&mut self) {
        assert!(!self.is_empty(), "pop_back on an empty SimpleVec");
        self.size -= 1;
    }

    /// Removes the element at `pos`, shifting everything after it one slot left.
    ///
    /// Returns `pos`, which now refers to the element that followed the erased one
    /// (or equals `len` if the erased element was last).
    ///
    /// # Panics
    ///
    /// Panics if `pos >= len`.
    pub fn erase(&mut self, pos: usize) -> usize {
        assert!(pos < self.size, "erase position (is {}) should be < len (is {})", pos, self.size);
        // the erased value ends up in the first slot past the sequence
        self.as_mut_slice()[pos..].rotate_left(1);
        self.size -= 1;
        pos
    }

    /// Hands the buffer and the length over to the caller.
    pub(crate) fn into_buffer(mut self) -> (OwnedBuffer<T>, usize) {
        let size = self.size;
        self.size = 0;
        self.capacity = 0;
        (std::mem::take(&mut self.items), size)
    }

    /// Exchanges contents with `other`. Nothing is allocated or copied.
    pub fn swap_with(&mut self, other: &mut SimpleVec<T>) {
        self.items.swap(&mut other.items);
        std::mem::swap(&mut self.size, &mut other.size);
        std::mem::swap(&mut self.capacity, &mut other.capacity);
    }
}

impl<T> SimpleVec<T> where T: Default {
    /// Creates a vector of `size` default values.
    pub fn with_size(size: usize) -> SimpleVec<T> {
        SimpleVec {
            items: OwnedBuffer::with_extent(size),
            size,
            capacity: size,
        }
    }

    /// Creates an empty vector with room for `hint.capacity()` elements.
    pub fn with_reserve(hint: ReserveHint) -> SimpleVec<T> {
        SimpleVec {
            items: OwnedBuffer::with_extent(hint.capacity()),
            size: 0,
            capacity: hint.capacity(),
        }
    }

    /// Builds a vector of exactly `iter.len()` elements and capacity.
    pub(crate) fn from_exact_iter(iter: impl ExactSizeIterator<Item=T>) -> SimpleVec<T> {
        let capacity = iter.len();
        let mut items = OwnedBuffer::with_extent(capacity);
        let mut size = 0;
        for (slot, item) in items.as_mut_slice().iter_mut().zip(iter) {
            *slot = item;
            size += 1;
        }
        SimpleVec { items, size, capacity }
    }

    /// Sets the length to `new_size`.
    ///
    /// Growing to `capacity` or beyond reallocates to exactly `new_size`. Slots between
    /// the old and the new length are reset to the default value. Shrinking only lowers
    /// the length.
    pub fn resize(&mut self, new_size: usize) {
        if let Err(e) = self.try_resize(new_size) {
            alloc_failure(e);
        }
    }

    pub fn try_resize(&mut self, new_size: usize) -> Result<(), AllocError> {
        if new_size >= self.capacity {
            self.relocate(new_size)?;
        }
        if new_size > self.size {
            for slot in &mut self.items.as_mut_slice()[self.size..new_size] {
                *slot = T::default();
            }
        }
        self.size = new_size;
        Ok(())
    }

    /// Appends `value`, doubling the capacity first if the vector is full.
    pub fn push_back(&mut self, value: T) {
        if let Err(e) = self.try_push_back(value) {
            alloc_failure(e.error);
        }
    }

    /// Same as `push_back`; on allocation failure the value is returned in the error.
    pub fn try_push_back(&mut self, value: T) -> Result<(), InsertError<T>> {
        if self.size == self.capacity {
            if let Err(error) = self.grow() {
                return Err(InsertError { error, value });
            }
        }
        self.items[self.size] = value;
        self.size += 1;
        Ok(())
    }

    /// Inserts `value` at `pos`, shifting `[pos, len)` one slot right. Returns `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos > len`.
    pub fn insert(&mut self, pos: usize, value: T) -> usize {
        match self.try_insert(pos, value) {
            Ok(pos) => pos,
            Err(e) => alloc_failure(e.error),
        }
    }

    pub fn try_insert(&mut self, pos: usize, value: T) -> Result<usize, InsertError<T>> {
        assert!(pos <= self.size, "insert position (is {}) should be <= len (is {})", pos, self.size);
        if self.size == self.capacity {
            if let Err(error) = self.grow() {
                return Err(InsertError { error, value });
            }
        }
        let end = self.size;
        let slots = &mut self.items.as_mut_slice()[pos..=end];
        slots[end - pos] = value;
        slots.rotate_right(1);
        self.size += 1;
        Ok(pos)
    }

    /// Makes room for `new_capacity` elements. Never shrinks.
    pub fn reserve(&mut self, new_capacity: usize) {
        if let Err(e) = self.try_reserve(new_capacity) {
            alloc_failure(e);
        }
    }

    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), AllocError> {
        if new_capacity > self.capacity {
            self.relocate(new_capacity)?;
        }
        Ok(())
    }

    fn grow(&mut self) -> Result<(), AllocError> {
        let new_capacity = if self.capacity == 0 {
            1
        } else {
            self.capacity.checked_mul(2).ok_or(AllocError::CapacityOverflow)?
        };
        self.relocate(new_capacity)
    }

    /// Moves the elements into a fresh buffer of `new_capacity` slots and releases the old one.
    fn relocate(&mut self, new_capacity: usize) -> Result<(), AllocError> {
        debug_assert!(new_capacity >= self.size, "relocate would lose elements");
        let mut fresh = OwnedBuffer::try_with_extent(new_capacity)?;
        for (slot, item) in fresh.as_mut_slice().iter_mut().zip(self.as_mut_slice()) {
            std::mem::swap(slot, item);
        }
        debug!("relocate {} items, capacity {} -> {}", self.size, self.capacity, new_capacity);
        self.items.swap(&mut fresh);
        self.capacity = new_capacity;
        Ok(())
    }
}

impl<T> SimpleVec<T> where T: Clone + Default {
    /// Creates a vector of `size` copies of `value`.
    pub fn from_elem(size: usize, value: T) -> SimpleVec<T> {
        let mut v = SimpleVec::with_size(size);
        v.as_mut_slice().fill(value);
        v
    }

    /// Creates a vector holding a copy of `items`, with capacity equal to its length.
    pub fn from_slice(items: &[T]) -> SimpleVec<T> {
        SimpleVec::from_exact_iter(items.iter().cloned())
    }
}

/// Copies the elements into a buffer as large as the source's capacity.
impl<T> Clone for SimpleVec<T> where T: Clone + Default {
    fn clone(&self) -> SimpleVec<T> {
        let mut items = OwnedBuffer::with_extent(self.capacity);
        items.as_mut_slice()[..self.size].clone_from_slice(self.as_slice());
        SimpleVec {
            items,
            size: self.size,
            capacity: self.capacity,
        }
    }
}

impl<T> Default for SimpleVec<T> {
    fn default() -> SimpleVec<T> {
        SimpleVec::new()
    }
}

impl<T> Deref for SimpleVec<T> {
    type Target = [T];

    #[inline(always)]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for SimpleVec<T> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

/// Indexing covers only `[0, len)`; anything else panics.
impl<T, I: SliceIndex<[T]>> Index<I> for SimpleVec<T> {
    type Output = I::Output;

    #[inline(always)]
    fn index(&self, index: I) -> &I::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for SimpleVec<T> {
    #[inline(always)]
    fn index_mut(&mut self, index: I) -> &mut I::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T> AsRef<[T]> for SimpleVec<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for SimpleVec<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> From<ReserveHint> for SimpleVec<T> where T: Default {
    fn from(hint: ReserveHint) -> SimpleVec<T> {
        SimpleVec::with_reserve(hint)
    }
}

impl<T, const N: usize> From<[T; N]> for SimpleVec<T> where T: Default {
    fn from(items: [T; N]) -> SimpleVec<T> {
        SimpleVec::from_exact_iter(IntoIterator::into_iter(items))
    }
}

impl<T> From<&[T]> for SimpleVec<T> where T: Clone + Default {
    fn from(items: &[T]) -> SimpleVec<T> {
        SimpleVec::from_slice(items)
    }
}

impl<T> From<Vec<T>> for SimpleVec<T> where T: Default {
    fn from(items: Vec<T>) -> SimpleVec<T> {
        SimpleVec::from_exact_iter(items.into_iter())
    }
}

impl<T> std::fmt::Debug for SimpleVec<T> where T: std::fmt::Debug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Creates a `SimpleVec` from a literal sequence, or from a value and a count.
///
/// ```
/// use simplevec::simple_vec;
///
/// let v = simple_vec![10, 20, 30];
/// assert_eq!(3, v.len());
/// assert_eq!(3, v.capacity());
///
/// let w = simple_vec!["x"; 2];
/// assert_eq!(w, ["x", "x"]);
/// ```
#[macro_export]
macro_rules! simple_vec {
    () => (
        $crate::SimpleVec::new()
    );
    ($elem:expr; $n:expr) => (
        $crate::SimpleVec::from_elem($n, $elem)
    );
    ($($x:expr),+ $(,)?) => (
        $crate::SimpleVec::from([$($x),+])
    );
}
