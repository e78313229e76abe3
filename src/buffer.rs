use crate::error::AllocError;
use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};
use std::ptr::{self, NonNull};

/// Exclusive owner of zero or one heap array of `T`.
///
/// Every slot of the array is an initialized value for the whole lifetime of the allocation,
/// so the owner is free to read, overwrite or swap any slot it knows to be within the extent.
/// The buffer has no notion of which slots are "in use"; that is up to whoever holds it.
///
/// There is exactly one owner of an allocation. The buffer is not `Clone`:
///
/// ```compile_fail
/// use simplevec::OwnedBuffer;
///
/// let a: OwnedBuffer<i32> = OwnedBuffer::with_extent(3);
/// let b = a.clone();
/// ```
///
/// Ownership moves with the value. To move it out of a place that must stay usable,
/// use `std::mem::take`, which leaves a null buffer behind.
pub struct OwnedBuffer<T> {
    raw: Option<NonNull<[T]>>,
    _owns: PhantomData<T>,
}

unsafe impl<T: Send> Send for OwnedBuffer<T> {}
unsafe impl<T: Sync> Sync for OwnedBuffer<T> {}

impl<T> OwnedBuffer<T> {
    /// Creates a buffer that holds nothing.
    pub const fn new() -> OwnedBuffer<T> {
        OwnedBuffer {
            raw: None,
            _owns: PhantomData,
        }
    }

    /// Adopts an allocation previously given up with `release`.
    ///
    /// # Safety
    ///
    /// `raw` must come from `OwnedBuffer::release` of a buffer with the same `T`, and must
    /// not be adopted more than once.
    pub unsafe fn from_raw(raw: NonNull<[T]>) -> OwnedBuffer<T> {
        OwnedBuffer {
            raw: Some(raw),
            _owns: PhantomData,
        }
    }

    /// Gives up ownership of the allocation and leaves this buffer null.
    ///
    /// The caller becomes responsible for the allocation; pass it back to `from_raw`
    /// to have it released.
    #[must_use = "the allocation leaks unless it is passed back to `OwnedBuffer::from_raw`"]
    pub fn release(&mut self) -> Option<NonNull<[T]>> {
        self.raw.take()
    }

    #[inline(always)]
    pub fn is_null(&self) -> bool {
        self.raw.is_none()
    }

    /// Returns `true` if the buffer holds an allocation.
    #[inline(always)]
    pub fn is_some(&self) -> bool {
        self.raw.is_some()
    }

    /// Exchanges allocations with `other`. Nothing is allocated or freed.
    #[inline(always)]
    pub fn swap(&mut self, other: &mut OwnedBuffer<T>) {
        std::mem::swap(&mut self.raw, &mut other.raw);
    }

    /// Base address of the array, or null.
    pub fn as_ptr(&self) -> *const T {
        match self.raw {
            Some(raw) => raw.as_ptr() as *const T,
            None => ptr::null(),
        }
    }

    pub fn as_mut_ptr(&mut self) -> *mut T {
        match self.raw {
            Some(raw) => raw.as_ptr() as *mut T,
            None => ptr::null_mut(),
        }
    }

    /// The whole extent of the allocation. Empty when null.
    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        match self.raw {
            Some(raw) => unsafe { &*raw.as_ptr() },
            None => &[],
        }
    }

    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match self.raw {
            Some(raw) => unsafe { &mut *raw.as_ptr() },
            None => &mut [],
        }
    }
}

impl<T> OwnedBuffer<T> where T: Default {
    /// Allocates `extent` default values. Zero extent allocates nothing.
    ///
    /// Aborts through `std::alloc::handle_alloc_error` if the allocator gives up.
    pub fn with_extent(extent: usize) -> OwnedBuffer<T> {
        match OwnedBuffer::try_with_extent(extent) {
            Ok(buffer) => buffer,
            Err(e) => alloc_failure(e),
        }
    }

    /// Same as `with_extent`, but reports allocation failure as a value.
    pub fn try_with_extent(extent: usize) -> Result<OwnedBuffer<T>, AllocError> {
        if extent == 0 {
            return Ok(OwnedBuffer::new());
        }

        let layout = Layout::array::<T>(extent).map_err(|_| AllocError::CapacityOverflow)?;

        // zero-sized and nothing to drop: one default stands for every slot
        if layout.size() == 0 && !std::mem::needs_drop::<T>() {
            std::mem::forget(T::default());
            trace!(target: "simplevec::buffer", "allocate zero-sized extent {}", extent);
            return Ok(OwnedBuffer {
                raw: Some(NonNull::slice_from_raw_parts(NonNull::dangling(), extent)),
                _owns: PhantomData,
            });
        }

        let base = if layout.size() == 0 {
            NonNull::dangling()
        } else {
            let ptr = unsafe { alloc::alloc(layout) } as *mut T;
            NonNull::new(ptr).ok_or(AllocError::AllocFailed { layout })?
        };

        // if a `default` panics, the guard drops what was built and frees the memory
        let mut guard = Allocation { base, layout, initialized: 0 };
        while guard.initialized < extent {
            unsafe { base.as_ptr().add(guard.initialized).write(T::default()) };
            guard.initialized += 1;
        }
        std::mem::forget(guard);

        trace!(target: "simplevec::buffer", "allocate buffer {:?} extent {}", base, extent);

        Ok(OwnedBuffer {
            raw: Some(NonNull::slice_from_raw_parts(base, extent)),
            _owns: PhantomData,
        })
    }
}

impl<T> Default for OwnedBuffer<T> {
    fn default() -> OwnedBuffer<T> {
        OwnedBuffer::new()
    }
}

impl<T> Index<usize> for OwnedBuffer<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for OwnedBuffer<T> {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T> std::fmt::Debug for OwnedBuffer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OwnedBuffer")
            .field("ptr", &self.as_ptr())
            .field("extent", &self.as_slice().len())
            .finish()
    }
}

impl<T> Drop for OwnedBuffer<T> {
    fn drop(&mut self) {
        if let Some(raw) = self.raw.take() {
            trace!(target: "simplevec::buffer", "release buffer {:?} extent {}", raw, raw.len());
            let layout = Layout::array::<T>(raw.len()).expect("layout was valid at allocation");
            std::mem::drop(Allocation {
                base: raw.cast::<T>(),
                layout,
                initialized: raw.len(),
            });
        }
    }
}

/// Array memory with the first `initialized` slots holding live values.
/// Dropping it drops those values and frees the memory.
struct Allocation<T> {
    base: NonNull<T>,
    layout: Layout,
    initialized: usize,
}

impl<T> Drop for Allocation<T> {
    fn drop(&mut self) {
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.base.as_ptr(), self.initialized));
            if self.layout.size() != 0 {
                alloc::dealloc(self.base.as_ptr() as *mut u8, self.layout);
            }
        }
    }
}

/// Turns a failed allocation into the same outcome the standard collections have.
pub(crate) fn alloc_failure(error: AllocError) -> ! {
    match error {
        AllocError::AllocFailed { layout } => alloc::handle_alloc_error(layout),
        AllocError::CapacityOverflow => panic!("capacity overflow"),
    }
}
