/*!

A growable array with value semantics over one exclusively-owned heap buffer.

`OwnedBuffer` owns the allocation: a single owner, transferred by move, released on drop.
`SimpleVec` wraps one `OwnedBuffer`, tracks how many of its slots are in use, and grows it
geometrically when they run out.

```
use simplevec::{reserve, simple_vec, SimpleVec};

let mut v = simple_vec![10, 20, 30];
v.erase(1);
v.insert(0, 5);
assert_eq!(v, [5, 10, 30]);

let mut w: SimpleVec<u8> = SimpleVec::with_reserve(reserve(5));
for i in 0..5 {
    w.push_back(i);
}
assert_eq!(5, w.capacity());
```

Enable the `logging` feature to trace allocations through the `log` crate.

*/

#[macro_use]
mod logging;
mod error;
mod buffer;
mod reserve;
mod vector;
mod cmp;
mod iter;

pub use error::{OutOfRange, AllocError, InsertError};
pub use buffer::OwnedBuffer;
pub use reserve::{reserve, ReserveHint};
pub use vector::SimpleVec;
pub use iter::IntoIter;

#[cfg(test)]
pub mod dropflag;
