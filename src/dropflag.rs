//! This module is for testing only

use std::cell::Cell;
use std::rc::Rc;

/// Shared counter of how many `Tracked` values have been dropped.
#[derive(Clone, Default)]
pub struct DropCount(Rc<Cell<usize>>);

impl DropCount {
    pub fn get(&self) -> usize {
        self.0.get()
    }
}

/// Element that bumps its `DropCount` when dropped.
///
/// `Tracked::default()` is not attached to any counter, so the default fill
/// a buffer does on allocation stays invisible to the count.
#[derive(Default)]
pub struct Tracked {
    pub dropflag: Option<DropCount>,
}

impl Tracked {
    pub fn new(count: &DropCount) -> Tracked {
        Tracked { dropflag: Some(count.clone()) }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        if let Some(count) = &self.dropflag {
            count.0.set(count.0.get() + 1);
        }
    }
}

#[test]
fn dropflag() {
    let count = DropCount::default();
    let tracked = Tracked::new(&count);
    let untracked = Tracked::default();
    assert_eq!(0, count.get());
    std::mem::drop(tracked);
    std::mem::drop(untracked);
    assert_eq!(1, count.get());
}
