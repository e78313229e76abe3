use crate::buffer::OwnedBuffer;
use crate::SimpleVec;
use std::iter::{FromIterator, FusedIterator};

/// Owning iterator over the elements of a `SimpleVec`.
///
/// Values are moved out by swapping in `T::default()`; whatever the buffer holds when
/// the iterator is dropped (unvisited elements and leftover slots) is dropped with it.
pub struct IntoIter<T> {
    items: OwnedBuffer<T>,
    front: usize,
    back: usize,
}

impl<T> IntoIter<T> {
    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        &self.items.as_slice()[self.front..self.back]
    }
}

impl<T> Iterator for IntoIter<T> where T: Default {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        let item = std::mem::take(&mut self.items[self.front]);
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> where T: Default {
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(std::mem::take(&mut self.items[self.back]))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> where T: Default {
    fn len(&self) -> usize {
        self.back - self.front
    }
}

impl<T> FusedIterator for IntoIter<T> where T: Default {}

impl<T> std::fmt::Debug for IntoIter<T> where T: std::fmt::Debug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> IntoIterator for SimpleVec<T> where T: Default {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let (items, back) = self.into_buffer();
        IntoIter { items, front: 0, back }
    }
}

impl<'a, T> IntoIterator for &'a SimpleVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> std::slice::Iter<'a, T> {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SimpleVec<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> std::slice::IterMut<'a, T> {
        self.as_mut_slice().iter_mut()
    }
}

/// Collects by repeated `push_back`, reserving the iterator's lower size bound up front.
/// Starting from empty, an exact-size iterator gives an exactly sized vector.
impl<T> FromIterator<T> for SimpleVec<T> where T: Default {
    fn from_iter<I: IntoIterator<Item=T>>(iter: I) -> SimpleVec<T> {
        let mut v = SimpleVec::new();
        v.extend(iter);
        v
    }
}

impl<T> Extend<T> for SimpleVec<T> where T: Default {
    fn extend<I: IntoIterator<Item=T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let needed = self.len().saturating_add(lower);
        if needed > self.capacity() {
            // never below doubling, so repeated small extends stay amortized
            self.reserve(needed.max(self.capacity().saturating_mul(2)));
        }
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T> Extend<&'a T> for SimpleVec<T> where T: Copy + Default + 'a {
    fn extend<I: IntoIterator<Item=&'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}
