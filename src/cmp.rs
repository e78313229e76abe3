use crate::SimpleVec;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

// Only `[0, len)` takes part in comparison; capacity and leftover slots never do.

impl<T, U> PartialEq<SimpleVec<U>> for SimpleVec<T> where T: PartialEq<U> {
    fn eq(&self, other: &SimpleVec<U>) -> bool {
        self.len() == other.len() && self.as_slice() == other.as_slice()
    }
}

impl<T> Eq for SimpleVec<T> where T: Eq {}

/// Lexicographic, like slices.
impl<T> PartialOrd for SimpleVec<T> where T: PartialOrd {
    fn partial_cmp(&self, other: &SimpleVec<T>) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T> Ord for SimpleVec<T> where T: Ord {
    fn cmp(&self, other: &SimpleVec<T>) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T> Hash for SimpleVec<T> where T: Hash {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T, U> PartialEq<[U]> for SimpleVec<T> where T: PartialEq<U> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U> PartialEq<&[U]> for SimpleVec<T> where T: PartialEq<U> {
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for SimpleVec<T> where T: PartialEq<U> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == &other[..]
    }
}

impl<T, U> PartialEq<Vec<U>> for SimpleVec<T> where T: PartialEq<U> {
    fn eq(&self, other: &Vec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

#[cfg(test)]
mod cmp_tests {
    use crate::{reserve, simple_vec, SimpleVec};
    use std::collections::HashSet;

    #[test]
    fn equal_needs_same_len_and_elements() {
        assert_eq!(simple_vec![1, 2, 3], simple_vec![1, 2, 3]);
        assert_ne!(simple_vec![1, 2, 3], simple_vec![1, 2]);
        assert_ne!(simple_vec![1, 2, 3], simple_vec![1, 2, 4]);
        assert_eq!(SimpleVec::<i32>::new(), SimpleVec::<i32>::new());
    }

    #[test]
    fn capacity_and_leftovers_are_ignored() {
        let mut a = SimpleVec::with_reserve(reserve(10));
        a.push_back(1);
        a.push_back(2);
        a.push_back(3);
        a.pop_back();
        let b = simple_vec![1, 2];
        assert_eq!(a, b);
        assert_ne!(a.capacity(), b.capacity());
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(simple_vec![1, 2, 3] < simple_vec![1, 2, 4]);
        assert!(simple_vec![1, 2] < simple_vec![1, 2, 3]);
        assert!(!(simple_vec![1, 2, 3] < simple_vec![1, 2, 3]));
        assert!(simple_vec![1, 2, 3] <= simple_vec![1, 2, 3]);
        assert!(simple_vec![2] > simple_vec![1, 9, 9]);
        assert!(simple_vec![1, 2, 3] >= simple_vec![1, 2]);
        assert!(SimpleVec::<i32>::new() < simple_vec![0]);
    }

    #[test]
    fn partial_ordering_with_nan() {
        let a = simple_vec![1.0, f64::NAN];
        let b = simple_vec![1.0, 2.0];
        assert_eq!(None, a.partial_cmp(&b));
        assert!(!(a < b) && !(a > b));
    }

    #[test]
    fn compares_with_std_sequences() {
        let v = simple_vec![1, 2, 3];
        assert_eq!(v, vec![1, 2, 3]);
        assert_eq!(v, [1, 2, 3]);
        assert_eq!(v, &[1, 2, 3][..]);
    }

    #[test]
    fn equal_vectors_hash_alike() {
        let mut a = SimpleVec::with_reserve(reserve(16));
        a.push_back(4);
        a.push_back(5);
        let mut set = HashSet::new();
        set.insert(simple_vec![4, 5]);
        assert!(set.contains(&a));
    }
}
