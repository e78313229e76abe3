use proptest::prelude::*;
use simplevec::{reserve, OutOfRange, SimpleVec};

#[derive(Debug, Clone)]
enum Op {
    Push(i32),
    Pop,
    Insert(usize, i32),
    Erase(usize),
    Resize(usize),
    Reserve(usize),
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i32>().prop_map(Op::Push),
        1 => Just(Op::Pop),
        2 => (any::<usize>(), any::<i32>()).prop_map(|(p, v)| Op::Insert(p, v)),
        2 => any::<usize>().prop_map(Op::Erase),
        1 => (0usize..64).prop_map(Op::Resize),
        1 => (0usize..64).prop_map(Op::Reserve),
        1 => Just(Op::Clear),
    ]
}

proptest! {
    #[test]
    fn behaves_like_std_vec(ops in prop::collection::vec(op(), 0..200)) {
        let mut ours = SimpleVec::new();
        let mut model: Vec<i32> = Vec::new();

        for op in ops {
            match op {
                Op::Push(v) => {
                    ours.push_back(v);
                    model.push(v);
                }
                Op::Pop => {
                    if !model.is_empty() {
                        ours.pop_back();
                        model.pop();
                    }
                }
                Op::Insert(p, v) => {
                    let p = p % (model.len() + 1);
                    prop_assert_eq!(p, ours.insert(p, v));
                    model.insert(p, v);
                }
                Op::Erase(p) => {
                    if !model.is_empty() {
                        let p = p % model.len();
                        prop_assert_eq!(p, ours.erase(p));
                        model.remove(p);
                    }
                }
                Op::Resize(n) => {
                    ours.resize(n);
                    model.resize(n, 0);
                }
                Op::Reserve(n) => {
                    let before = ours.capacity();
                    ours.reserve(n);
                    prop_assert_eq!(before.max(n), ours.capacity());
                }
                Op::Clear => {
                    ours.clear();
                    model.clear();
                }
            }
            prop_assert!(ours.len() <= ours.capacity());
            prop_assert_eq!(ours.as_slice(), model.as_slice());
        }
    }

    #[test]
    fn index_and_at_agree(items in prop::collection::vec(any::<i64>(), 0..50), probe in 0usize..100) {
        let v = SimpleVec::from(items.clone());
        for i in 0..v.len() {
            prop_assert_eq!(Ok(&v[i]), v.at(i));
        }
        if probe >= v.len() {
            prop_assert_eq!(Err(OutOfRange), v.at(probe));
        } else {
            prop_assert_eq!(Ok(&items[probe]), v.at(probe));
        }
    }

    #[test]
    fn push_back_follows_doubling(n in 1usize..300) {
        let mut v = SimpleVec::new();
        for i in 0..n {
            v.push_back(i);
        }
        prop_assert_eq!(n, v.len());
        prop_assert_eq!(n.next_power_of_two(), v.capacity());
    }

    #[test]
    fn insert_then_erase_round_trips(items in prop::collection::vec(any::<u8>(), 0..40), pos in any::<usize>(), value in any::<u8>()) {
        let mut v = SimpleVec::from(items.clone());
        let pos = pos % (items.len() + 1);
        v.insert(pos, value);
        prop_assert_eq!(items.len() + 1, v.len());
        prop_assert_eq!(value, v[pos]);
        v.erase(pos);
        prop_assert_eq!(v, items);
    }

    #[test]
    fn ordering_matches_slices(a in prop::collection::vec(0u8..4, 0..6), b in prop::collection::vec(0u8..4, 0..6)) {
        let va = SimpleVec::from(a.clone());
        let vb = SimpleVec::from(b.clone());
        prop_assert_eq!(a.cmp(&b), va.cmp(&vb));
        prop_assert_eq!(a == b, va == vb);
        prop_assert_eq!(a < b, va < vb);
        prop_assert_eq!(a <= b, va <= vb);
        prop_assert_eq!(a > b, va > vb);
        prop_assert_eq!(a >= b, va >= vb);
    }

    #[test]
    fn clone_copies_capacity(items in prop::collection::vec(any::<i32>(), 0..20), extra in 0usize..20) {
        let mut v = SimpleVec::with_reserve(reserve(items.len() + extra));
        v.extend(items.iter().copied());
        let copy = v.clone();
        prop_assert_eq!(v.capacity(), copy.capacity());
        prop_assert_eq!(v.len(), copy.len());
        prop_assert_eq!(v, copy);
    }
}
