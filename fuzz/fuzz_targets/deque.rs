#![no_main]
use std::collections::VecDeque;

use arbitrary::Arbitrary;
use blockdeque::{Deque, BLOCK_LEN};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Op {
    Back,
    Clear,
    Clone,
    Contains(i32),
    Equals,
    ExtendBack(Vec<i32>),
    ExtendFront(Vec<i32>),
    Front,
    Get(usize),
    IsEmpty,
    Iter,
    Len,
    PopBack,
    PopFront,
    PushBack(i32),
    PushFront(i32),
    Rotate(isize),
    Swap,
}

#[derive(Arbitrary, Debug)]
struct Input {
    max_len: Option<u16>,
    ops: Vec<Op>,
}

const MAX_LEN: usize = 1000000;

fuzz_target!(|input: Input| { fuzz(input.max_len.map(usize::from), &input.ops) });

/// `VecDeque` with the bound checked by hand.
struct Model {
    items: VecDeque<i32>,
    max_len: Option<usize>,
}

impl Model {
    fn push(&mut self, val: i32, back: bool) -> bool {
        if self.items.len() >= self.max_len.unwrap_or(MAX_LEN) {
            return false;
        }
        if back {
            self.items.push_back(val)
        } else {
            self.items.push_front(val)
        }
        true
    }
}

fn fuzz(max_len: Option<usize>, data: &[Op]) {
    let new = || match max_len {
        Some(m) => Deque::with_max_len(m),
        None => Deque::with_max_len(MAX_LEN),
    };
    let (mut d1, mut d2) = (new(), new());
    let mut v1 = Model { items: VecDeque::new(), max_len };
    let mut v2 = Model { items: VecDeque::new(), max_len };

    for op in data {
        match op {
            Op::Back => {
                assert_eq!(d1.back(), v1.items.back());
                assert_eq!(d2.back(), v2.items.back());
            }
            Op::Clear => {
                d1.clear();
                v1.items.clear();
                assert_eq!(d1.capacity(), BLOCK_LEN);
            }
            Op::Clone => {
                d2 = d1.clone();
                v2.items = v1.items.clone();
                assert_eq!(d1.capacity(), d2.capacity());
            }
            Op::Contains(i) => {
                assert_eq!(d1.contains(i), v1.items.contains(i));
                assert_eq!(d2.contains(i), v2.items.contains(i));
            }
            Op::Equals => {
                assert!(d1.iter().eq(v1.items.iter()));
                assert!(d2.iter().eq(v2.items.iter()));
            }
            Op::ExtendBack(vals) => {
                let expected = vals.iter().all(|&v| v1.push(v, true));
                assert_eq!(d1.extend_back(vals.iter().copied()).is_ok(), expected);
            }
            Op::ExtendFront(vals) => {
                let expected = vals.iter().all(|&v| v2.push(v, false));
                assert_eq!(d2.extend_front(vals.iter().copied()).is_ok(), expected);
            }
            Op::Front => {
                assert_eq!(d1.front(), v1.items.front());
                assert_eq!(d2.front(), v2.items.front());
            }
            Op::Get(i) => {
                assert_eq!(d1.get(*i), v1.items.get(*i));
                assert_eq!(d2.get(*i), v2.items.get(*i));
                if !v1.items.is_empty() {
                    let i1 = *i % v1.items.len();
                    assert_eq!(d1.get(i1), v1.items.get(i1));
                }
                if !v2.items.is_empty() {
                    let i2 = *i % v2.items.len();
                    assert_eq!(d2.get(i2), v2.items.get(i2));
                }
            }
            Op::IsEmpty => {
                assert_eq!(d1.is_empty(), v1.items.is_empty());
                assert_eq!(d2.is_empty(), v2.items.is_empty());
            }
            Op::Iter => {
                let mut d1_iter = d1.iter();
                let mut v1_iter = v1.items.iter();
                while v1_iter.len() > 0 {
                    if fastrand::bool() {
                        assert_eq!(d1_iter.next(), v1_iter.next());
                    } else {
                        assert_eq!(d1_iter.next_back(), v1_iter.next_back());
                    }
                }
                assert_eq!(d1_iter.next(), None);

                let mut d2_iter = d2.iter();
                let mut v2_iter = v2.items.iter();
                while v2_iter.len() > 0 {
                    if fastrand::bool() {
                        assert_eq!(d2_iter.next(), v2_iter.next());
                    } else {
                        assert_eq!(d2_iter.next_back(), v2_iter.next_back());
                    }
                }
                assert_eq!(d2_iter.next_back(), None);
            }
            Op::Len => {
                assert_eq!(d1.len(), v1.items.len());
                assert_eq!(d2.len(), v2.items.len());
                assert!(d1.len() <= d1.capacity() && d1.capacity() % BLOCK_LEN == 0);
                assert!(d2.len() <= d2.capacity() && d2.capacity() % BLOCK_LEN == 0);
            }
            Op::PopBack => {
                assert_eq!(d1.pop_back(), v1.items.pop_back());
                assert_eq!(d2.pop_back(), v2.items.pop_back());
            }
            Op::PopFront => {
                assert_eq!(d1.pop_front(), v1.items.pop_front());
                assert_eq!(d2.pop_front(), v2.items.pop_front());
            }
            &Op::PushBack(i) => {
                assert_eq!(d1.push_back(i).is_ok(), v1.push(i, true));
                assert_eq!(d2.push_back(i).is_ok(), v2.push(i, true));
            }
            &Op::PushFront(i) => {
                assert_eq!(d1.push_front(i).is_ok(), v1.push(i, false));
                assert_eq!(d2.push_front(i).is_ok(), v2.push(i, false));
            }
            &Op::Rotate(n) => {
                d1.rotate(n);
                d2.rotate(n);
                for v in [&mut v1.items, &mut v2.items] {
                    if v.is_empty() {
                        continue;
                    }
                    let k = n.unsigned_abs() % v.len();
                    if n > 0 {
                        v.rotate_right(k);
                    } else {
                        v.rotate_left(k);
                    }
                }
            }
            Op::Swap => {
                std::mem::swap(&mut d1, &mut d2);
                std::mem::swap(&mut v1, &mut v2);
            }
        }
    }
}
