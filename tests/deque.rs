use blockdeque::{CapacityError, Deque, BLOCK_LEN};

/// "ab", BLOCK_LEN / 2 and BLOCK_LEN / 2 + 1 distinct bytes: the last one no longer fits
/// on one side of the centre.
fn cases() -> Vec<Vec<u8>> {
    let many: Vec<u8> = (0..=BLOCK_LEN as u8 / 2).map(|i| b'0' + i).collect();
    vec![b"ab".to_vec(), many[..BLOCK_LEN / 2].to_vec(), many]
}

fn contents<T: Copy>(d: &Deque<T>) -> Vec<T> {
    d.iter().copied().collect()
}

fn assert_empty<T: std::fmt::Debug + PartialEq>(d: &mut Deque<T>) {
    assert_eq!(d.len(), 0);
    assert!(d.is_empty());
    assert_eq!(d.capacity(), BLOCK_LEN);
    assert_eq!(d.pop_back(), None);
    assert_eq!(d.pop_front(), None);
    assert_eq!(d.iter().next(), None);
}

#[test]
fn zero_bound_rejects_everything() {
    let mut d = Deque::with_max_len(0);
    assert_eq!(d.push_back(0u8).map_err(CapacityError::into_inner), Err(0));
    assert_eq!(d.push_front(1u8).map_err(CapacityError::into_inner), Err(1));
    assert!(d.extend_back([2u8]).is_err());
    assert!(d.extend_front([3u8]).is_err());
    assert!(d.is_full());
    assert_empty(&mut d);
}

#[test]
fn rejection_reports_the_bound() {
    let mut d = Deque::with_max_len(3);
    d.extend_back([1, 2, 3]).unwrap();
    let err = d.push_front(4).unwrap_err();
    assert_eq!(err.max_len(), 3);
    assert_eq!(*err.element(), 4);
    assert_eq!(err.to_string(), "deque is at its maximum length of 3");
    assert_eq!(contents(&d), [1, 2, 3]);
}

#[test]
fn single_push_pop_from_either_side() {
    for values in cases() {
        let mut d = Deque::with_max_len(values.len());
        assert_empty(&mut d);

        d.rotate(1);
        assert_empty(&mut d);

        let mut c = d.clone();
        assert_empty(&mut c);

        d.push_back(values[0]).unwrap();
        assert_eq!(d.pop_back(), Some(values[0]));
        assert_empty(&mut d);

        d.push_front(values[0]).unwrap();
        assert_eq!(d.pop_front(), Some(values[0]));
        assert_empty(&mut d);
    }
}

#[test]
fn extend_back_then_pop_both_ways() {
    for values in cases() {
        let mut d = Deque::with_max_len(values.len());
        d.extend_back(values.iter().copied()).unwrap();
        assert_eq!(d.len(), values.len());
        assert_eq!(contents(&d), values);

        let mut c = d.clone();
        for &v in values.iter().rev() {
            assert_eq!(d.pop_back(), Some(v));
        }
        assert_empty(&mut d);

        // the clone kept its own copy
        assert_eq!(c.len(), values.len());
        assert_eq!(contents(&c), values);
        for &v in &values {
            assert_eq!(c.pop_front(), Some(v));
        }
        assert_empty(&mut c);
    }
}

#[test]
fn extend_front_reverses() {
    for values in cases() {
        let mut d = Deque::with_max_len(values.len());
        d.extend_front(values.iter().copied()).unwrap();
        let reversed: Vec<u8> = values.iter().rev().copied().collect();
        assert_eq!(contents(&d), reversed);

        let mut c = d.clone();
        for &v in values.iter().rev() {
            assert_eq!(d.pop_front(), Some(v));
        }
        for &v in &values {
            assert_eq!(c.pop_back(), Some(v));
        }
        assert_empty(&mut d);
        assert_empty(&mut c);
    }
}

#[test]
fn clear_returns_to_a_single_block() {
    for values in cases() {
        let mut d = Deque::with_max_len(values.len());
        d.extend_back(values.iter().copied()).unwrap();
        d.clear();
        assert_empty(&mut d);
    }
}

#[test]
fn both_ends_share_the_bound() {
    for values in cases() {
        let mut d = Deque::with_max_len(2 * values.len());
        d.extend_back(values.iter().copied()).unwrap();
        d.extend_front(values.iter().copied()).unwrap();
        assert!(d.is_full());
        assert!(d.push_back(0).is_err());
        assert!(d.push_front(0).is_err());

        for &v in values.iter().rev() {
            assert_eq!(d.pop_back(), Some(v));
        }
        for &v in &values {
            assert_eq!(d.pop_back(), Some(v));
        }
        assert_empty(&mut d);
    }
}

#[test]
fn rotate_matches_manual_moves() {
    for values in cases() {
        let mut d = Deque::new();
        d.extend_back(values.iter().copied()).unwrap();

        let mut c = d.clone();
        d.rotate(1);
        let v = c.pop_back().unwrap();
        c.push_front(v).unwrap();
        assert_eq!(contents(&d), contents(&c));

        let mut c = d.clone();
        d.rotate(-1);
        let v = c.pop_front().unwrap();
        c.push_back(v).unwrap();
        assert_eq!(contents(&d), contents(&c));
    }
}

#[test]
fn rotate_moves_blocks_of_elements() {
    let mut d: Deque<u32> = (0..200).collect();
    d.rotate(70);
    assert!(d.iter().copied().eq((130..200).chain(0..130)));
    d.rotate(-70);
    assert!(d.iter().copied().eq(0..200));
    d.rotate(200 * 3 + 1);
    assert_eq!(d.front(), Some(&199));
    assert_eq!(d.back(), Some(&198));
}

#[test]
fn rotate_on_a_full_bounded_deque() {
    let mut d = Deque::with_max_len(3);
    d.extend_back([1, 2, 3]).unwrap();
    d.rotate(2);
    assert_eq!(d, [2, 3, 1]);
    d.rotate(-1);
    assert_eq!(d, [3, 1, 2]);
}

#[test]
fn two_bytes() {
    let mut d = Deque::new();
    d.push_back(b'a').unwrap();
    d.push_back(b'b').unwrap();
    assert_eq!(d.capacity(), 64);
    assert_eq!(d.pop_back(), Some(b'b'));
    assert_eq!(d.pop_back(), Some(b'a'));
    assert_eq!(d.len(), 0);
}

#[test]
fn sixty_five_values_need_a_second_block() {
    let mut d = Deque::new();
    for i in 0..65u32 {
        d.push_back(i).unwrap();
        assert!(d.len() <= d.capacity());
    }
    assert_eq!(d.capacity(), 128);
    for i in (0..65u32).rev() {
        assert_eq!(d.pop_back(), Some(i));
        assert_eq!(d.capacity() % BLOCK_LEN, 0);
    }
    assert_eq!(d.capacity(), 64);
    assert_eq!(d.len(), 0);
}

#[test]
fn stack_order_per_side() {
    let mut d = Deque::new();
    for i in 0..100 {
        d.push_back(i).unwrap();
        d.push_front(-i).unwrap();
    }
    for i in (0..100).rev() {
        assert_eq!(d.pop_front(), Some(-i));
        assert_eq!(d.pop_back(), Some(i));
    }
    assert!(d.is_empty());
}

#[test]
fn partial_extend_keeps_what_fit() {
    let mut d = Deque::with_max_len(5);
    d.push_back(0).unwrap();

    let mut source = 1..10;
    let err = d.extend_back(&mut source).unwrap_err();
    assert_eq!(err.into_inner(), 5);
    assert_eq!(d, [0, 1, 2, 3, 4]);
    // nothing past the rejected element was pulled from the source
    assert_eq!(source.next(), Some(6));

    assert!(d.extend_back(std::iter::empty()).is_ok());
    let _ = d.pop_back();
    assert_eq!(d.extend_front([9, 8]).map_err(|e| e.into_inner()), Err(8));
    assert_eq!(d, [9, 0, 1, 2, 3]);
}

#[test]
fn random_access() {
    let mut d = Deque::new();
    d.extend_back(0..150).unwrap();
    d.extend_front((150..300).rev()).unwrap();
    // long enough that get walks the chain from both ends
    for (i, v) in d.iter().enumerate() {
        assert_eq!(d.get(i), Some(v));
        assert_eq!(d[i], *v);
    }
    assert_eq!(d.get(d.len()), None);
    assert_eq!(d.front(), Some(&150));
    assert_eq!(d.back(), Some(&149));
    assert!(d.contains(&299));
    assert!(!d.contains(&300));
}

#[test]
fn iteration_is_restartable_and_double_ended() {
    let d: Deque<_> = (0..300).collect();
    assert_eq!(d.iter().len(), 300);
    assert!(d.iter().rev().copied().eq((0..300).rev()));
    assert!(d.iter().copied().eq(0..300));

    let mut it = d.iter();
    for i in 0..150 {
        assert_eq!(it.next(), Some(&i));
        assert_eq!(it.next_back(), Some(&(299 - i)));
    }
    assert_eq!(it.next(), None);
    assert_eq!(it.next_back(), None);

    // stopping early leaves the deque alone
    assert_eq!(d.iter().next(), Some(&0));
    assert_eq!(d.len(), 300);
    assert_eq!(d.iter().enumerate().nth(70), Some((70, &70)));
}

#[test]
fn owned_iteration_drops_cleanly() {
    let d: Deque<String> = (0..200).map(|i| i.to_string()).collect();
    let mut it = d.clone().into_iter();
    assert_eq!(it.len(), 200);
    assert_eq!(it.next().as_deref(), Some("0"));
    assert_eq!(it.next_back().as_deref(), Some("199"));
    drop(it);

    let back: Vec<String> = d.into_iter().rev().collect();
    assert_eq!(back.first().map(String::as_str), Some("199"));
    assert_eq!(back.len(), 200);
}

#[test]
fn clone_is_independent() {
    let mut d: Deque<Vec<u8>> = Deque::with_max_len(100);
    d.extend_back((0..80).map(|i| vec![i])).unwrap();
    let c = d.clone();
    d.rotate(13);
    d.clear();
    d.push_back(vec![42]).unwrap();
    assert_eq!(c.len(), 80);
    assert!(c.iter().enumerate().all(|(i, v)| v == &[i as u8]));
    assert_eq!(c.max_len(), Some(100));
}

#[test]
fn equality_ignores_layout() {
    let a: Deque<_> = (0..100).collect();
    let mut b = Deque::with_max_len(100);
    b.extend_front((0..100).rev()).unwrap();
    assert_eq!(a, b);
    assert_eq!(format!("{:?}", Deque::from([1, 2, 3])), "[1, 2, 3]");
}

#[test]
#[should_panic(expected = "maximum length of 2")]
fn extend_trait_panics_when_full() {
    let mut d: Deque<i32> = Deque::with_max_len(2);
    d.extend([1, 2, 3]);
}
