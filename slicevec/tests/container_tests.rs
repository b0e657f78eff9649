use slicevec::SliceVec;

#[test]
fn test_push_pop() {
    let mut v = SliceVec::new();
    assert!(v.is_empty());

    v.push(1);
    v.push(2);
    assert_eq!(v.len(), 2);
    assert_eq!(v.last(), Some(&2));

    assert_eq!(v.pop(), Some(2));
    assert_eq!(v.pop(), Some(1));
    assert_eq!(v.pop(), None);
}

#[test]
fn test_resize_and_reserve() {
    let mut v = SliceVec::with_capacity(2);
    assert!(v.capacity() >= 2);

    v.resize(3, 'x');
    assert_eq!(v.as_slice(), &['x', 'x', 'x']);

    v.resize(1, 'y');
    assert_eq!(v.as_slice(), &['x']);

    v.reserve(100);
    assert!(v.capacity() >= 101);
}

#[test]
fn test_clear() {
    let mut v = SliceVec::from(vec![1, 2, 3]);
    v.clear();
    assert!(v.is_empty());
    assert_eq!(v.first(), None);
}

#[test]
fn test_with_len() {
    let v: SliceVec<String> = SliceVec::with_len(2);
    assert_eq!(v.len(), 2);
    assert!(v[-1].is_empty());
}

#[test]
fn test_iteration() {
    let mut v: SliceVec<i32> = vec![1, 2, 3].into();

    for value in &mut v {
        *value *= 10;
    }
    let borrowed: Vec<_> = (&v).into_iter().copied().collect();
    assert_eq!(borrowed, vec![10, 20, 30]);

    let owned: Vec<i32> = v.into_iter().rev().collect();
    assert_eq!(owned, vec![30, 20, 10]);
}

#[test]
fn test_extend_and_collect() {
    let mut v: SliceVec<u8> = (0..3).collect();
    v.extend([3, 4]);
    assert_eq!(v.as_slice(), &[0, 1, 2, 3, 4]);

    let back: Vec<u8> = v.into();
    assert_eq!(back, vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_extend_reserves_from_size_hint() {
    let mut v: SliceVec<u64> = SliceVec::new();
    v.extend(0..1000);

    assert_eq!(v.len(), 1000);
    assert_eq!(v[-1], 999);
    // One push at a time would have doubled its way up to 1024
    assert!(v.capacity() < 1024);
}
