use circbuf::CircBuf;

#[test]
fn test_iter_follows_logical_order() {
    let mut circle = CircBuf::from(vec![1, 2, 3, 4]);
    circle += 3;

    let collected: Vec<_> = circle.iter().copied().collect();
    assert_eq!(collected, vec![4, 1, 2, 3]);
}

#[test]
fn test_iter_exact_size() {
    let circle = CircBuf::from(vec![1, 2, 3]);
    let mut iter = circle.iter();
    assert_eq!(iter.len(), 3);
    iter.next();
    assert_eq!(iter.len(), 2);
    iter.next();
    iter.next();
    assert_eq!(iter.len(), 0);
    assert_eq!(iter.next(), None);
}

#[test]
fn test_iter_empty() {
    let circle: CircBuf<u8> = CircBuf::new();
    assert_eq!(circle.iter().count(), 0);
    assert_eq!(circle.iter().cycle().next(), None);
}

#[test]
fn test_cycle_repeats_period() {
    let mut circle = CircBuf::new();
    circle.insert('c');
    circle.insert('b');
    circle.insert('a');

    let repeated: String = circle.iter().cycle().take(7).collect();
    assert_eq!(repeated, "abcabca");
}

#[test]
fn test_for_loop_over_reference() {
    let mut circle = CircBuf::from(vec![1, 2, 3]);
    circle -= 1;

    let mut sum = 0;
    let mut order = Vec::new();
    for value in &circle {
        sum += value;
        order.push(*value);
    }
    assert_eq!(sum, 6);
    assert_eq!(order, vec![3, 1, 2]);
}

#[test]
fn test_equality_compares_logical_view() {
    let mut rotated = CircBuf::from(vec![3, 1, 2]);
    rotated += 1;
    let plain = CircBuf::from(vec![1, 2, 3]);

    assert_eq!(rotated, plain);
    assert_eq!(format!("{rotated:?}"), "[1, 2, 3]");
}
