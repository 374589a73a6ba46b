use sparsebitmap::SparseBitmap;

fn bitmap(positions: impl IntoIterator<Item = u32>) -> SparseBitmap {
    SparseBitmap::from_sorted(positions).unwrap()
}

#[test]
fn or() {
    let a = bitmap(1..4);
    let b = bitmap(3..6);
    let expected = bitmap(1..6);

    assert_eq!(&a | &b, expected);
    assert_eq!(&a | b.clone(), expected);
    assert_eq!(a.clone() | &b, expected);
    assert_eq!(a.clone() | b.clone(), expected);

    let mut assigned = a.clone();
    assigned |= &b;
    assigned |= b;
    assert_eq!(assigned, expected);
}

#[test]
fn and() {
    let a = bitmap(1..4);
    let b = bitmap(3..6);
    let expected = bitmap(3..4);

    assert_eq!(&a & &b, expected);
    assert_eq!(&a & b.clone(), expected);
    assert_eq!(a.clone() & &b, expected);
    assert_eq!(a.clone() & b.clone(), expected);

    let mut assigned = a.clone();
    assigned &= &b;
    assigned &= b;
    assert_eq!(assigned, expected);
}

#[test]
fn xor() {
    let a = bitmap(1..4);
    let b = bitmap(3..6);
    let expected = bitmap([1, 2, 4, 5]);

    assert_eq!(&a ^ &b, expected);
    assert_eq!(&a ^ b.clone(), expected);
    assert_eq!(a.clone() ^ &b, expected);
    assert_eq!(a.clone() ^ b.clone(), expected);

    let mut assigned = a.clone();
    assigned ^= &b;
    assigned ^= b;
    assert_eq!(assigned, expected);
}

#[test]
fn idempotence() {
    let b = bitmap([1, 2, 100, 123456]);
    assert_eq!(&b & &b, b);
    assert_eq!(&b | &b, b);
    assert!((&b ^ &b).is_empty());
}

#[test]
fn and_or_xor_over_disjoint_ranges_behave_like_set_operations() {
    let low = bitmap(0..1_000);
    let high = bitmap(1_000..2_000);

    assert!((&low & &high).is_empty());
    assert_eq!((&low | &high).cardinality(), 2_000);
    assert_eq!((&low ^ &high).cardinality(), 2_000);
}
