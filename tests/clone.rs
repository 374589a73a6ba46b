use sparsebitmap::SparseBitmap;

#[test]
#[allow(clippy::redundant_clone)]
fn clustered() {
    let original = SparseBitmap::from_sorted(0..2_000).unwrap();
    let clone = original.clone();
    assert_eq!(clone, original);
}

#[test]
#[allow(clippy::redundant_clone)]
fn scattered() {
    let original = SparseBitmap::from_sorted(
        (0..2_000).chain(1_000_000..1_002_000).chain(2_000_000..2_001_000),
    )
    .unwrap();
    let clone = original.clone();
    assert_eq!(clone, original);
}

#[test]
fn clone_is_independent_of_source() {
    let mut original = SparseBitmap::from_sorted([1, 2, 3]).unwrap();
    let clone = original.clone();
    original.set(100).unwrap();
    assert_ne!(original, clone);
    assert_eq!(clone.to_array(), vec![1, 2, 3]);
}
