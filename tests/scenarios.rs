use sparsebitmap::SparseBitmap;

fn bitmap(positions: impl IntoIterator<Item = u32>) -> SparseBitmap {
    SparseBitmap::from_sorted(positions).unwrap()
}

#[test]
fn scenario_round_trip() {
    let a = bitmap([1, 2, 100, 150, 1000, 123456]);
    assert_eq!(a.to_array(), vec![1, 2, 100, 150, 1000, 123456]);
}

#[test]
fn scenario_and() {
    let a = bitmap([1, 2, 100, 150, 1000, 123456]);
    let b = bitmap([1, 2, 3, 1000, 123456, 1234567]);
    assert_eq!((&a & &b).to_array(), vec![1, 2, 1000, 123456]);
}

#[test]
fn scenario_or() {
    let a = bitmap([1, 2, 100, 150, 1000, 123456]);
    let b = bitmap([1, 2, 3, 1000, 123456, 1234567]);
    assert_eq!((&a | &b).to_array(), vec![1, 2, 3, 100, 150, 1000, 123456, 1234567]);
}

#[test]
fn scenario_xor() {
    let a = bitmap([1, 2, 100, 150, 1000, 123456]);
    let b = bitmap([1, 2, 3, 1000, 123456, 1234567]);
    assert_eq!((&a ^ &b).to_array(), vec![3, 100, 150, 1234567]);
}

#[test]
fn scenario_single_intersection_point_over_unequal_cardinalities() {
    // L1 = {4, 8, ..., 160}, L2 = {100, 200, ..., 4000}; both have 40 elements.
    let l1 = bitmap((1..=40).map(|i| i * 4));
    let l2 = bitmap((1..=40).map(|i| i * 100));

    let merge_driven = (&l1 & &l2).to_array();
    assert_eq!(merge_driven, vec![100]);

    let skip_driven = sparsebitmap::materialize(sparsebitmap::and2by2(l1.skip_iter(), l2.skip_iter()));
    assert_eq!(skip_driven.to_array(), merge_driven);

    let nary = sparsebitmap::materialize(
        sparsebitmap::skip_ops::and(vec![Box::new(l1.skip_iter()), Box::new(l2.skip_iter())]).unwrap(),
    );
    assert_eq!(nary.to_array(), merge_driven);
}

#[test]
fn scenario_empty_is_the_identity_for_or_and_annihilator_for_and() {
    let empty = SparseBitmap::new();
    let b = bitmap([1, 2, 3]);
    assert_eq!((&empty | &b).to_array(), b.to_array());
    assert_eq!((&empty & &b).to_array(), Vec::<u32>::new());
}
