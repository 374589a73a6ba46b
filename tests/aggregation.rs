use sparsebitmap::{and, or, xor, MultiOps, SparseBitmap};

fn bitmap(positions: impl IntoIterator<Item = u32>) -> SparseBitmap {
    SparseBitmap::from_sorted(positions).unwrap()
}

#[test]
fn and_of_many_bitmaps_matches_pairwise_fold() {
    let a = bitmap([1, 2, 3, 100, 200]);
    let b = bitmap([2, 3, 100, 300]);
    let c = bitmap([2, 100, 150]);
    let d = bitmap([2, 100, 999]);

    let expected = &(&(&a & &b) & &c) & &d;
    let scheduled = and([a, b, c, d]).unwrap();
    assert_eq!(scheduled, expected);
}

#[test]
fn or_of_many_bitmaps_matches_pairwise_fold() {
    let a = bitmap([1, 100]);
    let b = bitmap([2, 150]);
    let c = bitmap([3, 200]);
    let d = bitmap([4, 250]);

    let expected = &(&(&a | &b) | &c) | &d;
    let scheduled = or([a, b, c, d]);
    assert_eq!(scheduled, expected);
}

#[test]
fn xor_of_two_bitmaps_is_a_real_xor_not_an_or() {
    let a = bitmap([1, 2, 100]);
    let b = bitmap([2, 100, 200]);
    // A position set in both inputs must NOT survive a two-input xor.
    assert_eq!(xor([a, b]).to_array(), vec![1, 200]);
}

#[test]
fn zero_inputs() {
    assert!(and(Vec::<SparseBitmap>::new()).is_err());
    assert!(or(Vec::<SparseBitmap>::new()).is_empty());
    assert!(xor(Vec::<SparseBitmap>::new()).is_empty());
}

#[test]
fn multiops_trait_matches_free_functions() {
    let a = bitmap([1, 2, 100]);
    let b = bitmap([2, 100, 200]);
    assert_eq!([a.clone(), b.clone()].or(), or([a.clone(), b.clone()]));
    assert_eq!([a.clone(), b.clone()].and().unwrap(), and([a.clone(), b.clone()]).unwrap());
    assert_eq!([a.clone(), b.clone()].xor(), xor([a, b]));
}
