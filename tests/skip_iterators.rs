use sparsebitmap::{skip_ops, SkipIterator, SparseBitmap};

fn bitmap(positions: impl IntoIterator<Item = u32>) -> SparseBitmap {
    SparseBitmap::from_sorted(positions).unwrap()
}

#[test]
fn and2by2_matches_merge_driven_and_for_every_pair_of_scenario_bitmaps() {
    let a = bitmap([1, 2, 100, 150, 1000, 123456]);
    let b = bitmap([1, 2, 3, 1000, 123456, 1234567]);

    let merge_driven = (&a & &b).to_array();
    let skip_driven = skip_ops::materialize(skip_ops::and2by2(a.skip_iter(), b.skip_iter()));
    assert_eq!(skip_driven.to_array(), merge_driven);
}

#[test]
fn nary_kernels_agree_on_a_three_way_intersection() {
    let a = bitmap([1, 2, 3, 100, 200]);
    let b = bitmap([2, 3, 100, 300]);
    let c = bitmap([2, 100, 150]);

    let expected = (&(&a & &b) & &c).to_array();

    let boxed = |bm: &SparseBitmap| Box::new(bm.skip_iter()) as Box<dyn SkipIterator>;

    let nary = skip_ops::materialize(
        skip_ops::and(vec![boxed(&a), boxed(&b), boxed(&c)]).unwrap(),
    );
    assert_eq!(nary.to_array(), expected);

    let fast = skip_ops::materialize(
        skip_ops::fastand(vec![boxed(&a), boxed(&b), boxed(&c)]).unwrap(),
    );
    assert_eq!(fast.to_array(), expected);

    let tree = skip_ops::materialize(skip_ops::treeand(vec![boxed(&a), boxed(&b), boxed(&c)]));
    assert_eq!(tree.to_array(), expected);

    let flat = skip_ops::materialize(skip_ops::flatand(vec![boxed(&a), boxed(&b), boxed(&c)]));
    assert_eq!(flat.to_array(), expected);

    let rflat =
        skip_ops::materialize(skip_ops::reverseflatand(vec![boxed(&a), boxed(&b), boxed(&c)]));
    assert_eq!(rflat.to_array(), expected);
}

#[test]
fn and_and_fastand_reject_zero_iterators() {
    assert!(skip_ops::and(Vec::new()).is_err());
    assert!(skip_ops::fastand(Vec::new()).is_err());
}

#[test]
fn flatand_treeand_reverseflatand_accept_zero_iterators_as_empty() {
    assert!(skip_ops::materialize(skip_ops::flatand(Vec::new())).is_empty());
    assert!(skip_ops::materialize(skip_ops::treeand(Vec::new())).is_empty());
    assert!(skip_ops::materialize(skip_ops::reverseflatand(Vec::new())).is_empty());
}

#[test]
fn fastand_refuses_advance_until() {
    let a = bitmap([1, 2, 3]);
    let b = bitmap([2, 3, 4]);
    let mut fast =
        skip_ops::fastand(vec![Box::new(a.skip_iter()), Box::new(b.skip_iter())]).unwrap();
    assert!(fast.advance_until(10).is_err());
}
