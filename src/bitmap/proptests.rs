#![cfg(test)]

use proptest::prelude::*;

use crate::bitmap::skip_ops::{and2by2 as skip_and2by2, cardinality_of, materialize};
use crate::SparseBitmap;

/// A strategy over sorted, deduplicated `u32` positions, capped well below `u32::MAX` so that
/// `gap / 32` additions never overflow while combining two bitmaps.
fn sorted_positions(max_len: usize, max_value: u32) -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0..max_value, 0..max_len).prop_map(|mut positions| {
        positions.sort_unstable();
        positions.dedup();
        positions
    })
}

prop_compose! {
    fn arbitrary_bitmap(max_len: usize, max_value: u32)(positions in sorted_positions(max_len, max_value)) -> SparseBitmap {
        SparseBitmap::from_sorted(positions).unwrap()
    }
}

proptest! {
    #[test]
    fn round_trips_through_to_array(positions in sorted_positions(200, 1_000_000)) {
        let bitmap = SparseBitmap::from_sorted(positions.clone()).unwrap();
        prop_assert_eq!(bitmap.to_array(), positions);
    }

    #[test]
    fn cardinality_matches_position_count(positions in sorted_positions(200, 1_000_000)) {
        let bitmap = SparseBitmap::from_sorted(positions.clone()).unwrap();
        prop_assert_eq!(bitmap.cardinality() as usize, positions.len());
    }

    #[test]
    fn and_is_commutative(a in arbitrary_bitmap(100, 200_000), b in arbitrary_bitmap(100, 200_000)) {
        prop_assert_eq!((&a & &b).to_array(), (&b & &a).to_array());
    }

    #[test]
    fn or_is_commutative(a in arbitrary_bitmap(100, 200_000), b in arbitrary_bitmap(100, 200_000)) {
        prop_assert_eq!((&a | &b).to_array(), (&b | &a).to_array());
    }

    #[test]
    fn xor_is_commutative(a in arbitrary_bitmap(100, 200_000), b in arbitrary_bitmap(100, 200_000)) {
        prop_assert_eq!((&a ^ &b).to_array(), (&b ^ &a).to_array());
    }

    #[test]
    fn and_is_associative(
        a in arbitrary_bitmap(60, 200_000),
        b in arbitrary_bitmap(60, 200_000),
        c in arbitrary_bitmap(60, 200_000),
    ) {
        let left = &(&a & &b) & &c;
        let right = &a & &(&b & &c);
        prop_assert_eq!(left.to_array(), right.to_array());
    }

    #[test]
    fn or_distributes_over_and_cardinality_matches_inclusion_exclusion(
        a in arbitrary_bitmap(80, 200_000),
        b in arbitrary_bitmap(80, 200_000),
    ) {
        // |A u B| = |A| + |B| - |A n B|
        let union_card = (&a | &b).cardinality() as i64;
        let expected = a.cardinality() as i64 + b.cardinality() as i64 - (&a & &b).cardinality() as i64;
        prop_assert_eq!(union_card, expected);
    }

    #[test]
    fn xor_equals_union_minus_intersection(
        a in arbitrary_bitmap(80, 200_000),
        b in arbitrary_bitmap(80, 200_000),
    ) {
        let xor = &a ^ &b;
        let xor_card = xor.cardinality() as i64;
        let expected_card = (&a | &b).cardinality() as i64 - (&a & &b).cardinality() as i64;
        prop_assert_eq!(xor_card, expected_card);
    }

    #[test]
    fn skip_driven_and_matches_merge_driven_and(
        a in arbitrary_bitmap(80, 200_000),
        b in arbitrary_bitmap(80, 200_000),
    ) {
        let merge_driven = (&a & &b).to_array();
        let skip_driven = materialize(skip_and2by2(a.skip_iter(), b.skip_iter())).to_array();
        prop_assert_eq!(merge_driven, skip_driven);
    }

    #[test]
    fn skip_driven_and_cardinality_matches_materialized(
        a in arbitrary_bitmap(80, 200_000),
        b in arbitrary_bitmap(80, 200_000),
    ) {
        let card = cardinality_of(skip_and2by2(a.skip_iter(), b.skip_iter()));
        prop_assert_eq!(card, (&a & &b).cardinality());
    }
}

#[cfg(feature = "std")]
proptest! {
    #[test]
    fn serialization_round_trips(a in arbitrary_bitmap(100, 500_000)) {
        let mut buf = Vec::new();
        a.serialize_into(&mut buf).unwrap();
        let decoded = SparseBitmap::deserialize_from(&mut buf.as_slice()).unwrap();
        prop_assert_eq!(decoded, a);
    }
}
