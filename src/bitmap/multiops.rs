use core::cmp::{Ordering, Reverse};

#[cfg(not(feature = "std"))]
use alloc::collections::BinaryHeap;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::collections::BinaryHeap;

use crate::bitmap::ops::{and2by2, or2by2, xor2by2};
use crate::error::Error;
use crate::SparseBitmap;

/// A bitmap paired with its own `size_in_bytes`, so the aggregation scheduler can order a
/// [`BinaryHeap`] by size without recomputing it on every comparison.
struct BySize {
    size_in_bytes: u32,
    bitmap: SparseBitmap,
}

impl PartialEq for BySize {
    fn eq(&self, other: &Self) -> bool {
        self.size_in_bytes == other.size_in_bytes
    }
}

impl Eq for BySize {}

impl PartialOrd for BySize {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BySize {
    fn cmp(&self, other: &Self) -> Ordering {
        self.size_in_bytes.cmp(&other.size_in_bytes)
    }
}

/// Combines `bitmaps` pairwise via `op`, always picking the two smallest (by `size_in_bytes`)
/// remaining bitmaps to combine next. This keeps every intermediate result as small as possible
/// for as long as possible, which matters most for `and` (where combining two big inputs early
/// wastes work materializing a big intersection that a later AND will only shrink further) but is
/// a reasonable default for `or`/`xor` too.
fn combine_by_cardinality(
    bitmaps: Vec<SparseBitmap>,
    op: fn(&SparseBitmap, &SparseBitmap) -> SparseBitmap,
) -> SparseBitmap {
    let mut heap: BinaryHeap<Reverse<BySize>> = bitmaps
        .into_iter()
        .map(|bitmap| Reverse(BySize { size_in_bytes: bitmap.size_in_bytes(), bitmap }))
        .collect();
    while heap.len() > 1 {
        let Reverse(a) = heap.pop().expect("heap has at least two entries");
        let Reverse(b) = heap.pop().expect("heap has at least two entries");
        let bitmap = op(&a.bitmap, &b.bitmap);
        let size_in_bytes = bitmap.size_in_bytes();
        heap.push(Reverse(BySize { size_in_bytes, bitmap }));
    }
    heap.pop().map(|Reverse(sized)| sized.bitmap).unwrap_or_default()
}

/// Intersects any number of bitmaps.
///
/// Fails with [`Error::EmptyAggregate`] if `bitmaps` yields nothing — unlike [`or`] and [`xor`],
/// intersection has no identity element to fall back on (the intersection of zero sets is the
/// universe, which this type cannot represent).
///
/// # Examples
///
/// ```rust
/// use sparsebitmap::{and, SparseBitmap};
///
/// let a = SparseBitmap::from_sorted([1, 2, 3, 100]).unwrap();
/// let b = SparseBitmap::from_sorted([2, 3, 100, 200]).unwrap();
/// let c = SparseBitmap::from_sorted([2, 100, 150]).unwrap();
/// let result = and([a, b, c]).unwrap();
/// assert_eq!(result.to_array(), vec![2, 100]);
/// ```
pub fn and(bitmaps: impl IntoIterator<Item = SparseBitmap>) -> Result<SparseBitmap, Error> {
    let mut bitmaps: Vec<SparseBitmap> = bitmaps.into_iter().collect();
    match bitmaps.len() {
        0 => Err(Error::EmptyAggregate),
        1 => Ok(bitmaps.pop().expect("length checked above")),
        2 => {
            let b = bitmaps.pop().expect("length checked above");
            let a = bitmaps.pop().expect("length checked above");
            Ok(and2by2(&a, &b))
        }
        _ => Ok(combine_by_cardinality(bitmaps, and2by2)),
    }
}

/// Unions any number of bitmaps. Zero inputs yield an empty bitmap.
///
/// # Examples
///
/// ```rust
/// use sparsebitmap::{or, SparseBitmap};
///
/// let a = SparseBitmap::from_sorted([1, 100]).unwrap();
/// let b = SparseBitmap::from_sorted([2, 150]).unwrap();
/// let c = SparseBitmap::from_sorted([3, 200]).unwrap();
/// let result = or([a, b, c]);
/// assert_eq!(result.to_array(), vec![1, 2, 3, 100, 150, 200]);
/// ```
pub fn or(bitmaps: impl IntoIterator<Item = SparseBitmap>) -> SparseBitmap {
    let mut bitmaps: Vec<SparseBitmap> = bitmaps.into_iter().collect();
    match bitmaps.len() {
        0 => SparseBitmap::new(),
        1 => bitmaps.pop().expect("length checked above"),
        2 => {
            let b = bitmaps.pop().expect("length checked above");
            let a = bitmaps.pop().expect("length checked above");
            or2by2(&a, &b)
        }
        _ => combine_by_cardinality(bitmaps, or2by2),
    }
}

/// Symmetric-differences any number of bitmaps: a position survives if it is set in an odd
/// number of the inputs. Zero inputs yield an empty bitmap.
///
/// # Examples
///
/// ```rust
/// use sparsebitmap::{xor, SparseBitmap};
///
/// let a = SparseBitmap::from_sorted([1, 2, 100]).unwrap();
/// let b = SparseBitmap::from_sorted([2, 100, 200]).unwrap();
/// let result = xor([a, b]);
/// assert_eq!(result.to_array(), vec![1, 200]);
/// ```
pub fn xor(bitmaps: impl IntoIterator<Item = SparseBitmap>) -> SparseBitmap {
    let mut bitmaps: Vec<SparseBitmap> = bitmaps.into_iter().collect();
    match bitmaps.len() {
        0 => SparseBitmap::new(),
        1 => bitmaps.pop().expect("length checked above"),
        2 => {
            let b = bitmaps.pop().expect("length checked above");
            let a = bitmaps.pop().expect("length checked above");
            xor2by2(&a, &b)
        }
        _ => combine_by_cardinality(bitmaps, xor2by2),
    }
}

/// Blanket aggregation over any owned collection of bitmaps, for `bitmaps.and()` call-site
/// ergonomics over the free functions [`and`]/[`or`]/[`xor`].
pub trait MultiOps: Sized {
    /// See the free function [`and`].
    fn and(self) -> Result<SparseBitmap, Error>;
    /// See the free function [`or`].
    fn or(self) -> SparseBitmap;
    /// See the free function [`xor`].
    fn xor(self) -> SparseBitmap;
}

impl<I: IntoIterator<Item = SparseBitmap>> MultiOps for I {
    fn and(self) -> Result<SparseBitmap, Error> {
        self::and(self)
    }
    fn or(self) -> SparseBitmap {
        self::or(self)
    }
    fn xor(self) -> SparseBitmap {
        self::xor(self)
    }
}
