mod fmt;
mod inherent;
mod iter;
mod multiops;
mod ops;
mod proptests;
#[cfg(feature = "std")]
mod serialization;
mod skip_iter;
// `pub(crate)` rather than private: the n-ary skip-driven `and`/`fastand` free functions share a
// name with the bitmap aggregation functions re-exported from `multiops` below, so they are only
// reachable through the `sparsebitmap::skip_ops` path (re-exported whole in `lib.rs`) instead of
// flattened into the crate root alongside `and2by2`/`treeand`/`flatand`/`reverseflatand`.
pub(crate) mod skip_ops;

pub use self::iter::Iter;
pub use self::multiops::{and, or, xor, MultiOps};
pub use self::skip_iter::{BitmapSkipIterator, SkipIterator};
pub use self::skip_ops::{
    and2by2, cardinality_of, flatand, materialize, reverseflatand, treeand, BoxedSkipIterator,
    FastAnd, NaryAnd,
};

use crate::buffer::IntBuffer;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// A compressed sparse bitmap over non-negative 32-bit positions.
///
/// `SparseBitmap` encodes its set bits as a run of `(gap, word)` pairs: each pair covers one
/// populated 32-bit word, and the gap records how many fully-empty words separate it from the
/// previous one. This buys constant-factor savings over a dense bit array exactly when the set
/// positions cluster into a small number of words separated by long empty runs — the opposite
/// sparsity profile from a hash set, which pays a per-element overhead regardless of clustering.
///
/// Bitmaps are append-built: bits must be inserted in non-decreasing order via [`set`] (or the
/// expert [`add`]), never removed. See the crate-level docs for the full invariants.
///
/// [`set`]: SparseBitmap::set
/// [`add`]: SparseBitmap::add
///
/// # Examples
///
/// ```rust
/// use sparsebitmap::SparseBitmap;
///
/// let bitmap = SparseBitmap::from_sorted([1, 2, 100, 150, 1000, 123456]).unwrap();
/// assert_eq!(bitmap.cardinality(), 6);
/// assert_eq!(bitmap.to_array(), vec![1, 2, 100, 150, 1000, 123456]);
/// ```
#[derive(Clone, Default)]
pub struct SparseBitmap {
    pub(crate) buffer: IntBuffer,
    pub(crate) sizeinwords: u32,
}

impl PartialEq for SparseBitmap {
    fn eq(&self, other: &Self) -> bool {
        self.buffer == other.buffer
    }
}

impl Eq for SparseBitmap {}

impl core::hash::Hash for SparseBitmap {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.buffer.hash(state);
    }
}
