//! A compressed sparse bitmap for clustered, sparse sets of non-negative 32-bit positions.
//!
//! [`SparseBitmap`] encodes its set bits as a run of `(gap, word)` pairs: each pair covers one
//! populated 32-bit word, and the gap records how many fully-empty words separate it from the
//! previous one. Set positions that cluster into a small number of words separated by long empty
//! runs compress well under this scheme, at the cost of the random-access guarantees a dense bit
//! array or a [`roaring`](https://docs.rs/roaring)-style multi-level container would give you.
//!
//! Bitmaps are append-built: positions must be inserted in non-decreasing order via
//! [`SparseBitmap::set`] (or the expert [`SparseBitmap::add`]) and are never individually removed.
//! Two iterator families walk a built bitmap:
//!
//! - [`Iter`], a plain `Iterator<Item = u32>` over ascending set positions.
//! - [`SkipIterator`], a forward cursor over `(offset, word)` pairs that can leap directly to the
//!   first pair at or past a given offset, the substrate the skip-driven n-ary
//!   [`skip_ops::and`]/[`skip_ops::fastand`] intersection kernels are built on.
//!
//! Pairwise set algebra is exposed both as plain methods ([`SparseBitmap::and`],
//! [`SparseBitmap::or`], [`SparseBitmap::xor`]) and as `BitAnd`/`BitOr`/`BitXor` operator
//! overloads; n-ary aggregates over many owned bitmaps are the free functions [`and`], [`or`],
//! [`xor`] (also available via the [`MultiOps`] blanket trait). These share a name with, but are
//! distinct from, [`skip_ops::and`]/[`skip_ops::fastand`]: the former combine owned
//! [`SparseBitmap`]s via the size-ordered aggregation scheduler, the latter leap-frog over a
//! collection of [`SkipIterator`]s directly without ever materializing an intermediate bitmap.
//!
//! # Features
//!
//! - `std` (default): enables the byte-oriented serialization envelope
//!   ([`SparseBitmap::serialize_into`]/[`SparseBitmap::deserialize_from`]) and
//!   [`std::error::Error`] for [`Error`]. Disabling it builds against `core`+`alloc` only.
//! - `serde`: layers [`serde::Serialize`]/[`serde::Deserialize`] on top of the same byte envelope.
//!   Implies `std`.
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod bitmap;
mod buffer;
mod error;

pub use crate::bitmap::{
    and, and2by2, cardinality_of, flatand, materialize, or, reverseflatand, treeand, xor,
    BitmapSkipIterator, BoxedSkipIterator, FastAnd, Iter, MultiOps, NaryAnd, SkipIterator,
};
pub use crate::bitmap::SparseBitmap;
pub use crate::buffer::IntBuffer;
pub use crate::error::Error;

/// The n-ary skip-driven intersection kernels [`and`](skip_ops::and) and
/// [`fastand`](skip_ops::fastand), namespaced separately from the crate root's
/// [`and`](crate::and)/[`or`](crate::or)/[`xor`](crate::xor) bitmap aggregates, which they share a
/// name with but not a signature: these take `Vec<`[`BoxedSkipIterator`]`>` and return another
/// [`SkipIterator`], rather than combining owned [`SparseBitmap`]s.
pub mod skip_ops {
    pub use crate::bitmap::skip_ops::{
        and, and2by2, cardinality_of, fastand, flatand, materialize, reverseflatand, treeand,
        BoxedSkipIterator, FastAnd, NaryAnd,
    };
}
