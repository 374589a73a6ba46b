use core::cmp::Ordering;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign};

use crate::bitmap::skip_iter::SkipIterator;
use crate::SparseBitmap;

/// Anything that accepts `(word, offset)` pairs in non-decreasing offset order, the way
/// [`SparseBitmap::add`] does. The pairwise merge kernels below are generic over this so that a
/// future caller wanting something other than a fresh `SparseBitmap` (e.g. a cardinality-only
/// accumulator) has a seam to plug into.
pub trait Sink {
    fn add(&mut self, word: u32, offset: u32);
}

impl Sink for SparseBitmap {
    #[inline]
    fn add(&mut self, word: u32, offset: u32) {
        SparseBitmap::add(self, word, offset)
    }
}

/// Merge-driven pairwise intersection: walks both bitmaps' pairs linearly in lock-step, emitting
/// `w1 & w2` at matching offsets when the result is non-zero.
pub fn and2by2(a: &SparseBitmap, b: &SparseBitmap) -> SparseBitmap {
    let mut out = SparseBitmap::new();
    and2by2_into(a, b, &mut out);
    out
}

/// Merge-driven pairwise union: walks both bitmaps' pairs linearly, draining whichever side still
/// has pairs once the other is exhausted.
pub fn or2by2(a: &SparseBitmap, b: &SparseBitmap) -> SparseBitmap {
    let mut out = SparseBitmap::new();
    or2by2_into(a, b, &mut out);
    out
}

/// Merge-driven pairwise symmetric difference: like [`or2by2`], but matching offsets only emit
/// when `w1 != w2`.
pub fn xor2by2(a: &SparseBitmap, b: &SparseBitmap) -> SparseBitmap {
    let mut out = SparseBitmap::new();
    xor2by2_into(a, b, &mut out);
    out
}

pub(crate) fn and2by2_into(a: &SparseBitmap, b: &SparseBitmap, sink: &mut impl Sink) {
    let mut it1 = a.skip_iter();
    let mut it2 = b.skip_iter();
    while it1.has_value() && it2.has_value() {
        let p1 = it1.current_offset();
        let p2 = it2.current_offset();
        match p1.cmp(&p2) {
            Ordering::Less => it1.advance(),
            Ordering::Greater => it2.advance(),
            Ordering::Equal => {
                let w = it1.current_word() & it2.current_word();
                if w != 0 {
                    sink.add(w, p1);
                }
                it1.advance();
                it2.advance();
            }
        }
    }
}

pub(crate) fn or2by2_into(a: &SparseBitmap, b: &SparseBitmap, sink: &mut impl Sink) {
    let mut it1 = a.skip_iter();
    let mut it2 = b.skip_iter();
    while it1.has_value() && it2.has_value() {
        let p1 = it1.current_offset();
        let p2 = it2.current_offset();
        match p1.cmp(&p2) {
            Ordering::Less => {
                sink.add(it1.current_word(), p1);
                it1.advance();
            }
            Ordering::Greater => {
                sink.add(it2.current_word(), p2);
                it2.advance();
            }
            Ordering::Equal => {
                sink.add(it1.current_word() | it2.current_word(), p1);
                it1.advance();
                it2.advance();
            }
        }
    }
    // Drain whichever side still has pairs. Both loops together are exhaustive; there is no
    // further pass needed over either side.
    while it1.has_value() {
        sink.add(it1.current_word(), it1.current_offset());
        it1.advance();
    }
    while it2.has_value() {
        sink.add(it2.current_word(), it2.current_offset());
        it2.advance();
    }
}

pub(crate) fn xor2by2_into(a: &SparseBitmap, b: &SparseBitmap, sink: &mut impl Sink) {
    let mut it1 = a.skip_iter();
    let mut it2 = b.skip_iter();
    while it1.has_value() && it2.has_value() {
        let p1 = it1.current_offset();
        let p2 = it2.current_offset();
        match p1.cmp(&p2) {
            Ordering::Less => {
                sink.add(it1.current_word(), p1);
                it1.advance();
            }
            Ordering::Greater => {
                sink.add(it2.current_word(), p2);
                it2.advance();
            }
            Ordering::Equal => {
                let w = it1.current_word() ^ it2.current_word();
                if w != 0 {
                    sink.add(w, p1);
                }
                it1.advance();
                it2.advance();
            }
        }
    }
    while it1.has_value() {
        sink.add(it1.current_word(), it1.current_offset());
        it1.advance();
    }
    while it2.has_value() {
        sink.add(it2.current_word(), it2.current_offset());
        it2.advance();
    }
}

impl SparseBitmap {
    /// Intersection with `other`, as a fresh bitmap. Equivalent to `self & other`.
    #[inline]
    pub fn and(&self, other: &SparseBitmap) -> SparseBitmap {
        and2by2(self, other)
    }

    /// Union with `other`, as a fresh bitmap. Equivalent to `self | other`.
    #[inline]
    pub fn or(&self, other: &SparseBitmap) -> SparseBitmap {
        or2by2(self, other)
    }

    /// Symmetric difference with `other`, as a fresh bitmap. Equivalent to `self ^ other`.
    #[inline]
    pub fn xor(&self, other: &SparseBitmap) -> SparseBitmap {
        xor2by2(self, other)
    }
}

impl BitAnd<&SparseBitmap> for &SparseBitmap {
    type Output = SparseBitmap;

    fn bitand(self, rhs: &SparseBitmap) -> SparseBitmap {
        and2by2(self, rhs)
    }
}

impl BitAnd<SparseBitmap> for &SparseBitmap {
    type Output = SparseBitmap;

    fn bitand(self, rhs: SparseBitmap) -> SparseBitmap {
        and2by2(self, &rhs)
    }
}

impl BitAnd<&SparseBitmap> for SparseBitmap {
    type Output = SparseBitmap;

    fn bitand(self, rhs: &SparseBitmap) -> SparseBitmap {
        and2by2(&self, rhs)
    }
}

impl BitAnd<SparseBitmap> for SparseBitmap {
    type Output = SparseBitmap;

    fn bitand(self, rhs: SparseBitmap) -> SparseBitmap {
        and2by2(&self, &rhs)
    }
}

impl BitAndAssign<&SparseBitmap> for SparseBitmap {
    fn bitand_assign(&mut self, rhs: &SparseBitmap) {
        *self = and2by2(self, rhs);
    }
}

impl BitAndAssign<SparseBitmap> for SparseBitmap {
    fn bitand_assign(&mut self, rhs: SparseBitmap) {
        *self = and2by2(self, &rhs);
    }
}

impl BitOr<&SparseBitmap> for &SparseBitmap {
    type Output = SparseBitmap;

    fn bitor(self, rhs: &SparseBitmap) -> SparseBitmap {
        or2by2(self, rhs)
    }
}

impl BitOr<SparseBitmap> for &SparseBitmap {
    type Output = SparseBitmap;

    fn bitor(self, rhs: SparseBitmap) -> SparseBitmap {
        or2by2(self, &rhs)
    }
}

impl BitOr<&SparseBitmap> for SparseBitmap {
    type Output = SparseBitmap;

    fn bitor(self, rhs: &SparseBitmap) -> SparseBitmap {
        or2by2(&self, rhs)
    }
}

impl BitOr<SparseBitmap> for SparseBitmap {
    type Output = SparseBitmap;

    fn bitor(self, rhs: SparseBitmap) -> SparseBitmap {
        or2by2(&self, &rhs)
    }
}

impl BitOrAssign<&SparseBitmap> for SparseBitmap {
    fn bitor_assign(&mut self, rhs: &SparseBitmap) {
        *self = or2by2(self, rhs);
    }
}

impl BitOrAssign<SparseBitmap> for SparseBitmap {
    fn bitor_assign(&mut self, rhs: SparseBitmap) {
        *self = or2by2(self, &rhs);
    }
}

impl BitXor<&SparseBitmap> for &SparseBitmap {
    type Output = SparseBitmap;

    fn bitxor(self, rhs: &SparseBitmap) -> SparseBitmap {
        xor2by2(self, rhs)
    }
}

impl BitXor<SparseBitmap> for &SparseBitmap {
    type Output = SparseBitmap;

    fn bitxor(self, rhs: SparseBitmap) -> SparseBitmap {
        xor2by2(self, &rhs)
    }
}

impl BitXor<&SparseBitmap> for SparseBitmap {
    type Output = SparseBitmap;

    fn bitxor(self, rhs: &SparseBitmap) -> SparseBitmap {
        xor2by2(&self, rhs)
    }
}

impl BitXor<SparseBitmap> for SparseBitmap {
    type Output = SparseBitmap;

    fn bitxor(self, rhs: SparseBitmap) -> SparseBitmap {
        xor2by2(&self, &rhs)
    }
}

impl BitXorAssign<&SparseBitmap> for SparseBitmap {
    fn bitxor_assign(&mut self, rhs: &SparseBitmap) {
        *self = xor2by2(self, rhs);
    }
}

impl BitXorAssign<SparseBitmap> for SparseBitmap {
    fn bitxor_assign(&mut self, rhs: SparseBitmap) {
        *self = xor2by2(self, &rhs);
    }
}
