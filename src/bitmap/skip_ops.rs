use core::cmp::Ordering;

#[cfg(not(feature = "std"))]
use alloc::boxed::Box;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::bitmap::skip_iter::SkipIterator;
use crate::error::Error;
use crate::SparseBitmap;

/// A type-erased [`SkipIterator`], used wherever a function needs to accept or return a
/// heterogeneous collection of skippable iterators (the inputs to an n-ary AND are rarely all
/// the same concrete type once [`and2by2`], [`treeand`], and plain
/// [`BitmapSkipIterator`](crate::BitmapSkipIterator)s are mixed).
pub type BoxedSkipIterator<'a> = Box<dyn SkipIterator + 'a>;

impl<T: SkipIterator + ?Sized> SkipIterator for Box<T> {
    #[inline]
    fn has_value(&self) -> bool {
        (**self).has_value()
    }

    #[inline]
    fn current_word(&self) -> u32 {
        (**self).current_word()
    }

    #[inline]
    fn current_offset(&self) -> u32 {
        (**self).current_offset()
    }

    #[inline]
    fn advance(&mut self) {
        (**self).advance()
    }

    #[inline]
    fn advance_until(&mut self, min: u32) -> Result<(), Error> {
        (**self).advance_until(min)
    }
}

/// A [`SkipIterator`] with no pairs, used as the identity element for the zero-input case of
/// [`flatand`], [`treeand`] and [`reverseflatand`] (which, unlike [`and`] and [`fastand`], have no
/// meaningful "first" element to seed a running intersection with and so do not fail on empty
/// input — see the crate docs on [`Error::EmptyAggregate`]).
struct EmptySkipIterator;

impl SkipIterator for EmptySkipIterator {
    fn has_value(&self) -> bool {
        false
    }
    fn current_word(&self) -> u32 {
        0
    }
    fn current_offset(&self) -> u32 {
        0
    }
    fn advance(&mut self) {}
    fn advance_until(&mut self, _min: u32) -> Result<(), Error> {
        Ok(())
    }
}

/// The const "advance_until is unsupported here" message shared by [`FastAnd`].
const FASTAND_ADVANCE_UNTIL_UNSUPPORTED: &str =
    "FastAnd's n-ary iterator does not support advance_until";

/// Skip-driven pairwise intersection over two [`SkipIterator`]s: leap-frogs over gaps instead of
/// stepping through every intervening pair, unlike the merge-driven [`crate::and2by2`] (same name,
/// different substrate — that one walks a bitmap's raw pairs directly).
pub struct AndIterator<A, B> {
    a: A,
    b: B,
}

impl<A: SkipIterator, B: SkipIterator> AndIterator<A, B> {
    fn move_to_next(&mut self) {
        loop {
            if !self.a.has_value() || !self.b.has_value() {
                return;
            }
            let pa = self.a.current_offset();
            let pb = self.b.current_offset();
            match pa.cmp(&pb) {
                Ordering::Less => {
                    self.a.advance_until(pb).expect(FASTAND_ADVANCE_UNTIL_UNSUPPORTED);
                }
                Ordering::Greater => {
                    self.b.advance_until(pa).expect(FASTAND_ADVANCE_UNTIL_UNSUPPORTED);
                }
                Ordering::Equal => {
                    let w = self.a.current_word() & self.b.current_word();
                    if w != 0 {
                        return;
                    }
                    self.a.advance();
                }
            }
        }
    }
}

impl<A: SkipIterator, B: SkipIterator> SkipIterator for AndIterator<A, B> {
    fn has_value(&self) -> bool {
        self.a.has_value() && self.b.has_value()
    }

    fn current_word(&self) -> u32 {
        self.a.current_word() & self.b.current_word()
    }

    fn current_offset(&self) -> u32 {
        self.a.current_offset()
    }

    fn advance(&mut self) {
        self.a.advance();
        self.move_to_next();
    }

    fn advance_until(&mut self, min: u32) -> Result<(), Error> {
        self.a.advance_until(min)?;
        self.move_to_next();
        Ok(())
    }
}

/// Skip-driven pairwise intersection of two skippable iterators.
///
/// # Examples
///
/// ```rust
/// use sparsebitmap::{and2by2, materialize, SparseBitmap};
///
/// let a = SparseBitmap::from_sorted([1, 2, 100, 150, 1000, 123456]).unwrap();
/// let b = SparseBitmap::from_sorted([1, 2, 3, 1000, 123456, 1234567]).unwrap();
/// let result = materialize(and2by2(a.skip_iter(), b.skip_iter()));
/// assert_eq!(result.to_array(), vec![1, 2, 1000, 123456]);
/// ```
pub fn and2by2<A: SkipIterator, B: SkipIterator>(a: A, b: B) -> AndIterator<A, B> {
    let mut it = AndIterator { a, b };
    it.move_to_next();
    it
}

/// N-ary skip-driven intersection, tracking the running maximum offset (`maxval`) across all
/// inputs and leap-frogging every input that falls behind it.
pub struct NaryAnd<'a> {
    iters: Vec<BoxedSkipIterator<'a>>,
    maxval: u32,
}

impl<'a> NaryAnd<'a> {
    /// Builds an n-ary AND over `iters`. Fails with [`Error::EmptyAggregate`] if `iters` is empty.
    pub fn new(iters: Vec<BoxedSkipIterator<'a>>) -> Result<NaryAnd<'a>, Error> {
        if iters.is_empty() {
            return Err(Error::EmptyAggregate);
        }
        let maxval =
            iters.iter().filter(|it| it.has_value()).map(|it| it.current_offset()).max().unwrap_or(0);
        let mut nary = NaryAnd { iters, maxval };
        nary.move_to_next();
        Ok(nary)
    }

    fn exhausted(&self) -> bool {
        self.iters.iter().any(|it| !it.has_value())
    }

    fn move_to_next(&mut self) {
        loop {
            if self.exhausted() {
                return;
            }
            loop {
                let mut changed = false;
                for it in self.iters.iter_mut() {
                    if it.current_offset() < self.maxval {
                        it.advance_until(self.maxval).expect(FASTAND_ADVANCE_UNTIL_UNSUPPORTED);
                        changed = true;
                        if !it.has_value() {
                            return;
                        }
                        if it.current_offset() > self.maxval {
                            self.maxval = it.current_offset();
                        }
                    }
                }
                if !changed {
                    break;
                }
            }
            let w = self.iters.iter().fold(u32::MAX, |acc, it| acc & it.current_word());
            if w != 0 {
                return;
            }
            // All inputs agree on `maxval` but AND to zero: step past this plateau and re-sweep.
            for it in self.iters.iter_mut() {
                let _ = it.advance_until(self.maxval);
            }
            if self.exhausted() {
                return;
            }
            self.maxval = self.iters.iter().map(|it| it.current_offset()).max().unwrap();
        }
    }
}

impl<'a> SkipIterator for NaryAnd<'a> {
    fn has_value(&self) -> bool {
        !self.exhausted()
    }

    fn current_word(&self) -> u32 {
        self.iters.iter().fold(u32::MAX, |acc, it| acc & it.current_word())
    }

    fn current_offset(&self) -> u32 {
        self.maxval
    }

    fn advance(&mut self) {
        for it in self.iters.iter_mut() {
            let _ = it.advance_until(self.maxval);
        }
        if !self.exhausted() {
            self.maxval = self.iters.iter().map(|it| it.current_offset()).max().unwrap();
        }
        self.move_to_next();
    }

    fn advance_until(&mut self, min: u32) -> Result<(), Error> {
        if let Some(last) = self.iters.last_mut() {
            last.advance_until(min)?;
            if last.has_value() {
                self.maxval = last.current_offset().max(min);
            }
        }
        self.move_to_next();
        Ok(())
    }
}

/// N-ary skip-driven intersection of `iterators`. Fails with [`Error::EmptyAggregate`] on an
/// empty input.
pub fn and<'a>(iterators: Vec<BoxedSkipIterator<'a>>) -> Result<NaryAnd<'a>, Error> {
    NaryAnd::new(iterators)
}

/// N-ary skip-driven intersection that additionally tracks how many inputs currently agree on
/// `maxval`, avoiding the full-sweep re-check [`NaryAnd`] performs after every advance.
///
/// Unlike every other [`SkipIterator`] in this crate, [`FastAnd::advance_until`] is not
/// implemented: it always returns [`Error::Unsupported`]. Do not compose a `FastAnd` as one of the
/// inputs to [`and2by2`], [`NaryAnd`], [`treeand`], [`flatand`], or [`reverseflatand`] — those all
/// call `advance_until` on their inputs and will panic (via `.expect(..)`) if it returns an error.
pub struct FastAnd<'a> {
    iters: Vec<BoxedSkipIterator<'a>>,
    maxval: u32,
}

impl<'a> FastAnd<'a> {
    /// Builds a `fastand` over `iters`. Fails with [`Error::EmptyAggregate`] if `iters` is empty.
    pub fn new(iters: Vec<BoxedSkipIterator<'a>>) -> Result<FastAnd<'a>, Error> {
        if iters.is_empty() {
            return Err(Error::EmptyAggregate);
        }
        let maxval =
            iters.iter().filter(|it| it.has_value()).map(|it| it.current_offset()).max().unwrap_or(0);
        let mut fast = FastAnd { iters, maxval };
        fast.move_to_next();
        Ok(fast)
    }

    fn exhausted(&self) -> bool {
        self.iters.iter().any(|it| !it.has_value())
    }

    fn move_to_next(&mut self) {
        loop {
            if self.exhausted() {
                return;
            }
            let n = self.iters.len();
            let mut agree = 0usize;
            let mut i = 0;
            while i < n {
                if !self.iters[i].has_value() {
                    return;
                }
                let offset = self.iters[i].current_offset();
                if offset < self.maxval {
                    self.iters[i].advance_until(self.maxval).expect(FASTAND_ADVANCE_UNTIL_UNSUPPORTED);
                    if !self.iters[i].has_value() {
                        return;
                    }
                    let new_offset = self.iters[i].current_offset();
                    if new_offset > self.maxval {
                        self.maxval = new_offset;
                        agree = 0;
                        i = 0;
                        continue;
                    }
                    agree += 1;
                } else if offset > self.maxval {
                    self.maxval = offset;
                    agree = 0;
                    i = 0;
                    continue;
                } else {
                    agree += 1;
                }
                i += 1;
            }
            if agree == n {
                let w = self.iters.iter().fold(u32::MAX, |acc, it| acc & it.current_word());
                if w != 0 {
                    return;
                }
                self.iters[0].advance();
                if !self.iters[0].has_value() {
                    return;
                }
                if self.iters[0].current_offset() > self.maxval {
                    self.maxval = self.iters[0].current_offset();
                }
            }
        }
    }
}

impl<'a> SkipIterator for FastAnd<'a> {
    fn has_value(&self) -> bool {
        !self.exhausted()
    }

    fn current_word(&self) -> u32 {
        self.iters.iter().fold(u32::MAX, |acc, it| acc & it.current_word())
    }

    fn current_offset(&self) -> u32 {
        self.maxval
    }

    fn advance(&mut self) {
        self.iters[0].advance();
        self.move_to_next();
    }

    fn advance_until(&mut self, _min: u32) -> Result<(), Error> {
        Err(Error::Unsupported(FASTAND_ADVANCE_UNTIL_UNSUPPORTED))
    }
}

/// N-ary skip-driven intersection, optimized with a running agreement counter. Fails with
/// [`Error::EmptyAggregate`] on an empty input. See [`FastAnd`] for its `advance_until`
/// limitation.
pub fn fastand<'a>(iterators: Vec<BoxedSkipIterator<'a>>) -> Result<FastAnd<'a>, Error> {
    FastAnd::new(iterators)
}

/// Pairwise-reduces `iterators` in a balanced tree: `(0,1), (2,3), ...` are combined via
/// [`and2by2`], then the results are paired up again, and so on. An odd input at any level is
/// carried forward unchanged to the next level.
pub fn treeand(iterators: Vec<BoxedSkipIterator<'_>>) -> BoxedSkipIterator<'_> {
    if iterators.is_empty() {
        return Box::new(EmptySkipIterator);
    }
    let mut level = iterators;
    while level.len() > 1 {
        let mut next_level = Vec::with_capacity((level.len() + 1) / 2);
        let mut pairs = level.into_iter();
        while let Some(a) = pairs.next() {
            match pairs.next() {
                Some(b) => next_level.push(Box::new(and2by2(a, b)) as BoxedSkipIterator<'_>),
                None => next_level.push(a),
            }
        }
        level = next_level;
    }
    level.into_iter().next().unwrap_or_else(|| Box::new(EmptySkipIterator))
}

/// Left-folds `iterators` via [`and2by2`], in input order.
pub fn flatand(iterators: Vec<BoxedSkipIterator<'_>>) -> BoxedSkipIterator<'_> {
    let mut iter = iterators.into_iter();
    let first = match iter.next() {
        Some(it) => it,
        None => return Box::new(EmptySkipIterator),
    };
    iter.fold(first, |acc, next| Box::new(and2by2(acc, next)) as BoxedSkipIterator<'_>)
}

/// Right-folds `iterators` via [`and2by2`]: combines the last two first, then folds towards the
/// front.
pub fn reverseflatand(iterators: Vec<BoxedSkipIterator<'_>>) -> BoxedSkipIterator<'_> {
    let mut iter = iterators.into_iter().rev();
    let first = match iter.next() {
        Some(it) => it,
        None => return Box::new(EmptySkipIterator),
    };
    iter.fold(first, |acc, next| Box::new(and2by2(acc, next)) as BoxedSkipIterator<'_>)
}

/// Drains a skippable iterator into a fresh [`SparseBitmap`], using the expert
/// [`SparseBitmap::add`] path (the iterator's offsets are already strictly increasing, so the
/// checked [`SparseBitmap::try_add`] would only repeat work the iterator's own invariants already
/// guarantee).
pub fn materialize(mut iter: impl SkipIterator) -> SparseBitmap {
    let mut out = SparseBitmap::new();
    while iter.has_value() {
        out.add(iter.current_word(), iter.current_offset());
        iter.advance();
    }
    out
}

/// Sums the popcount of every word a skippable iterator visits, without materializing a bitmap.
pub fn cardinality_of(mut iter: impl SkipIterator) -> u32 {
    let mut total = 0u32;
    while iter.has_value() {
        total += iter.current_word().count_ones();
        iter.advance();
    }
    total
}
