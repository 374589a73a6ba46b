use crate::buffer::IntBuffer;
use crate::error::Error;
use crate::SparseBitmap;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

impl SparseBitmap {
    /// Creates an empty `SparseBitmap`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sparsebitmap::SparseBitmap;
    /// let bitmap = SparseBitmap::new();
    /// assert_eq!(bitmap.cardinality(), 0);
    /// ```
    pub fn new() -> SparseBitmap {
        SparseBitmap { buffer: IntBuffer::new(), sizeinwords: 0 }
    }

    /// Builds a bitmap from a sorted, non-decreasing sequence of positions.
    ///
    /// Positions do not need to be strictly increasing: repeats are simply OR'd into the same
    /// bit. Fails with [`Error::OutOfOrder`] at the first position that would require rewriting
    /// an earlier pair than the trailing one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sparsebitmap::SparseBitmap;
    ///
    /// let bitmap = SparseBitmap::from_sorted([1, 2, 100, 150, 1000, 123456]).unwrap();
    /// assert_eq!(bitmap.to_array(), vec![1, 2, 100, 150, 1000, 123456]);
    ///
    /// assert!(SparseBitmap::from_sorted([100, 1]).is_err());
    /// ```
    pub fn from_sorted<I>(positions: I) -> Result<SparseBitmap, Error>
    where
        I: IntoIterator<Item = u32>,
    {
        let mut bitmap = SparseBitmap::new();
        for position in positions {
            bitmap.set(position)?;
        }
        Ok(bitmap)
    }

    /// Sets bit `position`, maintaining the buffer's pair encoding.
    ///
    /// Positions must be supplied in non-decreasing order: `position` must be at least
    /// `sizeinwords() * 32 - 32`, i.e. it may only fall back into the word currently being
    /// built, never an earlier one. Violating this returns [`Error::OutOfOrder`] rather than
    /// silently corrupting the buffer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sparsebitmap::SparseBitmap;
    ///
    /// let mut bitmap = SparseBitmap::new();
    /// bitmap.set(3).unwrap();
    /// bitmap.set(5).unwrap();
    /// assert_eq!(bitmap.to_array(), vec![3, 5]);
    ///
    /// assert!(bitmap.set(0).is_err());
    /// ```
    pub fn set(&mut self, position: u32) -> Result<(), Error> {
        let sizeinwords = self.sizeinwords;
        let offset = i64::from(position) - i64::from(sizeinwords) * 32;
        if offset < -32 {
            return Err(Error::OutOfOrder { position, sizeinwords });
        }
        if offset < 0 {
            // Merge into the trailing pair: OR the bit into the last word.
            let bit = (offset + 32) as u32;
            let last = self.buffer.size() - 1;
            let word = (self.buffer.get(last) as u32) | (1u32 << bit);
            self.buffer.set(last, word as i32);
            return Ok(());
        }
        let offset = offset as u32;
        let gap = offset / 32;
        let bit = offset - gap * 32;
        self.buffer.push(gap as i32);
        self.buffer.push((1u32 << bit) as i32);
        self.sizeinwords = sizeinwords + gap + 1;
        Ok(())
    }

    /// Expert append: pushes a raw `(offset - sizeinwords, word)` pair directly, bypassing the
    /// bit-level merge logic of [`set`](SparseBitmap::set).
    ///
    /// `offset` must be at least `self.sizeinwords()`, i.e. strictly beyond every word already
    /// present. This is the fast path used by the skip-driven kernels' [`materialize`] step,
    /// where the caller (a [`SkipIterator`](crate::SkipIterator)) already guarantees ordering, so
    /// paying for a checked call on every pair would be wasted work.
    ///
    /// A zero `word` is accepted (unlike [`set`](SparseBitmap::set), which never produces one);
    /// such a pair contributes nothing when iterated, and two bitmaps that differ only in
    /// trailing zero-word pairs will *not* compare equal — canonical form is part of this type's
    /// contract. Prefer [`try_add`](SparseBitmap::try_add) unless you are sure of the invariant.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `offset < self.sizeinwords()`.
    #[inline]
    pub fn add(&mut self, word: u32, offset: u32) {
        debug_assert!(
            offset >= self.sizeinwords,
            "add({word}, {offset}) called out of order at sizeinwords = {}",
            self.sizeinwords
        );
        let gap = offset.wrapping_sub(self.sizeinwords);
        self.buffer.push(gap as i32);
        self.buffer.push(word as i32);
        self.sizeinwords = offset + 1;
    }

    /// Checked counterpart of [`add`](SparseBitmap::add): returns [`Error::OutOfOrder`] instead
    /// of panicking when `offset < self.sizeinwords()`.
    pub fn try_add(&mut self, word: u32, offset: u32) -> Result<(), Error> {
        if offset < self.sizeinwords {
            return Err(Error::OutOfOrder { position: offset.saturating_mul(32), sizeinwords: self.sizeinwords });
        }
        self.add(word, offset);
        Ok(())
    }

    /// The number of set bits.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sparsebitmap::SparseBitmap;
    /// let bitmap = SparseBitmap::from_sorted([1, 2, 100]).unwrap();
    /// assert_eq!(bitmap.cardinality(), 3);
    /// ```
    pub fn cardinality(&self) -> u32 {
        let mut total = 0u32;
        let mut i = 1;
        let size = self.buffer.size();
        while i < size {
            total += (self.buffer.get(i) as u32).count_ones();
            i += 2;
        }
        total
    }

    /// Alias for [`cardinality`](SparseBitmap::cardinality), widened to `u64` to match the
    /// conventional `len`/`is_empty` pair.
    #[inline]
    pub fn len(&self) -> u64 {
        u64::from(self.cardinality())
    }

    /// Returns `true` if no bits are set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Materializes every set position into a sorted `Vec<u32>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sparsebitmap::SparseBitmap;
    /// let bitmap = SparseBitmap::from_sorted([1, 2, 100]).unwrap();
    /// assert_eq!(bitmap.to_array(), vec![1, 2, 100]);
    /// ```
    pub fn to_array(&self) -> Vec<u32> {
        let mut out = Vec::with_capacity(self.cardinality() as usize);
        out.extend(self.iter());
        out
    }

    /// The one-past-the-last absolute word index covered by this bitmap (0 if empty).
    #[inline]
    pub fn sizeinwords(&self) -> u32 {
        self.sizeinwords
    }

    /// The buffer's current size in bytes (`size() * 4`), ignoring any spare capacity.
    #[inline]
    pub fn size_in_bytes(&self) -> u32 {
        self.buffer.size_in_bytes()
    }

    /// Shrinks the backing buffer's capacity to its length; returns the new size in bytes.
    pub fn trim(&mut self) -> u32 {
        self.buffer.trim()
    }

    /// Resets this bitmap to empty, keeping the buffer's allocated capacity.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.sizeinwords = 0;
    }
}

#[cfg(test)]
mod test {
    use crate::SparseBitmap;

    #[test]
    fn scenario_round_trip() {
        let bitmap = SparseBitmap::from_sorted([1, 2, 100, 150, 1000, 123456]).unwrap();
        assert_eq!(bitmap.to_array(), vec![1, 2, 100, 150, 1000, 123456]);
        assert_eq!(bitmap.cardinality(), 6);
    }

    #[test]
    fn set_merges_into_trailing_word() {
        let mut bitmap = SparseBitmap::new();
        bitmap.set(3).unwrap();
        bitmap.set(5).unwrap();
        bitmap.set(3).unwrap(); // repeat, same word
        assert_eq!(bitmap.to_array(), vec![3, 5]);
        assert_eq!(bitmap.buffer.size(), 2);
    }

    #[test]
    fn set_out_of_order_fails() {
        let mut bitmap = SparseBitmap::new();
        bitmap.set(100).unwrap();
        assert!(bitmap.set(1).is_err());
        // Within the trailing word (offset >= -32) is still accepted.
        assert!(bitmap.set(97).is_ok());
    }

    #[test]
    fn empty_bitmap_is_empty() {
        let bitmap = SparseBitmap::new();
        assert!(bitmap.is_empty());
        assert_eq!(bitmap.cardinality(), 0);
        assert_eq!(bitmap.to_array(), Vec::<u32>::new());
    }

    #[test]
    fn add_then_try_add_out_of_order() {
        let mut bitmap = SparseBitmap::new();
        bitmap.add(0b101, 10);
        assert_eq!(bitmap.sizeinwords(), 11);
        assert!(bitmap.try_add(1, 5).is_err());
        assert!(bitmap.try_add(1, 11).is_ok());
    }

    #[test]
    fn clear_and_trim() {
        let mut bitmap = SparseBitmap::from_sorted([1, 64, 999]).unwrap();
        assert!(bitmap.size_in_bytes() > 0);
        bitmap.clear();
        assert!(bitmap.is_empty());
        assert_eq!(bitmap.size_in_bytes(), 0);
    }
}
