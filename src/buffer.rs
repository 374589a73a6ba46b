use core::hash::{Hash, Hasher};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

#[cfg(feature = "std")]
use std::io::{Read, Write};

#[cfg(feature = "std")]
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

#[cfg(feature = "std")]
use crate::error::Error;

/// The initial capacity reserved by [`IntBuffer::new`].
const INITIAL_CAPACITY: usize = 32;

/// An append-only growable sequence of 32-bit signed integers.
///
/// This is the raw storage backing a [`SparseBitmap`](crate::SparseBitmap): pairs of
/// `(gap, word)` integers are pushed onto it in order. `IntBuffer` itself knows nothing about
/// that encoding — it is a thin, serializable growable array.
#[derive(Clone, Default)]
pub struct IntBuffer {
    data: Vec<i32>,
}

impl IntBuffer {
    /// Creates an empty buffer with room for [`INITIAL_CAPACITY`] elements before it first
    /// reallocates.
    pub fn new() -> IntBuffer {
        IntBuffer { data: Vec::with_capacity(INITIAL_CAPACITY) }
    }

    /// Appends `value` to the end of the buffer.
    #[inline]
    pub fn push(&mut self, value: i32) {
        self.data.push(value);
    }

    /// Returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.size()`.
    #[inline]
    pub fn get(&self, index: usize) -> i32 {
        self.data[index]
    }

    /// Overwrites the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.size()`.
    #[inline]
    pub fn set(&mut self, index: usize, value: i32) {
        self.data[index] = value;
    }

    /// Returns the number of elements currently stored.
    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the buffer holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Resets the buffer to length 0, keeping its allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Shrinks the backing allocation to fit the current length.
    ///
    /// Returns the new size in bytes (`size() * 4`).
    pub fn trim(&mut self) -> u32 {
        self.data.shrink_to_fit();
        (self.data.len() * 4) as u32
    }

    /// Returns the current size in bytes (`size() * 4`), independent of allocated capacity.
    #[inline]
    pub fn size_in_bytes(&self) -> u32 {
        (self.data.len() * 4) as u32
    }

    /// A rolling-31 hash over the elements in order: `h = 0`, then `h = 31 * h + x` for each
    /// element `x`. Backs the `Hash` impl below so that equal buffers always hash equal.
    pub fn rolling_hash(&self) -> i32 {
        self.data.iter().fold(0i32, |h, &x| h.wrapping_mul(31).wrapping_add(x))
    }

    /// Borrows the buffer's contents as a plain slice.
    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    pub(crate) fn from_vec(data: Vec<i32>) -> IntBuffer {
        IntBuffer { data }
    }
}

#[cfg(feature = "std")]
impl IntBuffer {
    /// Writes this buffer's native wire format: a 32-bit big-endian length, followed by that many
    /// 32-bit big-endian elements. Endianness is fixed to big-endian regardless of host platform.
    pub fn serialize_into<W: Write>(&self, writer: &mut W) -> Result<(), Error> {
        writer.write_u32::<BigEndian>(self.data.len() as u32)?;
        for &word in &self.data {
            writer.write_i32::<BigEndian>(word)?;
        }
        Ok(())
    }

    /// Reads back a buffer written by [`serialize_into`](IntBuffer::serialize_into).
    pub fn deserialize_from<R: Read>(reader: &mut R) -> Result<IntBuffer, Error> {
        let len = reader.read_u32::<BigEndian>()? as usize;
        let mut data = Vec::with_capacity(len);
        for _ in 0..len {
            data.push(reader.read_i32::<BigEndian>()?);
        }
        Ok(IntBuffer { data })
    }
}

impl PartialEq for IntBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl Eq for IntBuffer {}

impl Hash for IntBuffer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rolling_hash().hash(state);
    }
}
