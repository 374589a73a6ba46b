use std::io::{Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::buffer::IntBuffer;
use crate::error::Error;
use crate::SparseBitmap;

impl SparseBitmap {
    /// Writes this bitmap's native wire format: `sizeinwords` as a big-endian u32, followed by the
    /// buffer's own [`IntBuffer::serialize_into`] layout.
    ///
    /// This mirrors the buffer's own layout directly rather than going through [`to_array`] —
    /// round-tripping through positions would lose any `add`-inserted zero-word pairs, which are
    /// part of this type's on-disk identity even though they carry no set bits.
    ///
    /// [`to_array`]: SparseBitmap::to_array
    pub fn serialize_into<W: Write>(&self, writer: &mut W) -> Result<(), Error> {
        writer.write_u32::<BigEndian>(self.sizeinwords)?;
        self.buffer.serialize_into(writer)
    }

    /// Reads back a bitmap written by [`serialize_into`](SparseBitmap::serialize_into).
    pub fn deserialize_from<R: Read>(reader: &mut R) -> Result<SparseBitmap, Error> {
        let sizeinwords = reader.read_u32::<BigEndian>()?;
        let buffer = IntBuffer::deserialize_from(reader)?;
        Ok(SparseBitmap { buffer, sizeinwords })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SparseBitmap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut buf = Vec::with_capacity(self.buffer.size_in_bytes() as usize + 8);
        self.serialize_into(&mut buf).map_err(serde::ser::Error::custom)?;
        serializer.serialize_bytes(&buf)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SparseBitmap {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bytes: Vec<u8> = serde::Deserialize::deserialize(deserializer)?;
        SparseBitmap::deserialize_from(&mut bytes.as_slice()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn round_trips_through_bytes() {
        let bitmap = SparseBitmap::from_sorted([1, 2, 100, 150, 1000, 123456]).unwrap();
        let mut buf = Vec::new();
        bitmap.serialize_into(&mut buf).unwrap();
        let decoded = SparseBitmap::deserialize_from(&mut buf.as_slice()).unwrap();
        assert_eq!(decoded, bitmap);
    }

    #[test]
    fn round_trips_empty_bitmap() {
        let bitmap = SparseBitmap::new();
        let mut buf = Vec::new();
        bitmap.serialize_into(&mut buf).unwrap();
        let decoded = SparseBitmap::deserialize_from(&mut buf.as_slice()).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn round_trip_preserves_expert_added_zero_words() {
        let mut bitmap = SparseBitmap::new();
        bitmap.add(0, 5); // a zero word contributes no set bits but is still part of the layout
        bitmap.add(7, 6);
        let mut buf = Vec::new();
        bitmap.serialize_into(&mut buf).unwrap();
        let decoded = SparseBitmap::deserialize_from(&mut buf.as_slice()).unwrap();
        assert_eq!(decoded, bitmap);
        assert_eq!(decoded.sizeinwords(), 7);
    }

    #[test]
    fn truncated_stream_fails_instead_of_panicking() {
        let bitmap = SparseBitmap::from_sorted([1, 100, 1000]).unwrap();
        let mut buf = Vec::new();
        bitmap.serialize_into(&mut buf).unwrap();
        buf.truncate(buf.len() - 2);
        assert!(SparseBitmap::deserialize_from(&mut buf.as_slice()).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trips_through_bincode() {
        let bitmap = SparseBitmap::from_sorted([1, 2, 100, 150, 1000, 123456]).unwrap();
        let encoded = bincode::serialize(&bitmap).unwrap();
        let decoded: SparseBitmap = bincode::deserialize(&encoded).unwrap();
        assert_eq!(decoded, bitmap);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trips_through_json() {
        let bitmap = SparseBitmap::from_sorted([1, 2, 100]).unwrap();
        let encoded = serde_json::to_string(&bitmap).unwrap();
        let decoded: SparseBitmap = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, bitmap);
    }
}
