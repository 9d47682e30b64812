// src/codec/buffer.rs
use bytes::{BufMut, BytesMut};
use crate::codec::{BitConverter, ByteCodec};
use crate::error::{BitconvError, Result};
use crate::types::NumericKind;
use std::mem;

/// Buffer that accumulates encoded values of a single numeric kind
///
/// Every value is written through the buffer's [`BitConverter`], so the
/// contents have a well-defined byte order no matter which machine produced
/// them. Values of a different kind are rejected.
///
/// # Example
///
/// ```
/// use bitconv_rs::{BitConverter, NumericKind, ValueBuffer};
///
/// let mut buffer = ValueBuffer::new(NumericKind::U16, BitConverter::big_endian());
/// buffer.push(0x1234u16).unwrap();
/// buffer.push(0xABCDu16).unwrap();
///
/// assert_eq!(buffer.value_count(), 2);
/// assert_eq!(buffer.as_bytes(), &[0x12, 0x34, 0xAB, 0xCD]);
/// ```
pub struct ValueBuffer {
    buffer: BytesMut,
    converter: BitConverter,
    kind: NumericKind,
    value_count: u64,
}

/// Values reserved up front by [`ValueBuffer::new`]
const DEFAULT_VALUES: usize = 1024;

impl ValueBuffer {
    /// Create a buffer with room for a thousand values of `kind`
    pub fn new(kind: NumericKind, converter: BitConverter) -> Self {
        Self::with_values(kind, converter, DEFAULT_VALUES)
    }

    /// Create a buffer sized for `values` values of `kind` written in the
    /// converter's byte order
    pub fn with_values(kind: NumericKind, converter: BitConverter, values: usize) -> Self {
        ValueBuffer {
            buffer: BytesMut::with_capacity(values * kind.size()),
            converter,
            kind,
            value_count: 0,
        }
    }

    /// Append a single value
    pub fn push<T: ByteCodec>(&mut self, value: T) -> Result<()> {
        self.check_kind(T::KIND)?;
        self.buffer.put_slice(self.converter.get_bytes(value).as_ref());
        self.value_count += 1;
        Ok(())
    }

    /// Append every value of a slice
    pub fn push_slice<T: ByteCodec>(&mut self, values: &[T]) -> Result<()> {
        self.check_kind(T::KIND)?;

        if values.is_empty() {
            return Ok(());
        }

        self.buffer.reserve(values.len() * mem::size_of::<T>());
        for &value in values {
            self.buffer.put_slice(self.converter.get_bytes(value).as_ref());
        }

        self.value_count += values.len() as u64;
        Ok(())
    }

    /// Decode the whole buffer back into values
    pub fn decode<T: ByteCodec>(&self) -> Result<Vec<T>> {
        self.check_kind(T::KIND)?;
        super::stream::decode_slice(&self.converter, &self.buffer)
    }

    pub fn kind(&self) -> NumericKind {
        self.kind
    }

    /// Get the number of values written to this buffer
    pub fn value_count(&self) -> u64 {
        self.value_count
    }

    /// Encoded length in bytes, always `value_count * kind.size()`
    pub fn byte_len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Get the buffer contents as a byte slice
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Drop every value, keeping the allocation
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.value_count = 0;
    }

    /// Hand over the encoded bytes and start again from empty
    pub fn take(&mut self) -> BytesMut {
        self.value_count = 0;
        mem::take(&mut self.buffer)
    }

    fn check_kind(&self, found: NumericKind) -> Result<()> {
        if self.kind != found {
            Err(BitconvError::KindMismatch {
                expected: self.kind,
                found,
            })
        } else {
            Ok(())
        }
    }
}

impl std::fmt::Debug for ValueBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValueBuffer")
            .field("kind", &self.kind)
            .field("endianness", &self.converter.endianness())
            .field("value_count", &self.value_count)
            .field("byte_len", &self.buffer.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endian::Endianness;

    #[test]
    fn test_push_values() {
        let mut buffer = ValueBuffer::new(NumericKind::I32, BitConverter::little_endian());

        buffer.push(42i32).unwrap();
        buffer.push(-100i32).unwrap();
        buffer.push(0i32).unwrap();

        assert_eq!(buffer.value_count(), 3);
        assert_eq!(buffer.byte_len(), 12);
        assert_eq!(&buffer.as_bytes()[4..8], &[0x9C, 0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn test_push_slice_and_decode() {
        let mut buffer = ValueBuffer::new(NumericKind::F64, BitConverter::big_endian());
        let data = vec![1.0f64, -2.5, f64::INFINITY];

        buffer.push_slice(&data).unwrap();

        assert_eq!(buffer.value_count(), 3);
        assert_eq!(buffer.byte_len(), 24);
        assert_eq!(buffer.decode::<f64>().unwrap(), data);
    }

    #[test]
    fn test_kind_mismatch() {
        let mut buffer = ValueBuffer::new(NumericKind::I32, BitConverter::little_endian());

        let result = buffer.push(2.5f64);

        match result {
            Err(BitconvError::KindMismatch { expected, found }) => {
                assert_eq!(expected, NumericKind::I32);
                assert_eq!(found, NumericKind::F64);
            }
            _ => panic!("Expected KindMismatch error"),
        }
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_clear_and_take() {
        let mut buffer = ValueBuffer::new(NumericKind::U16, BitConverter::little_endian());
        buffer.push_slice(&[1u16, 2, 3]).unwrap();

        let taken = buffer.take();
        assert_eq!(taken.len(), 6);
        assert_eq!(buffer.value_count(), 0);

        buffer.push(9u16).unwrap();
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.value_count(), 0);
    }

    #[test]
    fn test_sized_by_value_count() {
        let mut buffer =
            ValueBuffer::with_values(NumericKind::U64, BitConverter::little_endian(), 4);
        buffer.push_slice(&[u64::MAX; 4]).unwrap();
        assert_eq!(buffer.byte_len(), 4 * NumericKind::U64.size());
        assert!(buffer.as_bytes().iter().all(|&b| b == 0xFF));

        let decoded = buffer.decode::<u64>().unwrap();
        assert_eq!(decoded, vec![u64::MAX; 4]);
        assert!(buffer.decode::<i64>().is_err());
    }

    #[test]
    fn test_debug_formatting() {
        let mut buffer = ValueBuffer::new(NumericKind::U32, BitConverter::new(Endianness::Big));
        buffer.push(1u32).unwrap();

        let debug_str = format!("{:?}", buffer);
        assert!(debug_str.contains("U32"));
        assert!(debug_str.contains("Big"));
        assert!(debug_str.contains("value_count: 1"));
    }
}
