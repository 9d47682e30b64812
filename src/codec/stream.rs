// src/codec/stream.rs
//! Bulk encoding and decoding on top of [`BitConverter`].
//!
//! # Example
//!
//! ```
//! use bitconv_rs::BitConverter;
//! use bitconv_rs::codec::stream;
//! use std::io::Cursor;
//!
//! let converter = BitConverter::little_endian();
//! let mut cursor = Cursor::new(vec![1u8, 0, 0, 0, 2, 0, 0, 0]);
//!
//! let values: Vec<i32> = stream::read_values(&converter, &mut cursor, 2).unwrap();
//! assert_eq!(values, vec![1, 2]);
//! ```

use crate::codec::{BitConverter, ByteCodec};
use crate::error::{BitconvError, Result};
use std::io::{Read, Write};
use std::mem;

/// Encode every value of `values` back to back
#[cfg(feature = "buffer")]
pub fn encode_slice<T: ByteCodec>(converter: &BitConverter, values: &[T]) -> bytes::BytesMut {
    use bytes::BufMut;

    let mut buffer = bytes::BytesMut::with_capacity(values.len() * mem::size_of::<T>());
    for &value in values {
        buffer.put_slice(converter.get_bytes(value).as_ref());
    }
    buffer
}

/// Decode a byte slice holding a whole number of values
pub fn decode_slice<T: ByteCodec>(converter: &BitConverter, bytes: &[u8]) -> Result<Vec<T>> {
    let width = mem::size_of::<T>();
    if bytes.len() % width != 0 {
        return Err(BitconvError::TrailingBytes {
            width,
            len: bytes.len(),
        });
    }

    Ok(bytes
        .chunks_exact(width)
        .map(|chunk| converter.decode(chunk))
        .collect())
}

/// Read a single value from a stream
pub fn read_value<T: ByteCodec, R: Read>(converter: &BitConverter, reader: &mut R) -> Result<T> {
    let mut bytes = T::Bytes::default();
    reader.read_exact(bytes.as_mut())?;
    Ok(converter.to_value(&bytes))
}

/// Read `count` values from a stream
pub fn read_values<T: ByteCodec, R: Read>(
    converter: &BitConverter,
    reader: &mut R,
    count: usize,
) -> Result<Vec<T>> {
    if count == 0 {
        return Ok(Vec::new());
    }

    // Read all bytes at once
    let mut bytes = vec![0u8; count * mem::size_of::<T>()];
    reader.read_exact(&mut bytes)?;

    decode_slice(converter, &bytes)
}

/// Write a single value to a stream
pub fn write_value<T: ByteCodec, W: Write>(
    converter: &BitConverter,
    writer: &mut W,
    value: T,
) -> Result<()> {
    writer.write_all(converter.get_bytes(value).as_ref())?;
    Ok(())
}

/// Write every value of `values` to a stream
pub fn write_values<T: ByteCodec, W: Write>(
    converter: &BitConverter,
    writer: &mut W,
    values: &[T],
) -> Result<()> {
    for &value in values {
        write_value(converter, writer, value)?;
    }
    Ok(())
}
