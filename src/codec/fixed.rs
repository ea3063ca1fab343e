//! Named readers and writers for 8, 16 and 32-bit integers.
//!
//! Thin, monomorphic entry points over [`crate::codec::io`] for callers who know the exact
//! type of the field they are handling. Single-byte operations take no byte order; every
//! multi-byte operation requires one.
//!
//! Readers borrow the buffer and fail with [`crate::Error::OutOfBounds`] when
//! `offset + width` exceeds its length. Writers always succeed and return a newly allocated
//! buffer of exactly the value's width.

use crate::{
    codec::{
        io::{encode, read},
        ByteOrder,
    },
    Result,
};

/// Reads an unsigned byte at `offset`.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] if `offset` is not inside the buffer.
pub fn read_u8(data: &[u8], offset: usize) -> Result<u8> {
    // order has no effect on a single byte
    read(data, offset, ByteOrder::LittleEndian)
}

/// Reads a two's complement byte at `offset`.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] if `offset` is not inside the buffer.
pub fn read_i8(data: &[u8], offset: usize) -> Result<i8> {
    read(data, offset, ByteOrder::LittleEndian)
}

/// Reads an unsigned 16-bit integer from `[offset, offset + 2)`.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] if `offset + 1` is not inside the buffer.
///
/// # Examples
///
/// ```rust
/// use fixedbytes::{read_u16, ByteOrder};
///
/// let data = [0x01, 0x00, 0xFF, 0xFF];
/// assert_eq!(read_u16(&data, 2, ByteOrder::LittleEndian)?, 65535);
/// # Ok::<(), fixedbytes::Error>(())
/// ```
pub fn read_u16(data: &[u8], offset: usize, order: ByteOrder) -> Result<u16> {
    read(data, offset, order)
}

/// Reads a signed 16-bit integer from `[offset, offset + 2)`.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] if `offset + 1` is not inside the buffer.
///
/// # Examples
///
/// ```rust
/// use fixedbytes::{read_i16, ByteOrder};
///
/// let data = [0x01, 0x00, 0xFF, 0xFF];
/// assert_eq!(read_i16(&data, 0, ByteOrder::LittleEndian)?, 1);
/// assert_eq!(read_i16(&data, 2, ByteOrder::LittleEndian)?, -1);
/// # Ok::<(), fixedbytes::Error>(())
/// ```
pub fn read_i16(data: &[u8], offset: usize, order: ByteOrder) -> Result<i16> {
    read(data, offset, order)
}

/// Reads an unsigned 32-bit integer from `[offset, offset + 4)`.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] if `offset + 3` is not inside the buffer.
pub fn read_u32(data: &[u8], offset: usize, order: ByteOrder) -> Result<u32> {
    read(data, offset, order)
}

/// Reads a signed 32-bit integer from `[offset, offset + 4)`.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] if `offset + 3` is not inside the buffer.
pub fn read_i32(data: &[u8], offset: usize, order: ByteOrder) -> Result<i32> {
    read(data, offset, order)
}

/// Encodes an unsigned byte.
#[must_use]
pub fn write_u8(value: u8) -> Vec<u8> {
    encode(value, ByteOrder::LittleEndian)
}

/// Encodes a two's complement byte.
#[must_use]
pub fn write_i8(value: i8) -> Vec<u8> {
    encode(value, ByteOrder::LittleEndian)
}

/// Encodes an unsigned 16-bit integer into two bytes.
#[must_use]
pub fn write_u16(value: u16, order: ByteOrder) -> Vec<u8> {
    encode(value, order)
}

/// Encodes a signed 16-bit integer into two bytes.
#[must_use]
pub fn write_i16(value: i16, order: ByteOrder) -> Vec<u8> {
    encode(value, order)
}

/// Encodes an unsigned 32-bit integer into four bytes.
///
/// # Examples
///
/// ```rust
/// use fixedbytes::{write_u32, ByteOrder};
///
/// assert_eq!(write_u32(0x1234_5678, ByteOrder::BigEndian), vec![0x12, 0x34, 0x56, 0x78]);
/// assert_eq!(write_u32(0x1234_5678, ByteOrder::LittleEndian), vec![0x78, 0x56, 0x34, 0x12]);
/// ```
#[must_use]
pub fn write_u32(value: u32, order: ByteOrder) -> Vec<u8> {
    encode(value, order)
}

/// Encodes a signed 32-bit integer into four bytes.
#[must_use]
pub fn write_i32(value: i32, order: ByteOrder) -> Vec<u8> {
    encode(value, order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    const LE: ByteOrder = ByteOrder::LittleEndian;
    const BE: ByteOrder = ByteOrder::BigEndian;

    #[test]
    fn single_bytes() {
        let data = [0x7F, 0x80, 0xFF];

        assert_eq!(read_u8(&data, 0).unwrap(), 0x7F);
        assert_eq!(read_i8(&data, 0).unwrap(), 127);
        assert_eq!(read_u8(&data, 1).unwrap(), 0x80);
        assert_eq!(read_i8(&data, 1).unwrap(), -128);
        assert_eq!(read_i8(&data, 2).unwrap(), -1);

        assert_eq!(
            read_u8(&data, 3),
            Err(Error::OutOfBounds {
                offset: 3,
                width: 1,
                len: 3
            })
        );
        assert!(read_i8(&[], 0).is_err());

        assert_eq!(write_u8(0xAB), vec![0xAB]);
        assert_eq!(write_i8(-1), vec![0xFF]);
        assert_eq!(write_i8(i8::MIN), vec![0x80]);
    }

    #[test]
    fn sixteen_bit() {
        let data = [0x01, 0x00, 0xFF, 0xFF];

        assert_eq!(read_i16(&data, 0, LE).unwrap(), 1);
        assert_eq!(read_i16(&data, 2, LE).unwrap(), -1);
        assert_eq!(read_u16(&data, 0, LE).unwrap(), 1);
        assert_eq!(read_u16(&data, 2, LE).unwrap(), 65535);
        assert_eq!(read_u16(&data, 0, BE).unwrap(), 0x0100);
        assert_eq!(read_u16(&data, 1, BE).unwrap(), 0x00FF);

        assert!(matches!(
            read_i16(&data, 3, LE),
            Err(Error::OutOfBounds { width: 2, .. })
        ));

        assert_eq!(write_u16(0x0102, BE), vec![0x01, 0x02]);
        assert_eq!(write_u16(0x0102, LE), vec![0x02, 0x01]);
        assert_eq!(write_i16(-2, BE), vec![0xFF, 0xFE]);
        assert_eq!(write_i16(i16::MIN, LE), vec![0x00, 0x80]);
    }

    #[test]
    fn thirty_two_bit() {
        let data = [0x01, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF];

        assert_eq!(read_u32(&data, 0, LE).unwrap(), 1);
        assert_eq!(read_u32(&data, 4, LE).unwrap(), 4_294_967_295);
        assert_eq!(read_i32(&data, 0, LE).unwrap(), 1);
        assert_eq!(read_i32(&data, 4, LE).unwrap(), -1);
        assert_eq!(read_u32(&data, 0, BE).unwrap(), 0x0100_0000);

        for offset in 5..=9 {
            assert!(matches!(
                read_u32(&data, offset, BE),
                Err(Error::OutOfBounds { width: 4, .. })
            ));
        }

        assert_eq!(write_i32(-1, LE), vec![0xFF; 4]);
        assert_eq!(write_i32(i32::MIN, BE), vec![0x80, 0x00, 0x00, 0x00]);
        assert_eq!(write_u32(1, LE), vec![0x01, 0x00, 0x00, 0x00]);
    }
}
