//! Bounds-checked, endian-aware reading and writing of fixed-width integers.
//!
//! This module is the foundation of the crate. It provides safe reading and writing of
//! primitive integers from and to byte buffers, in an explicitly chosen byte order, with every
//! access checked against the buffer length before a single byte is touched.
//!
//! # Architecture
//!
//! The module is built around the [`crate::codec::io::FixedWidth`] trait, which ties each
//! integer type to the byte array it is encoded as. Generic functions on top of the trait
//! provide:
//!
//! - Reads at a fixed offset or at a cursor that advances past the value
//! - In-place writes into a caller-owned mutable buffer
//! - Encoding into a newly allocated byte vector
//! - Consistent error handling through the [`crate::Result`] type
//!
//! # Key Components
//!
//! ## Core Trait
//! - [`crate::codec::io::FixedWidth`] - Width and byte conversions for a primitive integer
//!
//! ## Reading Functions
//! - [`crate::codec::io::read`] - Read a value at a fixed offset
//! - [`crate::codec::io::read_at`] - Read a value and advance the offset past it
//!
//! ## Writing Functions
//! - [`crate::codec::io::write`] - Write a value at a fixed offset of a mutable buffer
//! - [`crate::codec::io::write_at`] - Write a value and advance the offset past it
//! - [`crate::codec::io::encode`] - Encode a value into a new `Vec<u8>`
//!
//! ## Supported Types
//! The [`crate::codec::io::FixedWidth`] trait is implemented for:
//! - **Unsigned integers**: `u8`, `u16`, `u32`, `u64`
//! - **Signed integers**: `i8`, `i16`, `i32`, `i64`
//!
//! # Usage Examples
//!
//! ## Sequential Reading with Offset Tracking
//!
//! ```rust
//! use fixedbytes::{read_at, ByteOrder};
//!
//! let data = [0x01, 0x00, 0x02, 0x00, 0x03, 0x00, 0x00, 0x00];
//! let mut offset = 0;
//!
//! let first: u16 = read_at(&data, &mut offset, ByteOrder::LittleEndian)?;  // offset: 0 -> 2
//! let second: u16 = read_at(&data, &mut offset, ByteOrder::LittleEndian)?; // offset: 2 -> 4
//! let third: u32 = read_at(&data, &mut offset, ByteOrder::LittleEndian)?;  // offset: 4 -> 8
//!
//! assert_eq!((first, second, third), (1, 2, 3));
//! assert_eq!(offset, 8);
//! # Ok::<(), fixedbytes::Error>(())
//! ```
//!
//! ## Writing into a Caller-Owned Buffer
//!
//! ```rust
//! use fixedbytes::{write_at, ByteOrder};
//!
//! let mut data = [0u8; 6];
//! let mut offset = 0;
//!
//! write_at(&mut data, &mut offset, 0x0102u16, ByteOrder::BigEndian)?;
//! write_at(&mut data, &mut offset, -2i32, ByteOrder::LittleEndian)?;
//!
//! assert_eq!(data, [0x01, 0x02, 0xFE, 0xFF, 0xFF, 0xFF]);
//! # Ok::<(), fixedbytes::Error>(())
//! ```
//!
//! # Error Handling
//!
//! All fallible functions return [`crate::Error::OutOfBounds`] when `offset + width` exceeds
//! the buffer length, including offsets so large the sum would overflow. On failure neither the
//! buffer nor the offset is modified.
//!
//! # Thread Safety
//!
//! All functions in this module are pure with respect to shared state. They only touch the
//! buffer and offset passed in, so they can be called concurrently on independent buffers.

use crate::{codec::ByteOrder, Result};

/// Trait for primitive integers with a fixed-width binary representation.
///
/// Each implementation names the byte array its values are encoded as (e.g. `[u8; 4]` for
/// `u32`) and converts between the two in either byte order. The provided
/// [`FixedWidth::from_bytes`] and [`FixedWidth::to_bytes`] methods dispatch on a runtime
/// [`ByteOrder`], which is what the rest of the crate uses.
///
/// # Examples
///
/// ```rust
/// use fixedbytes::{ByteOrder, FixedWidth};
///
/// assert_eq!(<u32 as FixedWidth>::SIZE, 4);
/// assert_eq!(0x0102_0304u32.to_bytes(ByteOrder::BigEndian), [0x01, 0x02, 0x03, 0x04]);
/// assert_eq!(i16::from_bytes([0xFF, 0xFF], ByteOrder::LittleEndian), -1);
/// ```
pub trait FixedWidth: Sized + Copy {
    /// Byte array holding the encoded value.
    type Bytes: Sized + Copy + AsRef<[u8]> + for<'a> TryFrom<&'a [u8]>;

    /// Number of bytes a value occupies.
    const SIZE: usize;

    /// Read T from a byte array in little-endian
    fn from_le_bytes(bytes: Self::Bytes) -> Self;
    /// Read T from a byte array in big-endian
    fn from_be_bytes(bytes: Self::Bytes) -> Self;

    /// Write T to a byte array in little-endian
    fn to_le_bytes(self) -> Self::Bytes;
    /// Write T to a byte array in big-endian
    fn to_be_bytes(self) -> Self::Bytes;

    /// Read T from a byte array in the given byte order
    fn from_bytes(bytes: Self::Bytes, order: ByteOrder) -> Self {
        match order {
            ByteOrder::BigEndian => Self::from_be_bytes(bytes),
            ByteOrder::LittleEndian => Self::from_le_bytes(bytes),
        }
    }

    /// Write T to a byte array in the given byte order
    fn to_bytes(self, order: ByteOrder) -> Self::Bytes {
        match order {
            ByteOrder::BigEndian => self.to_be_bytes(),
            ByteOrder::LittleEndian => self.to_le_bytes(),
        }
    }
}

impl_fixed_width!(u8, i8, u16, i16, u32, i32, u64, i64);

/// Returns the exclusive end of `[offset, offset + width)` if it lies within `len`.
fn checked_end(len: usize, offset: usize, width: usize) -> Result<usize> {
    match offset.checked_add(width) {
        Some(end) if end <= len => Ok(end),
        _ => Err(out_of_bounds_error!(offset, width, len)),
    }
}

/// Safely reads a value of type `T` at a fixed offset.
///
/// # Arguments
///
/// * `data` - The byte buffer to read from
/// * `offset` - Position of the first byte of the value
/// * `order` - Byte order the value is stored in
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if `offset + T::SIZE` exceeds the buffer length.
///
/// # Examples
///
/// ```rust
/// use fixedbytes::{read, ByteOrder};
///
/// let data = [0x01, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF];
/// let value: u32 = read(&data, 4, ByteOrder::LittleEndian)?;
/// assert_eq!(value, u32::MAX);
/// # Ok::<(), fixedbytes::Error>(())
/// ```
pub fn read<T: FixedWidth>(data: &[u8], offset: usize, order: ByteOrder) -> Result<T> {
    let mut cursor = offset;
    read_at(data, &mut cursor, order)
}

/// Safely reads a value of type `T` at a specific offset and advances the offset past it.
///
/// # Arguments
///
/// * `data` - The byte buffer to read from
/// * `offset` - Mutable reference to the offset position (advanced by `T::SIZE` on success)
/// * `order` - Byte order the value is stored in
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if there are insufficient bytes. The offset is left
/// unchanged in that case.
///
/// # Examples
///
/// ```rust
/// use fixedbytes::{read_at, ByteOrder};
///
/// let data = [0x00, 0x01, 0x00, 0x02];
/// let mut offset = 0;
///
/// let first: u16 = read_at(&data, &mut offset, ByteOrder::BigEndian)?;
/// assert_eq!(first, 1);
/// assert_eq!(offset, 2);
/// # Ok::<(), fixedbytes::Error>(())
/// ```
///
/// # Thread Safety
///
/// The offset parameter is modified, so each thread should use its own offset variable.
pub fn read_at<T: FixedWidth>(data: &[u8], offset: &mut usize, order: ByteOrder) -> Result<T> {
    let end = checked_end(data.len(), *offset, T::SIZE)?;

    let Ok(bytes) = <T::Bytes>::try_from(&data[*offset..end]) else {
        return Err(out_of_bounds_error!(*offset, T::SIZE, data.len()));
    };

    *offset = end;

    Ok(T::from_bytes(bytes, order))
}

/// Safely writes a value of type `T` at a fixed offset of a mutable buffer.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if `offset + T::SIZE` exceeds the buffer length.
///
/// # Examples
///
/// ```rust
/// use fixedbytes::{write, ByteOrder};
///
/// let mut data = [0u8; 4];
/// write(&mut data, 2, 0x1234u16, ByteOrder::BigEndian)?;
/// assert_eq!(data, [0x00, 0x00, 0x12, 0x34]);
/// # Ok::<(), fixedbytes::Error>(())
/// ```
pub fn write<T: FixedWidth>(
    data: &mut [u8],
    offset: usize,
    value: T,
    order: ByteOrder,
) -> Result<()> {
    let mut cursor = offset;
    write_at(data, &mut cursor, value, order)
}

/// Safely writes a value of type `T` at a specific offset and advances the offset past it.
///
/// # Arguments
///
/// * `data` - The mutable byte buffer to write to
/// * `offset` - Mutable reference to the offset position (advanced by `T::SIZE` on success)
/// * `value` - The value to write
/// * `order` - Byte order to store the value in
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if there are insufficient bytes. Neither the buffer
/// nor the offset is modified in that case.
///
/// # Examples
///
/// ```rust
/// use fixedbytes::{write_at, ByteOrder};
///
/// let mut data = [0u8; 4];
/// let mut offset = 0;
///
/// write_at(&mut data, &mut offset, 1u16, ByteOrder::LittleEndian)?;
/// write_at(&mut data, &mut offset, 2u16, ByteOrder::LittleEndian)?;
/// assert_eq!(offset, 4);
/// assert_eq!(data, [0x01, 0x00, 0x02, 0x00]);
/// # Ok::<(), fixedbytes::Error>(())
/// ```
///
/// # Thread Safety
///
/// The offset parameter is modified, so each thread should use its own offset variable.
pub fn write_at<T: FixedWidth>(
    data: &mut [u8],
    offset: &mut usize,
    value: T,
    order: ByteOrder,
) -> Result<()> {
    let end = checked_end(data.len(), *offset, T::SIZE)?;

    data[*offset..end].copy_from_slice(value.to_bytes(order).as_ref());
    *offset = end;

    Ok(())
}

/// Encodes a value into a newly allocated buffer of exactly `T::SIZE` bytes.
///
/// # Examples
///
/// ```rust
/// use fixedbytes::{encode, ByteOrder};
///
/// assert_eq!(encode(-1i16, ByteOrder::BigEndian), vec![0xFF, 0xFF]);
/// assert_eq!(encode(0x0102_0304u32, ByteOrder::LittleEndian), vec![0x04, 0x03, 0x02, 0x01]);
/// ```
#[must_use]
pub fn encode<T: FixedWidth>(value: T, order: ByteOrder) -> Vec<u8> {
    value.to_bytes(order).as_ref().to_vec()
}
