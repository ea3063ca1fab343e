//! Deliberately lossy 16-bit views of wider integers.
//!
//! Some formats reserve exactly two bytes for a value the host program keeps in a wider
//! integer (length fields, port numbers, short identifiers). The functions here produce those
//! two bytes by keeping the low 16 bits and discarding everything above them.
//!
//! **These are narrowing conversions, not general-purpose encoders.** `0x0001_0102` and
//! `0x0102` produce the same output. Callers that need lossless behaviour must check the
//! magnitude first, or use [`crate::encode_value`] with [`crate::IntKind::U16`] /
//! [`crate::IntKind::I16`], which rejects values that do not fit.

use crate::codec::{io::FixedWidth, ByteOrder};

/// Returns the low 16 bits of `value` as two big-endian bytes.
///
/// Bits above the lowest 16 are silently discarded. Negative values contribute their two's
/// complement low bits, so `-1` yields `[0xFF, 0xFF]`.
///
/// # Examples
///
/// ```rust
/// use fixedbytes::first_two_bytes_big_endian;
///
/// assert_eq!(first_two_bytes_big_endian(258), [0x01, 0x02]);
/// assert_eq!(first_two_bytes_big_endian(42), [0x00, 0x2A]);
///
/// // truncating: only the low 16 bits survive
/// assert_eq!(first_two_bytes_big_endian(0x0001_0102), [0x01, 0x02]);
/// ```
#[must_use]
pub fn first_two_bytes_big_endian(value: i64) -> [u8; 2] {
    low_two_bytes(value, ByteOrder::BigEndian)
}

/// Returns the low 16 bits of `value` as two bytes in the given order.
///
/// Same narrowing as [`first_two_bytes_big_endian`], with the byte order made explicit.
///
/// # Examples
///
/// ```rust
/// use fixedbytes::{low_two_bytes, ByteOrder};
///
/// assert_eq!(low_two_bytes(0x0102, ByteOrder::LittleEndian), [0x02, 0x01]);
/// assert_eq!(low_two_bytes(0x0102, ByteOrder::BigEndian), [0x01, 0x02]);
/// ```
#[must_use]
pub fn low_two_bytes(value: i64, order: ByteOrder) -> [u8; 2] {
    (value as u16).to_bytes(order)
}
