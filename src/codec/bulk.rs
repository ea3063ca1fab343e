//! Whole-buffer views: hex rendering and bulk integer reinterpretation.
//!
//! These operations are total. They never fail, they only decide what to do with a trailing
//! partial element (it is dropped, see [`to_array`]).

use std::fmt::{self, Write};

use crate::codec::{ByteOrder, FixedWidth};

/// `Display` adapter rendering a byte slice as space-separated, uppercase, two-digit hex.
///
/// Formatting writes straight into the destination, so wrapping a buffer in `HexDump` inside
/// a `format!` or a `write!` does not allocate per byte.
///
/// # Examples
///
/// ```rust
/// use fixedbytes::HexDump;
///
/// let data = [0x01, 0x02, 0xFF];
/// assert_eq!(format!("[{}]", HexDump(&data)), "[01 02 FF]");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HexDump<'a>(
    /// The bytes to render
    pub &'a [u8],
);

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, byte) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_char(' ')?;
            }
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

/// Renders a buffer as space-separated, uppercase, two-digit hex.
///
/// An empty buffer renders as an empty string.
///
/// # Examples
///
/// ```rust
/// use fixedbytes::to_hex_string;
///
/// assert_eq!(to_hex_string(&[0x01, 0x02, 0xFF]), "01 02 FF");
/// assert_eq!(to_hex_string(&[]), "");
/// ```
#[must_use]
pub fn to_hex_string(data: &[u8]) -> String {
    let mut hex_string = String::with_capacity(data.len() * 3);
    // Writing into a String cannot fail
    let _ = write!(&mut hex_string, "{}", HexDump(data));
    hex_string
}

/// Reinterprets a buffer as consecutive values of type `T` in the given byte order.
///
/// Produces `data.len() / T::SIZE` elements. A trailing run of fewer than `T::SIZE` bytes is
/// ignored; this is a defined truncation, not an error. Every bit pattern is a valid value, so
/// no validation takes place.
///
/// # Examples
///
/// ```rust
/// use fixedbytes::{to_array, ByteOrder};
///
/// let data = [0x00, 0x01, 0x00, 0x02, 0xAA];
/// let values: Vec<u16> = to_array(&data, ByteOrder::BigEndian);
/// assert_eq!(values, [1, 2]);
/// ```
#[must_use]
pub fn to_array<T: FixedWidth>(data: &[u8], order: ByteOrder) -> Vec<T> {
    data.chunks_exact(T::SIZE)
        .filter_map(|chunk| <T::Bytes>::try_from(chunk).ok())
        .map(|bytes| T::from_bytes(bytes, order))
        .collect()
}

/// Reinterprets a buffer pairwise as little-endian signed 16-bit values.
///
/// Produces `floor(data.len() / 2)` elements; a trailing odd byte is ignored.
///
/// # Examples
///
/// ```rust
/// use fixedbytes::to_i16_array;
///
/// assert_eq!(to_i16_array(&[0x01, 0x00, 0xFF, 0xFF]), [1, -1]);
/// assert_eq!(to_i16_array(&[0x01, 0x00, 0x7F]), [1]);
/// ```
#[must_use]
pub fn to_i16_array(data: &[u8]) -> Vec<i16> {
    to_array(data, ByteOrder::LittleEndian)
}
